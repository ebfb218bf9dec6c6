use std::convert::TryFrom;

use node_codec::{
    append_string, byte_array_to_hex_string, copy, digit_count_of, get_size,
    hex_string_to_byte_array, string_to_value, value_to_5_digits_string, value_to_string,
    CopyRequest, Error, Format, Justification, MAX_STRING_SIZE,
};

/// Values spread over the whole i32 range, including both ends.
fn sample_values() -> impl Iterator<Item = i32> {
    let step = 7_919 * 65_537;
    (i32::MIN..=i32::MAX)
        .step_by(step)
        .chain([i32::MIN, i32::MAX, 0, 1, -1, 15, 16, -255, 256].iter().copied())
}

#[test]
fn value_string_round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();
    for v in sample_values() {
        for &format in [Format::Decimal, Format::Hexadecimal].iter() {
            let text = value_to_string(v, format, false).unwrap();
            let digits = digit_count_of(v, format);
            assert_eq!(
                string_to_value(text.as_bytes(), format, digits),
                Ok(v),
                "{:?} {:?}",
                text.as_str(),
                format
            );
        }
    }
}

#[test]
fn hex_digit_count_is_even() {
    for v in sample_values() {
        let text = value_to_string(v, Format::Hexadecimal, false).unwrap();
        let digits = text.as_bytes().iter().filter(|c| c.is_ascii_hexdigit()).count();
        assert_eq!(digits % 2, 0, "{:?}", text.as_str());
        assert!(digits <= Format::Hexadecimal.max_digits());
    }
}

#[test]
fn documented_examples() {
    assert_eq!(value_to_string(0, Format::Decimal, false).unwrap(), "0");
    assert_eq!(value_to_string(-5, Format::Decimal, false).unwrap(), "-5");
    assert_eq!(value_to_string(255, Format::Hexadecimal, true).unwrap(), "0xFF");

    let mut bytes = [0; 8];
    assert_eq!(hex_string_to_byte_array(b"0A1F", b';', &mut bytes), Ok(2));
    assert_eq!(&bytes[..2], &[0x0Au8, 0x1F]);

    let mut field = [0; 6];
    copy(
        CopyRequest::new(b"AB", &mut field)
            .capacity(5)
            .flush(b'-')
            .justify(Justification::Right),
    )
    .unwrap();
    assert_eq!(&field[..5], b"---AB");

    assert_eq!(value_to_5_digits_string(1234), "1.234");
    assert_eq!(value_to_5_digits_string(12345), "12.34");

    assert_eq!(get_size(&[b'a'; 101]), Err(Error::SizeOverflow));
}

#[test]
fn append_never_writes_past_capacity() {
    const CAPACITY: usize = 10;
    for text_len in 0..(2 * CAPACITY) {
        let text = vec![b'x'; text_len];
        let mut storage = [0xEE; CAPACITY + 4];
        let mut cursor = 0;
        let result = append_string(&mut storage[..CAPACITY], &text, &mut cursor);

        assert_eq!(result.is_err(), text_len + 1 > CAPACITY, "{}", text_len);
        assert_eq!(cursor, text_len.min(CAPACITY - 1));
        assert_eq!(storage[cursor], 0);
        assert!(storage[CAPACITY..].iter().all(|&b| b == 0xEE));
    }
}

#[test]
fn hex_byte_array_round_trip() {
    let data: Vec<u8> = (0..=255).collect();
    let mut text = vec![0; 2 * data.len() + 3];
    let len = byte_array_to_hex_string(&data, true, &mut text).unwrap();
    assert_eq!(len, 2 + 2 * data.len());
    assert_eq!(get_size(&text[..10]), Ok(10));

    let mut decoded = vec![0; data.len()];
    assert_eq!(
        hex_string_to_byte_array(&text, b';', &mut decoded),
        Ok(data.len())
    );
    assert_eq!(decoded, data);
}

#[test]
fn raw_codes() {
    assert_eq!(Format::try_from(1), Ok(Format::Decimal));
    assert_eq!(Format::try_from(9), Err(Error::UnknownFormat));
    assert_eq!(Justification::try_from(2), Ok(Justification::Right));
    assert_eq!(
        Justification::try_from(3),
        Err(Error::UnknownJustification)
    );
}

#[test]
fn size_bound() {
    let text = [b'y'; MAX_STRING_SIZE];
    assert_eq!(get_size(&text), Ok(MAX_STRING_SIZE));
}
