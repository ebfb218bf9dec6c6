//! Byte array <-> hexadecimal string conversion.

use log::debug;
use snafu::ensure;

use crate::buffer::append_string;
use crate::convert::{string_to_value, value_to_string};
use crate::digit::is_hexadecimal;
use crate::nom_parser::hex_region;
use crate::types::{
    Error, Format, HexadecimalInvalidSnafu, HexadecimalOddSizeSnafu, NullParameterSnafu,
};

/// Write `bytes` as upper-case hex pairs into `output`, optionally prefixed by
/// `0x`, and terminate it. Returns the length of the text.
///
/// ```
/// use node_codec::byte_array_to_hex_string;
/// let mut out = [0; 8];
/// assert_eq!(byte_array_to_hex_string(&[0x0A, 0x1F], true, &mut out), Ok(6));
/// assert_eq!(&out[..7], b"0x0A1F\0");
/// ```
/// # Errors
/// Returns [`Error::AppendOverflow`] if `output` is too small, with the characters
/// that did fit left in place, and [`Error::NullParameter`] if `output` is
/// empty.
pub fn byte_array_to_hex_string(
    bytes: &[u8],
    print_prefix: bool,
    output: &mut [u8],
) -> Result<usize, Error> {
    ensure!(!output.is_empty(), NullParameterSnafu);
    let mut cursor = 0;
    append_string(output, b"", &mut cursor)?;
    if print_prefix {
        append_string(output, Format::Hexadecimal.prefix(), &mut cursor)?;
    }
    for byte in bytes {
        let pair = value_to_string((*byte).into(), Format::Hexadecimal, false)?;
        append_string(output, pair.as_bytes(), &mut cursor)?;
    }
    Ok(cursor)
}

/// Decode the hex string in `text` into `output`.
///
/// Decoding stops at `end_marker`, a NUL or the end of `text`. A leading `0x`
/// is skipped. Returns the number of bytes written, which is less than the
/// number of pairs if `output` is too short.
///
/// ```
/// use node_codec::hex_string_to_byte_array;
/// let mut bytes = [0; 4];
/// assert_eq!(hex_string_to_byte_array(b"0A1F;", b';', &mut bytes), Ok(2));
/// assert_eq!(&bytes[..2], &[0x0Au8, 0x1F]);
/// ```
/// # Errors
/// * [`Error::HexadecimalInvalid`] on a non-hex character before the end.
/// * [`Error::HexadecimalOddSize`] if the number of hex characters is odd.
/// * [`Error::NullParameter`] if `output` is empty.
pub fn hex_string_to_byte_array(
    text: &[u8],
    end_marker: u8,
    output: &mut [u8],
) -> Result<usize, Error> {
    ensure!(!output.is_empty(), NullParameterSnafu);
    let region = hex_region(text, end_marker);
    ensure!(region.iter().all(|&c| is_hexadecimal(c)), HexadecimalInvalidSnafu);
    ensure!(region.len() % 2 == 0, HexadecimalOddSizeSnafu);

    let mut extracted = 0;
    for (pair, byte) in region.chunks_exact(2).zip(output.iter_mut()) {
        *byte = string_to_value(pair, Format::Hexadecimal, 2)? as u8;
        extracted += 1;
    }
    if extracted < region.len() / 2 {
        debug!(
            "Output holds {} of {} decoded bytes",
            extracted,
            region.len() / 2
        );
    }
    Ok(extracted)
}
