//! Single character <-> digit value conversion.

use snafu::ensure;

use crate::types::{
    BooleanInvalidSnafu, BooleanOverflowSnafu, DecimalInvalidSnafu, DecimalOverflowSnafu, Error,
    HexadecimalInvalidSnafu, HexadecimalOverflowSnafu,
};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns true if `c` is `0` or `1`.
pub const fn is_boolean(c: u8) -> bool {
    c == b'0' || c == b'1'
}

/// Returns true if `c` is in `0`..=`9`.
pub const fn is_decimal(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns true if `c` is a hexadecimal digit, in either case.
pub const fn is_hexadecimal(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// Convert a bit value to `0` or `1`.
/// # Errors
/// Returns [`Error::BooleanOverflow`] if `value` is larger than 1.
pub fn boolean_to_char(value: u8) -> Result<u8, Error> {
    ensure!(value <= 1, BooleanOverflowSnafu);
    Ok(b'0' + value)
}

/// # Errors
/// Returns [`Error::BooleanInvalid`] if `c` isn't `0` or `1`.
pub fn char_to_boolean(c: u8) -> Result<u8, Error> {
    ensure!(is_boolean(c), BooleanInvalidSnafu);
    Ok(c - b'0')
}

/// Convert a value in 0..=9 to its decimal digit.
/// # Errors
/// Returns [`Error::DecimalOverflow`] if `value` is larger than 9.
pub fn decimal_to_char(value: u8) -> Result<u8, Error> {
    ensure!(value <= 9, DecimalOverflowSnafu);
    Ok(b'0' + value)
}

/// # Errors
/// Returns [`Error::DecimalInvalid`] if `c` isn't a decimal digit.
pub fn char_to_decimal(c: u8) -> Result<u8, Error> {
    ensure!(is_decimal(c), DecimalInvalidSnafu);
    Ok(c - b'0')
}

/// Convert a nibble to its upper-case hexadecimal digit.
/// # Errors
/// Returns [`Error::HexadecimalOverflow`] if `value` is larger than 15.
pub fn hexadecimal_to_char(value: u8) -> Result<u8, Error> {
    ensure!(value <= 0xF, HexadecimalOverflowSnafu);
    Ok(HEX_DIGITS[value as usize])
}

/// Convert a hexadecimal digit, either case, to its nibble value.
/// # Errors
/// Returns [`Error::HexadecimalInvalid`] if `c` isn't a hexadecimal digit.
pub fn char_to_hexadecimal(c: u8) -> Result<u8, Error> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'A'..=b'F' => Ok(c - b'A' + 0xA),
        b'a'..=b'f' => Ok(c - b'a' + 0xA),
        _ => HexadecimalInvalidSnafu.fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        for n in 0..=9 {
            let c = decimal_to_char(n).unwrap();
            assert!(is_decimal(c));
            assert_eq!(char_to_decimal(c), Ok(n));
        }
        assert_eq!(decimal_to_char(10), Err(Error::DecimalOverflow));
        assert_eq!(char_to_decimal(b'a'), Err(Error::DecimalInvalid));
        assert_eq!(char_to_decimal(b'/'), Err(Error::DecimalInvalid));
        assert_eq!(char_to_decimal(0), Err(Error::DecimalInvalid));
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(hexadecimal_to_char(0), Ok(b'0'));
        assert_eq!(hexadecimal_to_char(0xA), Ok(b'A'));
        assert_eq!(hexadecimal_to_char(0xF), Ok(b'F'));
        assert_eq!(hexadecimal_to_char(0x10), Err(Error::HexadecimalOverflow));

        assert_eq!(char_to_hexadecimal(b'7'), Ok(7));
        assert_eq!(char_to_hexadecimal(b'c'), Ok(0xC));
        assert_eq!(char_to_hexadecimal(b'C'), Ok(0xC));
        assert_eq!(char_to_hexadecimal(b'g'), Err(Error::HexadecimalInvalid));
        assert_eq!(char_to_hexadecimal(b'G'), Err(Error::HexadecimalInvalid));
        assert!(is_hexadecimal(b'f'));
        assert!(!is_hexadecimal(b'x'));
    }

    #[test]
    fn test_boolean() {
        assert_eq!(boolean_to_char(1), Ok(b'1'));
        assert_eq!(boolean_to_char(2), Err(Error::BooleanOverflow));
        assert_eq!(char_to_boolean(b'0'), Ok(0));
        assert_eq!(char_to_boolean(b'2'), Err(Error::BooleanInvalid));
    }

    #[test]
    fn test_error_selectors() {
        assert_eq!(DecimalOverflowSnafu.fail::<u8>(), Err(Error::DecimalOverflow));
        assert_eq!(
            HexadecimalInvalidSnafu.fail::<u8>(),
            Err(Error::HexadecimalInvalid)
        );
        assert_eq!(BooleanInvalidSnafu.fail::<u8>(), Err(Error::BooleanInvalid));
    }
}
