//! Fixed 5 character display fields for values scaled by 1000.
//!
//! | input range            | field   |
//! |------------------------|---------|
//! | `[0, 10_000)`          | `u.ddd` |
//! | `[10_000, 100_000)`    | `uu.dd` |
//! | `[100_000, 1_000_000)` | `uuu.d` |
//! | `[1_000_000, ..)`      | `uuuuu` |
//!
//! Digits below the field's precision are truncated, not rounded.

use log::{debug, warn};

use core::convert::TryFrom;

use crate::buffer::Buffer;
use crate::digit::decimal_to_char;
use crate::types::Error;

pub const FRACTIONAL_WIDTH: usize = 5;

/// Text produced by [`value_to_5_digits_string()`].
pub type FractionalString = Buffer<6>;

/// Integer part no longer fits the field above this.
const FIELD_LIMIT: u32 = 100_000_000;

/// Render `value / 1000` in a five character field.
///
/// Negative values render as `0.000`. Values whose integer part needs more
/// than five digits keep only the five least significant ones.
///
/// ```
/// use node_codec::value_to_5_digits_string;
/// assert_eq!(value_to_5_digits_string(1234), "1.234");
/// assert_eq!(value_to_5_digits_string(12345), "12.34");
/// ```
pub fn value_to_5_digits_string(value: i32) -> FractionalString {
    let scaled = if value < 0 {
        warn!("Negative scaled value {} rendered as zero", value);
        0
    } else {
        value as u32
    };

    let field = render_field(scaled).unwrap_or_else(|err| {
        warn!("Scaled value {} not rendered: {}", scaled, err);
        *b"?????"
    });
    FractionalString::from_truncated(&field)
}

fn render_field(scaled: u32) -> Result<[u8; FRACTIONAL_WIDTH], Error> {
    Ok(match scaled {
        0..=9_999 => {
            let [u, d1, d2, d3] = place_digits(scaled, [1_000, 100, 10, 1])?;
            [u, b'.', d1, d2, d3]
        }
        10_000..=99_999 => {
            let [u1, u2, d1, d2] = place_digits(scaled, [10_000, 1_000, 100, 10])?;
            [u1, u2, b'.', d1, d2]
        }
        100_000..=999_999 => {
            let [u1, u2, u3, d1] = place_digits(scaled, [100_000, 10_000, 1_000, 100])?;
            [u1, u2, u3, b'.', d1]
        }
        _ => {
            let kept = scaled % FIELD_LIMIT;
            if kept != scaled {
                debug!("Scaled value {} truncated to {}", scaled, kept);
            }
            place_digits(kept, [10_000_000, 1_000_000, 100_000, 10_000, 1_000])?
        }
    })
}

/// Decimal digits of `value` at each of `places`, most significant first.
/// Digits below the last place are dropped.
/// # Errors
/// Returns [`Error::DecimalOverflow`] if `value` doesn't fit below the
/// first place times ten.
fn place_digits<const K: usize>(mut value: u32, places: [u32; K]) -> Result<[u8; K], Error> {
    let mut digits = [0; K];
    for (digit, place) in digits.iter_mut().zip(places.iter()) {
        let n = value / place;
        value -= n * place;
        *digit = decimal_to_char(u8::try_from(n).unwrap_or(u8::MAX))?;
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(value_to_5_digits_string(0), "0.000");
        assert_eq!(value_to_5_digits_string(5), "0.005");
        assert_eq!(value_to_5_digits_string(1234), "1.234");
        assert_eq!(value_to_5_digits_string(9_999), "9.999");
        assert_eq!(value_to_5_digits_string(10_000), "10.00");
        assert_eq!(value_to_5_digits_string(12_345), "12.34");
        assert_eq!(value_to_5_digits_string(99_999), "99.99");
        assert_eq!(value_to_5_digits_string(123_456), "123.4");
        assert_eq!(value_to_5_digits_string(1_000_000), "01000");
        assert_eq!(value_to_5_digits_string(12_345_678), "12345");
    }

    #[test]
    fn test_out_of_field() {
        assert_eq!(value_to_5_digits_string(-1), "0.000");
        assert_eq!(value_to_5_digits_string(123_456_789), "23456");
        let text = value_to_5_digits_string(i32::MAX);
        assert_eq!(text.len(), FRACTIONAL_WIDTH);
        assert_eq!(text.as_bytes_with_nul()[FRACTIONAL_WIDTH], 0);
    }

    #[test]
    fn test_truncated_integer_part() {
        assert_eq!(value_to_5_digits_string(99_999_999), "99999");
        assert_eq!(value_to_5_digits_string(100_000_000), "00000");
        assert_eq!(value_to_5_digits_string(1_000_000_000), "00000");
        assert_eq!(value_to_5_digits_string(2_100_012_345), "00012");
        assert_eq!(value_to_5_digits_string(i32::MAX), "47483");
    }

    #[test]
    fn test_place_digits() {
        assert_eq!(place_digits(907, [100, 10, 1]), Ok(*b"907"));
        assert_eq!(place_digits(9_876, [1_000, 100]), Ok(*b"98"));
        assert_eq!(place_digits(100, [10]), Err(Error::DecimalOverflow));
    }
}
