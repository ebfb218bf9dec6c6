//! Signed 32-bit integer <-> ASCII conversion.
//!
//! Negative values are written as a `-` followed by the magnitude in every
//! format, so `-1` in hexadecimal is `-01`, not `FFFFFFFF`.

use arrayvec::ArrayVec;
use core::convert::TryFrom;
use log::{debug, trace};
use snafu::ensure;

use crate::buffer::Buffer;
use crate::digit::{
    boolean_to_char, char_to_boolean, char_to_decimal, char_to_hexadecimal, decimal_to_char,
    hexadecimal_to_char,
};
use crate::nom_parser::signed_digits;
use crate::types::{
    BooleanSizeSnafu, DecimalOverflowSnafu, Error, Format, HexadecimalOddSizeSnafu,
    HexadecimalOverflowSnafu, NullParameterSnafu,
};

/// Room for a sign, a prefix, 32 binary digits and the terminator.
pub const VALUE_STRING_CAPACITY: usize = 36;

/// Text produced by [`value_to_string()`].
pub type ValueString = Buffer<VALUE_STRING_CAPACITY>;

const DECIMAL_WEIGHTS: [u32; 10] = [
    1_000_000_000,
    100_000_000,
    10_000_000,
    1_000_000,
    100_000,
    10_000,
    1_000,
    100,
    10,
    1,
];

type DigitStore = ArrayVec<u8, 32>;

/// Collects digits most significant first, dropping leading zero groups.
struct Digits {
    store: DigitStore,
    significant: bool,
}

impl Digits {
    fn new() -> Self {
        Self {
            store: DigitStore::new(),
            significant: false,
        }
    }

    /// Push a group of digit characters. Zero groups are skipped until the
    /// first non-zero group, but the `last` group is always kept.
    fn push(&mut self, chars: &[u8], zero: bool, last: bool) {
        self.significant |= !zero;
        if self.significant || last {
            for &c in chars {
                self.store.push(c);
            }
        }
    }
}

fn boolean_digits(magnitude: u32) -> Result<Digits, Error> {
    let mut digits = Digits::new();
    for bit in (0..Format::Boolean.max_digits()).rev() {
        let value = (magnitude >> bit) as u8 & 1;
        digits.push(&[boolean_to_char(value)?], value == 0, bit == 0);
    }
    Ok(digits)
}

fn decimal_digits(mut remainder: u32) -> Result<Digits, Error> {
    let mut digits = Digits::new();
    for (i, weight) in DECIMAL_WEIGHTS.iter().enumerate() {
        let mut value = 0;
        while remainder >= *weight {
            remainder -= weight;
            value += 1;
        }
        let last = i == DECIMAL_WEIGHTS.len() - 1;
        digits.push(&[decimal_to_char(value)?], value == 0, last);
    }
    Ok(digits)
}

fn hexadecimal_digits(magnitude: u32) -> Result<Digits, Error> {
    let mut digits = Digits::new();
    for (i, byte) in magnitude.to_be_bytes().iter().enumerate() {
        let pair = [hexadecimal_to_char(byte >> 4)?, hexadecimal_to_char(byte & 0xF)?];
        digits.push(&pair, *byte == 0, i == 3);
    }
    Ok(digits)
}

/// Format `value` in the given format, optionally with a base prefix after the
/// sign.
///
/// ```
/// use node_codec::{value_to_string, Format};
/// assert_eq!(value_to_string(255, Format::Hexadecimal, true).unwrap(), "0xFF");
/// assert_eq!(value_to_string(-5, Format::Decimal, false).unwrap(), "-5");
/// assert_eq!(value_to_string(5, Format::Boolean, true).unwrap(), "0b101");
/// ```
/// # Errors
/// Propagates digit codec errors, which the digit loops never trigger for
/// in-range values.
pub fn value_to_string(value: i32, format: Format, print_prefix: bool) -> Result<ValueString, Error> {
    let magnitude = value.unsigned_abs();
    let digits = match format {
        Format::Boolean => boolean_digits(magnitude)?,
        Format::Decimal => decimal_digits(magnitude)?,
        Format::Hexadecimal => hexadecimal_digits(magnitude)?,
    };

    let mut text = ValueString::new();
    if value < 0 {
        text.append(b"-")?;
    }
    if print_prefix {
        text.append(format.prefix())?;
    }
    text.append(&digits.store)?;
    trace!("{} as {:?}: {:?}", value, format, text.as_str());
    Ok(text)
}

/// Number of digits [`value_to_string()`] writes for `value`, excluding any
/// sign and prefix.
pub fn digit_count_of(value: i32, format: Format) -> usize {
    let magnitude = value.unsigned_abs();
    let bits = (32 - magnitude.leading_zeros()) as usize;
    match format {
        Format::Boolean => bits.max(1),
        Format::Hexadecimal => ((bits + 7) / 8).max(1) * 2,
        Format::Decimal => DECIMAL_WEIGHTS
            .iter()
            .position(|weight| magnitude >= *weight)
            .map_or(1, |i| DECIMAL_WEIGHTS.len() - i),
    }
}

/// Parse an optional `-` followed by exactly `digit_count` digits.
///
/// ```
/// use node_codec::{string_to_value, Format};
/// assert_eq!(string_to_value(b"-1F", Format::Hexadecimal, 2), Ok(-31));
/// assert_eq!(string_to_value(b"0042abc", Format::Decimal, 4), Ok(42));
/// ```
/// # Errors
/// * [`Error::NullParameter`] if `text` is empty.
/// * [`Error::BooleanSize`] unless `digit_count` is 1 for [`Format::Boolean`].
/// * [`Error::HexadecimalOddSize`] or [`Error::HexadecimalOverflow`] if
///   `digit_count` is odd or above 8 for [`Format::Hexadecimal`].
/// * [`Error::DecimalOverflow`] if `digit_count` is above 10, or the result
///   doesn't fit an `i32`.
/// * The format's `Invalid` error if a character isn't a digit, or the text
///   ends early.
pub fn string_to_value(text: &[u8], format: Format, digit_count: usize) -> Result<i32, Error> {
    ensure!(!text.is_empty(), NullParameterSnafu);
    match format {
        Format::Boolean => ensure!(digit_count == 1, BooleanSizeSnafu),
        Format::Hexadecimal => {
            ensure!(digit_count % 2 == 0, HexadecimalOddSizeSnafu);
            ensure!(
                digit_count <= Format::Hexadecimal.max_digits(),
                HexadecimalOverflowSnafu
            );
        }
        Format::Decimal => ensure!(
            digit_count <= Format::Decimal.max_digits(),
            DecimalOverflowSnafu
        ),
    }

    let (negative, digits) = match signed_digits(text, digit_count) {
        Some(parsed) => parsed,
        None => {
            debug!("Text ends before {} digits", digit_count);
            return Err(invalid(format));
        }
    };

    let magnitude: i64 = match format {
        Format::Boolean => char_to_boolean(digits[0])?.into(),
        Format::Hexadecimal => digits.iter().try_fold(0, |acc, &c| {
            Ok::<_, Error>(acc << 4 | i64::from(char_to_hexadecimal(c)?))
        })?,
        Format::Decimal => digits
            .iter()
            .zip(DECIMAL_WEIGHTS[DECIMAL_WEIGHTS.len() - digit_count..].iter())
            .try_fold(0, |acc, (&c, &weight)| {
                Ok::<_, Error>(acc + i64::from(char_to_decimal(c)?) * i64::from(weight))
            })?,
    };

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| overflow(format))
}

const fn invalid(format: Format) -> Error {
    match format {
        Format::Boolean => Error::BooleanInvalid,
        Format::Decimal => Error::DecimalInvalid,
        Format::Hexadecimal => Error::HexadecimalInvalid,
    }
}

const fn overflow(format: Format) -> Error {
    match format {
        Format::Boolean => Error::BooleanOverflow,
        Format::Decimal => Error::DecimalOverflow,
        Format::Hexadecimal => Error::HexadecimalOverflow,
    }
}
