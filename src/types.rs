//! This module defines the error type and the small enumerations that select
//! how a value is rendered: the numeric [`Format`] and the field
//! [`Justification`].

use snafu::{ensure, Snafu};

use core::convert::TryFrom;

/// Error type for the codec.
///
/// Every operation reports the first failure it hits and stops there. Only the
/// append operations leave a partial result behind (see [`crate::buffer`]).
#[derive(Debug, Snafu, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A required input or output slice was empty.
    #[snafu(display("Null parameter"))]
    NullParameter,
    /// The raw format code doesn't name a known format.
    #[snafu(display("Unknown format"))]
    UnknownFormat,
    /// The raw justification code doesn't name a known justification.
    #[snafu(display("Unknown justification"))]
    UnknownJustification,
    /// Boolean text must be exactly one digit long.
    #[snafu(display("Invalid boolean size"))]
    BooleanSize,
    /// The character isn't `0` or `1`.
    #[snafu(display("Invalid boolean character"))]
    BooleanInvalid,
    /// The value doesn't fit in a single bit.
    #[snafu(display("Boolean overflow"))]
    BooleanOverflow,
    /// The character isn't a decimal digit.
    #[snafu(display("Invalid decimal character"))]
    DecimalInvalid,
    /// The value doesn't fit in a decimal digit, or in 32 bits.
    #[snafu(display("Decimal overflow"))]
    DecimalOverflow,
    /// The character isn't a hexadecimal digit.
    #[snafu(display("Invalid hexadecimal character"))]
    HexadecimalInvalid,
    /// The value doesn't fit in a nibble, or in 32 bits.
    #[snafu(display("Hexadecimal overflow"))]
    HexadecimalOverflow,
    /// Hexadecimal text must have an even number of digits.
    #[snafu(display("Odd hexadecimal size"))]
    HexadecimalOddSize,
    /// No terminator was found within [`crate::MAX_STRING_SIZE`] characters.
    #[snafu(display("String size overflow"))]
    SizeOverflow,
    /// The source doesn't fit the destination field.
    #[snafu(display("Copy overflow"))]
    CopyOverflow,
    /// The buffer is full.
    #[snafu(display("Append overflow"))]
    AppendOverflow,
}

/// `Format` selects the digit alphabet and base of a conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    /// Base 2, digits `0` and `1`, prefix `0b`.
    Boolean,
    /// Base 10, prefix `0d`.
    Decimal,
    /// Base 16, upper-case digits, prefix `0x`.
    Hexadecimal,
}

impl Format {
    /// The maximum number of digits a 32-bit magnitude needs in this format.
    pub const fn max_digits(self) -> usize {
        match self {
            Self::Boolean => 32,
            Self::Decimal => 10,
            Self::Hexadecimal => 8,
        }
    }

    /// The two character base prefix.
    pub const fn prefix(self) -> &'static [u8; 2] {
        match self {
            Self::Boolean => b"0b",
            Self::Decimal => b"0d",
            Self::Hexadecimal => b"0x",
        }
    }
}

impl TryFrom<u8> for Format {
    type Error = Error;

    /// Decode the format codes used by the register tables, 0..=2.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Boolean),
            1 => Ok(Self::Decimal),
            2 => Ok(Self::Hexadecimal),
            _ => UnknownFormatSnafu.fail(),
        }
    }
}

/// `Justification` places a short string inside a wider field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Justification {
    Left,
    Center,
    Right,
}

impl Justification {
    /// Start offset of a `size` long string in a `capacity` wide field.
    /// # Errors
    /// Returns [`Error::CopyOverflow`] if `size` is larger than `capacity`.
    pub fn offset(self, capacity: usize, size: usize) -> Result<usize, Error> {
        ensure!(size <= capacity, CopyOverflowSnafu);
        let unused = capacity - size;
        Ok(match self {
            Self::Left => 0,
            Self::Center => unused / 2,
            Self::Right => unused,
        })
    }
}

impl TryFrom<u8> for Justification {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Left),
            1 => Ok(Self::Center),
            2 => Ok(Self::Right),
            _ => UnknownJustificationSnafu.fail(),
        }
    }
}
