//! Allocation-free ASCII codec for sensor node firmware.
//!
//! Converts signed 32-bit integers to and from text in boolean, decimal and
//! hexadecimal, byte arrays to and from hex strings, and fills fixed-capacity
//! character buffers. Everything works on caller-provided or fixed-size
//! storage, so the crate is `no_std`.
//!
//! ## Example
//! ```
//! use node_codec::{string_to_value, value_to_5_digits_string, Buffer, Format};
//!
//! let mut status = Buffer::<32>::new();
//! status.append_str("VBUS=")?;
//! status.append(value_to_5_digits_string(12_345).as_bytes())?;
//! status.append_str("V ID=")?;
//! status.append_value(0x2A, Format::Hexadecimal, true)?;
//! assert_eq!(status, "VBUS=12.34V ID=0x2A");
//!
//! assert_eq!(string_to_value(b"-0042", Format::Decimal, 4)?, -42);
//! # Ok::<(), node_codec::Error>(())
//! ```
//!
//! The [`telemetry`] module renders a node's registers with these primitives.

#![no_std]

pub mod buffer;
pub mod convert;
pub mod digit;
pub mod fractional;
pub mod hex;
mod nom_parser;
pub mod telemetry;
mod types;

pub use buffer::{
    append_string, append_value, copy, get_size, Buffer, CopyRequest, MAX_STRING_SIZE,
};
pub use convert::{digit_count_of, string_to_value, value_to_string, ValueString};
pub use fractional::{value_to_5_digits_string, FractionalString};
pub use hex::{byte_array_to_hex_string, hex_string_to_byte_array};
pub use types::{Error, Format, Justification};
