//! Bounded character buffers.
//!
//! The free functions work on caller-owned byte slices, where the slice length
//! is the capacity. Text ends at the first NUL byte or at the end of the slice,
//! whichever comes first. [`Buffer`] wraps an owned array and its cursor.

use core::fmt;
use core::str::Utf8Error;

use log::trace;
use snafu::ensure;

use crate::convert::value_to_string;
use crate::types::{
    AppendOverflowSnafu, CopyOverflowSnafu, Error, Format, Justification, NullParameterSnafu,
    SizeOverflowSnafu,
};

/// Longest text accepted by [`get_size()`].
pub const MAX_STRING_SIZE: usize = 100;

/// Count the characters before the terminator.
/// # Errors
/// Returns [`Error::SizeOverflow`] if `text` runs longer than [`MAX_STRING_SIZE`]
/// without a terminator.
pub fn get_size(text: &[u8]) -> Result<usize, Error> {
    let size = text
        .iter()
        .take(MAX_STRING_SIZE + 1)
        .take_while(|&&c| c != 0)
        .count();
    ensure!(size <= MAX_STRING_SIZE, SizeOverflowSnafu);
    Ok(size)
}

/// Describes a single justified copy of `source` into a `capacity` wide field
/// at the start of `destination`.
///
/// The byte at `destination[capacity]` is the reserved terminator slot, so
/// `destination` has to be at least `capacity + 1` bytes long.
#[derive(Debug)]
pub struct CopyRequest<'a> {
    pub source: &'a [u8],
    pub destination: &'a mut [u8],
    pub capacity: usize,
    /// Fill the whole field with this character before copying.
    pub flush: Option<u8>,
    pub justification: Justification,
}

impl<'a> CopyRequest<'a> {
    /// A left justified copy without flush, using all of `destination` except
    /// the terminator slot.
    pub fn new(source: &'a [u8], destination: &'a mut [u8]) -> Self {
        let capacity = destination.len().saturating_sub(1);
        Self {
            source,
            destination,
            capacity,
            flush: None,
            justification: Justification::Left,
        }
    }

    pub fn flush(mut self, fill: u8) -> Self {
        self.flush = Some(fill);
        self
    }

    pub fn justify(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Copy a string into a fixed-width field.
///
/// ```
/// use node_codec::{copy, CopyRequest, Justification};
/// let mut field = [0; 6];
/// copy(CopyRequest::new(b"AB", &mut field).flush(b'-').justify(Justification::Right)).unwrap();
/// assert_eq!(&field, b"---AB\0");
/// ```
/// # Errors
/// Returns [`Error::CopyOverflow`] if the source is wider than the field, or
/// if the field would reach the terminator slot, and [`Error::SizeOverflow`]
/// if the source is unterminated.
pub fn copy(request: CopyRequest<'_>) -> Result<(), Error> {
    let CopyRequest {
        source,
        destination,
        capacity,
        flush,
        justification,
    } = request;

    ensure!(capacity < destination.len(), CopyOverflowSnafu);
    if let Some(fill) = flush {
        destination[..capacity].fill(fill);
    }

    let size = get_size(source)?;
    let offset = justification.offset(capacity, size)?;
    destination[offset..offset + size].copy_from_slice(&source[..size]);
    destination[capacity] = 0;
    Ok(())
}

/// Append `text` to `buffer` at `cursor`, advancing the cursor.
///
/// The last byte of `buffer` is reserved for the terminator, so at most
/// `buffer.len() - 1` characters fit. On overflow the characters that did fit
/// are kept, terminated, and counted by `cursor`.
/// # Errors
/// Returns [`Error::AppendOverflow`] if the buffer is full, and
/// [`Error::NullParameter`] if `buffer` is empty.
pub fn append_string(buffer: &mut [u8], text: &[u8], cursor: &mut usize) -> Result<(), Error> {
    ensure!(!buffer.is_empty(), NullParameterSnafu);

    let result = text.iter().take_while(|&&c| c != 0).try_for_each(|&c| -> Result<(), Error> {
        ensure!(*cursor + 1 < buffer.len(), AppendOverflowSnafu);
        buffer[*cursor] = c;
        *cursor += 1;
        Ok(())
    });

    if let Some(end) = buffer.get_mut(*cursor) {
        *end = 0;
    }
    if result.is_err() {
        trace!("Append overflow at {} of {}", *cursor, buffer.len());
    }
    result
}

/// Format `value` and append it to `buffer`, see [`append_string()`] and
/// [`value_to_string()`](crate::value_to_string).
pub fn append_value(
    buffer: &mut [u8],
    value: i32,
    format: Format,
    print_prefix: bool,
    cursor: &mut usize,
) -> Result<(), Error> {
    let text = value_to_string(value, format, print_prefix)?;
    append_string(buffer, text.as_bytes(), cursor)
}

/// Owned, always terminated character buffer holding up to `N - 1` characters.
#[derive(Debug, Copy, Clone)]
pub struct Buffer<const N: usize> {
    data: [u8; N],
    cursor: usize,
}

impl<const N: usize> Buffer<N> {
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            cursor: 0,
        }
    }

    /// Create a buffer holding as much of `text` as fits.
    pub(crate) fn from_truncated(text: &[u8]) -> Self {
        let mut buf = Self::new();
        let len = text.len().min(N.saturating_sub(1));
        buf.data[..len].copy_from_slice(&text[..len]);
        buf.cursor = len;
        buf
    }

    /// Number of characters, excluding the terminator.
    pub const fn len(&self) -> usize {
        self.cursor
    }

    pub const fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Total size including the terminator slot.
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.cursor]
    }

    /// The characters followed by the terminating NUL.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..(self.cursor + 1).min(N)]
    }

    /// # Errors
    /// Returns an error if non-UTF-8 bytes were appended.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    pub fn clear(&mut self) {
        self.cursor = 0;
        if let Some(first) = self.data.first_mut() {
            *first = 0;
        }
    }

    /// Fill every character slot with `fill`.
    pub fn flush(&mut self, fill: u8) {
        let capacity = N.saturating_sub(1);
        self.data[..capacity].fill(fill);
        self.cursor = capacity;
        if let Some(last) = self.data.last_mut() {
            *last = 0;
        }
    }

    /// See [`append_string()`].
    pub fn append(&mut self, text: &[u8]) -> Result<(), Error> {
        append_string(&mut self.data, text, &mut self.cursor)
    }

    pub fn append_str(&mut self, text: &str) -> Result<(), Error> {
        self.append(text.as_bytes())
    }

    /// See [`append_value()`].
    pub fn append_value(
        &mut self,
        value: i32,
        format: Format,
        print_prefix: bool,
    ) -> Result<(), Error> {
        append_value(&mut self.data, value, format, print_prefix, &mut self.cursor)
    }

    /// Replace the contents with `source`, justified in a field spanning the
    /// whole buffer and padded with `fill`.
    pub fn copy_justified(
        &mut self,
        source: &[u8],
        justification: Justification,
        fill: u8,
    ) -> Result<(), Error> {
        copy(
            CopyRequest::new(source, &mut self.data)
                .flush(fill)
                .justify(justification),
        )?;
        self.cursor = N.saturating_sub(1);
        Ok(())
    }
}

impl<const N: usize> Default for Buffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AsRef<[u8]> for Buffer<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for Buffer<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<[u8]> for Buffer<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> fmt::Write for Buffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s).map_err(|_| fmt::Error)
    }
}
