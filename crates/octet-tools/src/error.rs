//! Error types and the bounds/range validation shared by both bindings.

use thiserror::Error;

/// Error returned by the fixed-width integer accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The field `[offset, offset + width)` does not fit inside the buffer.
    #[error("offset is outside the bounds of the byte array")]
    OutOfBounds,
    /// The supplied value does not fit the field's width and signedness.
    ///
    /// Carries the offending value and the admissible `[low, high]` domain;
    /// the display message reports all three.
    #[error("value {value} is out of range, it must be >= {low} and <= {high}")]
    OutOfRange { value: i128, low: i128, high: i128 },
}

/// Error returned by the strict hex decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Hex digits must pair up, two characters per byte.
    #[error("odd hex string length {length}, expected an even number of digits")]
    OddLength { length: usize },
    /// A byte of the input is not a hex digit. The position is the byte
    /// offset within the input string.
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Fails with [`BufferError::OutOfBounds`] unless `width` bytes starting at
/// `offset` lie inside a buffer of `len` bytes.
///
/// Checked addition, so a huge offset cannot wrap back into bounds. Callers
/// run this before touching the buffer; a failed write mutates nothing.
pub(crate) fn check_offset(len: usize, offset: usize, width: usize) -> Result<(), BufferError> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(()),
        _ => Err(BufferError::OutOfBounds),
    }
}

/// Admissible `[low, high]` domain of an unsigned field `width` bytes wide.
pub(crate) fn uint_bounds(width: usize) -> (i128, i128) {
    (0, (1i128 << (8 * width)) - 1)
}

/// Admissible `[low, high]` domain of a signed two's-complement field
/// `width` bytes wide.
pub(crate) fn int_bounds(width: usize) -> (i128, i128) {
    let half = 1i128 << (8 * width - 1);
    (-half, half - 1)
}

/// Fails with [`BufferError::OutOfRange`] unless `value` fits an unsigned
/// field `width` bytes wide.
pub(crate) fn check_uint_range(value: u64, width: usize) -> Result<(), BufferError> {
    let (low, high) = uint_bounds(width);
    let value = value as i128;
    if value > high {
        return Err(BufferError::OutOfRange { value, low, high });
    }
    Ok(())
}

/// Fails with [`BufferError::OutOfRange`] unless `value` fits a signed field
/// `width` bytes wide.
pub(crate) fn check_int_range(value: i64, width: usize) -> Result<(), BufferError> {
    let (low, high) = int_bounds(width);
    let value = value as i128;
    if value < low || value > high {
        return Err(BufferError::OutOfRange { value, low, high });
    }
    Ok(())
}
