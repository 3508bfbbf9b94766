//! Shift-and-mask integer accessors for the portable binding.
//!
//! One width-parameterized store/load core serves every accessor: byte `i`
//! of the value goes to `offset + i` for little-endian and to the mirrored
//! `offset + width - 1 - i` for big-endian. Bounds are checked before any
//! byte is touched, so a failed write leaves the buffer unchanged. All
//! arithmetic is 64-bit integer arithmetic; no float intermediates.

use crate::endian::Endian;
use crate::error::{check_int_range, check_offset, check_uint_range, BufferError};

// ---------------------------------------------------------------- core

/// Stores the low `width` bytes of `value` starting at `offset`.
///
/// Caller has already bounds-checked `[offset, offset + width)`.
fn store_uint(buffer: &mut [u8], offset: usize, width: usize, value: u64, endian: Endian) {
    for i in 0..width {
        let byte = ((value >> (8 * i)) & 0xff) as u8;
        match endian {
            Endian::Little => buffer[offset + i] = byte,
            Endian::Big => buffer[offset + width - 1 - i] = byte,
        }
    }
}

/// Loads `width` bytes starting at `offset` as an unsigned value.
fn load_uint(buffer: &[u8], offset: usize, width: usize, endian: Endian) -> u64 {
    let mut value = 0u64;
    for i in 0..width {
        let byte = match endian {
            Endian::Little => buffer[offset + i],
            Endian::Big => buffer[offset + width - 1 - i],
        };
        value |= (byte as u64) << (8 * i);
    }
    value
}

/// Reinterprets the top bit of a `width`-byte unsigned load as the sign:
/// magnitudes of at least `2^(8*width - 1)` drop by `2^(8*width)`.
fn sign_extend(raw: u64, width: usize) -> i64 {
    if width == 8 {
        return raw as i64;
    }
    let half = 1u64 << (8 * width - 1);
    if raw >= half {
        raw as i64 - (1i64 << (8 * width))
    } else {
        raw as i64
    }
}

/// Truncates a signed value to its `width`-byte two's-complement bit pattern.
fn truncate_int(value: i64, width: usize) -> u64 {
    if width == 8 {
        value as u64
    } else {
        (value as u64) & ((1u64 << (8 * width)) - 1)
    }
}

fn write_uint(
    buffer: &mut [u8],
    offset: usize,
    width: usize,
    value: u64,
    endian: Endian,
) -> Result<usize, BufferError> {
    check_offset(buffer.len(), offset, width)?;
    check_uint_range(value, width)?;
    store_uint(buffer, offset, width, value, endian);
    Ok(offset + width)
}

fn read_uint(
    buffer: &[u8],
    offset: usize,
    width: usize,
    endian: Endian,
) -> Result<u64, BufferError> {
    check_offset(buffer.len(), offset, width)?;
    Ok(load_uint(buffer, offset, width, endian))
}

fn write_int(
    buffer: &mut [u8],
    offset: usize,
    width: usize,
    value: i64,
    endian: Endian,
) -> Result<usize, BufferError> {
    check_offset(buffer.len(), offset, width)?;
    check_int_range(value, width)?;
    store_uint(buffer, offset, width, truncate_int(value, width), endian);
    Ok(offset + width)
}

fn read_int(
    buffer: &[u8],
    offset: usize,
    width: usize,
    endian: Endian,
) -> Result<i64, BufferError> {
    check_offset(buffer.len(), offset, width)?;
    Ok(sign_extend(load_uint(buffer, offset, width, endian), width))
}

// ---------------------------------------------------------------- unsigned

/// Writes an unsigned 8-bit integer, returning the offset after the field.
#[inline]
pub fn write_uint8(buffer: &mut [u8], offset: usize, value: u64) -> Result<usize, BufferError> {
    check_offset(buffer.len(), offset, 1)?;
    check_uint_range(value, 1)?;
    buffer[offset] = value as u8;
    Ok(offset + 1)
}

/// Writes an unsigned 16-bit integer, returning the offset after the field.
#[inline]
pub fn write_uint16(
    buffer: &mut [u8],
    offset: usize,
    value: u64,
    endian: Endian,
) -> Result<usize, BufferError> {
    write_uint(buffer, offset, 2, value, endian)
}

/// Writes an unsigned 32-bit integer, returning the offset after the field.
#[inline]
pub fn write_uint32(
    buffer: &mut [u8],
    offset: usize,
    value: u64,
    endian: Endian,
) -> Result<usize, BufferError> {
    write_uint(buffer, offset, 4, value, endian)
}

/// Writes an unsigned 64-bit integer, returning the offset after the field.
#[inline]
pub fn write_uint64(
    buffer: &mut [u8],
    offset: usize,
    value: u64,
    endian: Endian,
) -> Result<usize, BufferError> {
    write_uint(buffer, offset, 8, value, endian)
}

/// Reads an unsigned 8-bit integer.
#[inline]
pub fn read_uint8(buffer: &[u8], offset: usize) -> Result<u64, BufferError> {
    check_offset(buffer.len(), offset, 1)?;
    Ok(buffer[offset] as u64)
}

/// Reads an unsigned 16-bit integer.
#[inline]
pub fn read_uint16(buffer: &[u8], offset: usize, endian: Endian) -> Result<u64, BufferError> {
    read_uint(buffer, offset, 2, endian)
}

/// Reads an unsigned 32-bit integer.
#[inline]
pub fn read_uint32(buffer: &[u8], offset: usize, endian: Endian) -> Result<u64, BufferError> {
    read_uint(buffer, offset, 4, endian)
}

/// Reads an unsigned 64-bit integer.
#[inline]
pub fn read_uint64(buffer: &[u8], offset: usize, endian: Endian) -> Result<u64, BufferError> {
    read_uint(buffer, offset, 8, endian)
}

// ---------------------------------------------------------------- signed

/// Writes a signed 8-bit integer, returning the offset after the field.
#[inline]
pub fn write_int8(buffer: &mut [u8], offset: usize, value: i64) -> Result<usize, BufferError> {
    check_offset(buffer.len(), offset, 1)?;
    check_int_range(value, 1)?;
    buffer[offset] = value as u8;
    Ok(offset + 1)
}

/// Writes a signed 16-bit integer, returning the offset after the field.
#[inline]
pub fn write_int16(
    buffer: &mut [u8],
    offset: usize,
    value: i64,
    endian: Endian,
) -> Result<usize, BufferError> {
    write_int(buffer, offset, 2, value, endian)
}

/// Writes a signed 32-bit integer, returning the offset after the field.
#[inline]
pub fn write_int32(
    buffer: &mut [u8],
    offset: usize,
    value: i64,
    endian: Endian,
) -> Result<usize, BufferError> {
    write_int(buffer, offset, 4, value, endian)
}

/// Writes a signed 64-bit integer, returning the offset after the field.
#[inline]
pub fn write_int64(
    buffer: &mut [u8],
    offset: usize,
    value: i64,
    endian: Endian,
) -> Result<usize, BufferError> {
    write_int(buffer, offset, 8, value, endian)
}

/// Reads a signed 8-bit integer.
#[inline]
pub fn read_int8(buffer: &[u8], offset: usize) -> Result<i64, BufferError> {
    check_offset(buffer.len(), offset, 1)?;
    Ok(buffer[offset] as i8 as i64)
}

/// Reads a signed 16-bit integer.
#[inline]
pub fn read_int16(buffer: &[u8], offset: usize, endian: Endian) -> Result<i64, BufferError> {
    read_int(buffer, offset, 2, endian)
}

/// Reads a signed 32-bit integer.
#[inline]
pub fn read_int32(buffer: &[u8], offset: usize, endian: Endian) -> Result<i64, BufferError> {
    read_int(buffer, offset, 4, endian)
}

/// Reads a signed 64-bit integer.
#[inline]
pub fn read_int64(buffer: &[u8], offset: usize, endian: Endian) -> Result<i64, BufferError> {
    read_int(buffer, offset, 8, endian)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_uint_byte_layout() {
        let mut buf = [0u8; 4];
        store_uint(&mut buf, 0, 4, 0x0102_0304, Endian::Little);
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
        store_uint(&mut buf, 0, 4, 0x0102_0304, Endian::Big);
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_load_uint_is_the_inverse_of_store_uint() {
        let mut buf = [0u8; 8];
        for endian in [Endian::Little, Endian::Big] {
            for width in [1, 2, 4, 8] {
                let value = 0x8877_6655_4433_2211u64 & truncate_int(-1, width);
                store_uint(&mut buf, 0, width, value, endian);
                assert_eq!(load_uint(&buf, 0, width, endian), value);
            }
        }
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0x7f, 1), 127);
        assert_eq!(sign_extend(0x80, 1), -128);
        assert_eq!(sign_extend(0xff, 1), -1);
        assert_eq!(sign_extend(0x8000, 2), -32768);
        assert_eq!(sign_extend(0xffff_ffff, 4), -1);
        assert_eq!(sign_extend(u64::MAX, 8), -1);
    }

    #[test]
    fn test_truncate_int_two_complement_patterns() {
        assert_eq!(truncate_int(-1, 1), 0xff);
        assert_eq!(truncate_int(-1, 2), 0xffff);
        assert_eq!(truncate_int(-32768, 2), 0x8000);
        assert_eq!(truncate_int(-1, 8), u64::MAX);
    }

    #[test]
    fn test_write_uint16_byte_order() {
        let mut buf = [0u8; 2];
        assert_eq!(write_uint16(&mut buf, 0, 0x0102, Endian::Little), Ok(2));
        assert_eq!(buf, [0x02, 0x01]);
        assert_eq!(write_uint16(&mut buf, 0, 0x0102, Endian::Big), Ok(2));
        assert_eq!(buf, [0x01, 0x02]);
    }

    #[test]
    fn test_write_returns_offset_after_the_field() {
        let mut buf = [0u8; 16];
        assert_eq!(write_uint32(&mut buf, 10, 7, Endian::Little), Ok(14));
        assert_eq!(write_uint8(&mut buf, 3, 7), Ok(4));
        assert_eq!(write_int64(&mut buf, 0, -7, Endian::Big), Ok(8));
    }

    #[test]
    fn test_uint64_full_range_roundtrip() {
        let mut buf = [0u8; 8];
        for endian in [Endian::Little, Endian::Big] {
            write_uint64(&mut buf, 0, u64::MAX, endian).unwrap();
            assert_eq!(read_uint64(&buf, 0, endian), Ok(u64::MAX));
            write_uint64(&mut buf, 0, 1u64 << 53, endian).unwrap();
            assert_eq!(read_uint64(&buf, 0, endian), Ok(1u64 << 53));
        }
    }

    #[test]
    fn test_int64_extremes_roundtrip() {
        let mut buf = [0u8; 8];
        for endian in [Endian::Little, Endian::Big] {
            for value in [i64::MIN, -1, 0, i64::MAX] {
                write_int64(&mut buf, 0, value, endian).unwrap();
                assert_eq!(read_int64(&buf, 0, endian), Ok(value));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_leaves_the_buffer_unchanged() {
        let mut buf = [0xaa; 4];
        assert_eq!(
            write_uint32(&mut buf, 1, 7, Endian::Little),
            Err(BufferError::OutOfBounds)
        );
        assert_eq!(buf, [0xaa; 4]);
        assert_eq!(
            read_uint64(&buf, 0, Endian::Little),
            Err(BufferError::OutOfBounds)
        );
    }

    #[test]
    fn test_out_of_range_reporting() {
        let mut buf = [0u8; 8];
        assert_eq!(
            write_uint8(&mut buf, 0, 256),
            Err(BufferError::OutOfRange {
                value: 256,
                low: 0,
                high: 255,
            })
        );
        assert_eq!(
            write_int16(&mut buf, 0, 32768, Endian::Little),
            Err(BufferError::OutOfRange {
                value: 32768,
                low: -32768,
                high: 32767,
            })
        );
        assert_eq!(
            write_int8(&mut buf, 0, -129),
            Err(BufferError::OutOfRange {
                value: -129,
                low: -128,
                high: 127,
            })
        );
    }

    #[test]
    fn test_bounds_are_checked_before_range() {
        let mut buf = [0u8; 1];
        assert_eq!(
            write_uint16(&mut buf, 0, 0x1_0000, Endian::Little),
            Err(BufferError::OutOfBounds)
        );
    }

    #[test]
    fn test_signed_write_reads_back_as_unsigned_pattern() {
        let mut buf = [0u8; 2];
        write_int16(&mut buf, 0, -2, Endian::Little).unwrap();
        assert_eq!(read_uint16(&buf, 0, Endian::Little), Ok(0xfffe));
    }
}
