//! Native-conversion integer accessors for the standard binding.
//!
//! Same contract as the portable accessors, with the std
//! `{from,to}_{le,be}_bytes` conversions as the store/load core. Bounds are
//! checked before any byte is touched, so a failed write leaves the buffer
//! unchanged.

use crate::endian::Endian;
use crate::error::{check_int_range, check_offset, check_uint_range, BufferError};

// ---------------------------------------------------------------- unsigned

/// Writes an unsigned 8-bit integer, returning the offset after the field.
///
/// # Example
///
/// ```
/// use octet_tools::write_uint8;
///
/// let mut buf = [0u8; 2];
/// assert_eq!(write_uint8(&mut buf, 0, 0xfe), Ok(1));
/// assert_eq!(buf, [0xfe, 0x00]);
/// assert!(write_uint8(&mut buf, 0, 256).is_err());
/// ```
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
    check_offset(buffer.len(), offset, 2)?;
    check_uint_range(value, 2)?;
    let bytes = match endian {
        Endian::Little => (value as u16).to_le_bytes(),
        Endian::Big => (value as u16).to_be_bytes(),
    };
    buffer[offset..offset + 2].copy_from_slice(&bytes);
    Ok(offset + 2)
}

/// Writes an unsigned 32-bit integer, returning the offset after the field.
///
/// The returned offset makes sequential field packing a chain of calls:
///
/// ```
/// use octet_tools::{write_uint16, write_uint32, Endian};
///
/// let mut packet = [0u8; 6];
/// let offset = write_uint16(&mut packet, 0, 0xcafe, Endian::Big).unwrap();
/// let offset = write_uint32(&mut packet, offset, 0xdeadbeef, Endian::Big).unwrap();
/// assert_eq!(offset, 6);
/// assert_eq!(packet, [0xca, 0xfe, 0xde, 0xad, 0xbe, 0xef]);
/// ```
#[inline]
pub fn write_uint32(
    buffer: &mut [u8],
    offset: usize,
    value: u64,
    endian: Endian,
) -> Result<usize, BufferError> {
    check_offset(buffer.len(), offset, 4)?;
    check_uint_range(value, 4)?;
    let bytes = match endian {
        Endian::Little => (value as u32).to_le_bytes(),
        Endian::Big => (value as u32).to_be_bytes(),
    };
    buffer[offset..offset + 4].copy_from_slice(&bytes);
    Ok(offset + 4)
}

/// Writes an unsigned 64-bit integer, returning the offset after the field.
#[inline]
pub fn write_uint64(
    buffer: &mut [u8],
    offset: usize,
    value: u64,
    endian: Endian,
) -> Result<usize, BufferError> {
    check_offset(buffer.len(), offset, 8)?;
    let bytes = match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    };
    buffer[offset..offset + 8].copy_from_slice(&bytes);
    Ok(offset + 8)
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
    check_offset(buffer.len(), offset, 2)?;
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(&buffer[offset..offset + 2]);
    let value = match endian {
        Endian::Little => u16::from_le_bytes(bytes),
        Endian::Big => u16::from_be_bytes(bytes),
    };
    Ok(value as u64)
}

/// Reads an unsigned 32-bit integer.
#[inline]
pub fn read_uint32(buffer: &[u8], offset: usize, endian: Endian) -> Result<u64, BufferError> {
    check_offset(buffer.len(), offset, 4)?;
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buffer[offset..offset + 4]);
    let value = match endian {
        Endian::Little => u32::from_le_bytes(bytes),
        Endian::Big => u32::from_be_bytes(bytes),
    };
    Ok(value as u64)
}

/// Reads an unsigned 64-bit integer.
#[inline]
pub fn read_uint64(buffer: &[u8], offset: usize, endian: Endian) -> Result<u64, BufferError> {
    check_offset(buffer.len(), offset, 8)?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buffer[offset..offset + 8]);
    let value = match endian {
        Endian::Little => u64::from_le_bytes(bytes),
        Endian::Big => u64::from_be_bytes(bytes),
    };
    Ok(value)
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
    check_offset(buffer.len(), offset, 2)?;
    check_int_range(value, 2)?;
    let bytes = match endian {
        Endian::Little => (value as i16).to_le_bytes(),
        Endian::Big => (value as i16).to_be_bytes(),
    };
    buffer[offset..offset + 2].copy_from_slice(&bytes);
    Ok(offset + 2)
}

/// Writes a signed 32-bit integer, returning the offset after the field.
#[inline]
pub fn write_int32(
    buffer: &mut [u8],
    offset: usize,
    value: i64,
    endian: Endian,
) -> Result<usize, BufferError> {
    check_offset(buffer.len(), offset, 4)?;
    check_int_range(value, 4)?;
    let bytes = match endian {
        Endian::Little => (value as i32).to_le_bytes(),
        Endian::Big => (value as i32).to_be_bytes(),
    };
    buffer[offset..offset + 4].copy_from_slice(&bytes);
    Ok(offset + 4)
}

/// Writes a signed 64-bit integer, returning the offset after the field.
#[inline]
pub fn write_int64(
    buffer: &mut [u8],
    offset: usize,
    value: i64,
    endian: Endian,
) -> Result<usize, BufferError> {
    check_offset(buffer.len(), offset, 8)?;
    let bytes = match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    };
    buffer[offset..offset + 8].copy_from_slice(&bytes);
    Ok(offset + 8)
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
    check_offset(buffer.len(), offset, 2)?;
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(&buffer[offset..offset + 2]);
    let value = match endian {
        Endian::Little => i16::from_le_bytes(bytes),
        Endian::Big => i16::from_be_bytes(bytes),
    };
    Ok(value as i64)
}

/// Reads a signed 32-bit integer.
#[inline]
pub fn read_int32(buffer: &[u8], offset: usize, endian: Endian) -> Result<i64, BufferError> {
    check_offset(buffer.len(), offset, 4)?;
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buffer[offset..offset + 4]);
    let value = match endian {
        Endian::Little => i32::from_le_bytes(bytes),
        Endian::Big => i32::from_be_bytes(bytes),
    };
    Ok(value as i64)
}

/// Reads a signed 64-bit integer.
#[inline]
pub fn read_int64(buffer: &[u8], offset: usize, endian: Endian) -> Result<i64, BufferError> {
    check_offset(buffer.len(), offset, 8)?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buffer[offset..offset + 8]);
    let value = match endian {
        Endian::Little => i64::from_le_bytes(bytes),
        Endian::Big => i64::from_be_bytes(bytes),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_uint16_byte_order() {
        let mut buf = [0u8; 2];
        assert_eq!(write_uint16(&mut buf, 0, 0x1234, Endian::Little), Ok(2));
        assert_eq!(buf, [0x34, 0x12]);
        assert_eq!(write_uint16(&mut buf, 0, 0x1234, Endian::Big), Ok(2));
        assert_eq!(buf, [0x12, 0x34]);
    }

    #[test]
    fn test_write_returns_offset_after_the_field() {
        let mut buf = [0u8; 16];
        assert_eq!(write_uint32(&mut buf, 10, 7, Endian::Little), Ok(14));
        assert_eq!(write_int16(&mut buf, 5, -7, Endian::Big), Ok(7));
    }

    #[test]
    fn test_uint64_full_range_roundtrip() {
        let mut buf = [0u8; 8];
        for endian in [Endian::Little, Endian::Big] {
            for value in [0, 1u64 << 53, u64::MAX] {
                write_uint64(&mut buf, 0, value, endian).unwrap();
                assert_eq!(read_uint64(&buf, 0, endian), Ok(value));
            }
        }
    }

    #[test]
    fn test_int_extremes_roundtrip() {
        let mut buf = [0u8; 8];
        for endian in [Endian::Little, Endian::Big] {
            write_int32(&mut buf, 0, i32::MIN as i64, endian).unwrap();
            assert_eq!(read_int32(&buf, 0, endian), Ok(i32::MIN as i64));
            write_int64(&mut buf, 0, i64::MIN, endian).unwrap();
            assert_eq!(read_int64(&buf, 0, endian), Ok(i64::MIN));
        }
    }

    #[test]
    fn test_read_int8_sign_extends() {
        let buf = [0xff, 0x80, 0x7f];
        assert_eq!(read_int8(&buf, 0), Ok(-1));
        assert_eq!(read_int8(&buf, 1), Ok(-128));
        assert_eq!(read_int8(&buf, 2), Ok(127));
    }

    #[test]
    fn test_out_of_bounds_leaves_the_buffer_unchanged() {
        let mut buf = [0xaa; 4];
        assert_eq!(
            write_uint32(&mut buf, 1, 7, Endian::Big),
            Err(BufferError::OutOfBounds)
        );
        assert_eq!(buf, [0xaa; 4]);
        assert_eq!(read_uint16(&buf, 3, Endian::Big), Err(BufferError::OutOfBounds));
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
    }
}
