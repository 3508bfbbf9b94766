//! The binding trait: one function contract, two implementations.

use crate::endian::Endian;
use crate::error::{BufferError, HexError};
use crate::text::Base64Error;
use crate::{cmp, concat, portable, standard, text};

/// The byte-buffer toolkit exported by every environment binding.
///
/// [`Standard`] and [`Portable`] implement the identical contract; the
/// conformance suite runs each behavior against both through
/// `&dyn OctetTools`. The text, base64, comparison and concatenation
/// operations are pass-throughs to codecs shared by both bindings, so they
/// come as default methods; hex and the integer accessors are where the
/// bindings genuinely differ.
pub trait OctetTools {
    /// Binding name for test diagnostics.
    fn name(&self) -> &'static str;

    fn to_hex(&self, bytes: &[u8]) -> String;
    fn from_hex(&self, hex: &str) -> Vec<u8>;
    fn from_hex_strict(&self, hex: &str) -> Result<Vec<u8>, HexError>;

    fn to_utf8(&self, bytes: &[u8]) -> String {
        text::to_utf8(bytes)
    }
    fn from_utf8(&self, text: &str) -> Vec<u8> {
        text::from_utf8(text)
    }
    fn to_base64(&self, bytes: &[u8]) -> String {
        text::to_base64(bytes)
    }
    fn from_base64(&self, text: &str) -> Result<Vec<u8>, Base64Error> {
        text::from_base64(text)
    }
    fn compare(&self, a: &[u8], b: &[u8]) -> i32 {
        cmp::compare(a, b)
    }
    fn concat(&self, chunks: &[&[u8]]) -> Vec<u8> {
        concat::concat(chunks)
    }

    fn write_uint8(&self, buffer: &mut [u8], offset: usize, value: u64)
        -> Result<usize, BufferError>;
    fn write_uint16(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
        endian: Endian,
    ) -> Result<usize, BufferError>;
    fn write_uint32(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
        endian: Endian,
    ) -> Result<usize, BufferError>;
    fn write_uint64(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
        endian: Endian,
    ) -> Result<usize, BufferError>;
    fn write_int8(&self, buffer: &mut [u8], offset: usize, value: i64)
        -> Result<usize, BufferError>;
    fn write_int16(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
        endian: Endian,
    ) -> Result<usize, BufferError>;
    fn write_int32(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
        endian: Endian,
    ) -> Result<usize, BufferError>;
    fn write_int64(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
        endian: Endian,
    ) -> Result<usize, BufferError>;

    fn read_uint8(&self, buffer: &[u8], offset: usize) -> Result<u64, BufferError>;
    fn read_uint16(&self, buffer: &[u8], offset: usize, endian: Endian)
        -> Result<u64, BufferError>;
    fn read_uint32(&self, buffer: &[u8], offset: usize, endian: Endian)
        -> Result<u64, BufferError>;
    fn read_uint64(&self, buffer: &[u8], offset: usize, endian: Endian)
        -> Result<u64, BufferError>;
    fn read_int8(&self, buffer: &[u8], offset: usize) -> Result<i64, BufferError>;
    fn read_int16(&self, buffer: &[u8], offset: usize, endian: Endian)
        -> Result<i64, BufferError>;
    fn read_int32(&self, buffer: &[u8], offset: usize, endian: Endian)
        -> Result<i64, BufferError>;
    fn read_int64(&self, buffer: &[u8], offset: usize, endian: Endian)
        -> Result<i64, BufferError>;
}

/// The [`crate::standard`] binding behind the trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct Standard;

/// The [`crate::portable`] binding behind the trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct Portable;

impl OctetTools for Standard {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn to_hex(&self, bytes: &[u8]) -> String {
        standard::to_hex(bytes)
    }
    fn from_hex(&self, hex: &str) -> Vec<u8> {
        standard::from_hex(hex)
    }
    fn from_hex_strict(&self, hex: &str) -> Result<Vec<u8>, HexError> {
        standard::from_hex_strict(hex)
    }

    fn write_uint8(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
    ) -> Result<usize, BufferError> {
        standard::write_uint8(buffer, offset, value)
    }
    fn write_uint16(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        standard::write_uint16(buffer, offset, value, endian)
    }
    fn write_uint32(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        standard::write_uint32(buffer, offset, value, endian)
    }
    fn write_uint64(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        standard::write_uint64(buffer, offset, value, endian)
    }
    fn write_int8(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
    ) -> Result<usize, BufferError> {
        standard::write_int8(buffer, offset, value)
    }
    fn write_int16(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        standard::write_int16(buffer, offset, value, endian)
    }
    fn write_int32(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        standard::write_int32(buffer, offset, value, endian)
    }
    fn write_int64(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        standard::write_int64(buffer, offset, value, endian)
    }

    fn read_uint8(&self, buffer: &[u8], offset: usize) -> Result<u64, BufferError> {
        standard::read_uint8(buffer, offset)
    }
    fn read_uint16(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<u64, BufferError> {
        standard::read_uint16(buffer, offset, endian)
    }
    fn read_uint32(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<u64, BufferError> {
        standard::read_uint32(buffer, offset, endian)
    }
    fn read_uint64(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<u64, BufferError> {
        standard::read_uint64(buffer, offset, endian)
    }
    fn read_int8(&self, buffer: &[u8], offset: usize) -> Result<i64, BufferError> {
        standard::read_int8(buffer, offset)
    }
    fn read_int16(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<i64, BufferError> {
        standard::read_int16(buffer, offset, endian)
    }
    fn read_int32(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<i64, BufferError> {
        standard::read_int32(buffer, offset, endian)
    }
    fn read_int64(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<i64, BufferError> {
        standard::read_int64(buffer, offset, endian)
    }
}

impl OctetTools for Portable {
    fn name(&self) -> &'static str {
        "portable"
    }

    fn to_hex(&self, bytes: &[u8]) -> String {
        portable::to_hex(bytes)
    }
    fn from_hex(&self, hex: &str) -> Vec<u8> {
        portable::from_hex(hex)
    }
    fn from_hex_strict(&self, hex: &str) -> Result<Vec<u8>, HexError> {
        portable::from_hex_strict(hex)
    }

    fn write_uint8(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
    ) -> Result<usize, BufferError> {
        portable::write_uint8(buffer, offset, value)
    }
    fn write_uint16(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        portable::write_uint16(buffer, offset, value, endian)
    }
    fn write_uint32(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        portable::write_uint32(buffer, offset, value, endian)
    }
    fn write_uint64(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: u64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        portable::write_uint64(buffer, offset, value, endian)
    }
    fn write_int8(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
    ) -> Result<usize, BufferError> {
        portable::write_int8(buffer, offset, value)
    }
    fn write_int16(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        portable::write_int16(buffer, offset, value, endian)
    }
    fn write_int32(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        portable::write_int32(buffer, offset, value, endian)
    }
    fn write_int64(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: i64,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        portable::write_int64(buffer, offset, value, endian)
    }

    fn read_uint8(&self, buffer: &[u8], offset: usize) -> Result<u64, BufferError> {
        portable::read_uint8(buffer, offset)
    }
    fn read_uint16(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<u64, BufferError> {
        portable::read_uint16(buffer, offset, endian)
    }
    fn read_uint32(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<u64, BufferError> {
        portable::read_uint32(buffer, offset, endian)
    }
    fn read_uint64(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<u64, BufferError> {
        portable::read_uint64(buffer, offset, endian)
    }
    fn read_int8(&self, buffer: &[u8], offset: usize) -> Result<i64, BufferError> {
        portable::read_int8(buffer, offset)
    }
    fn read_int16(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<i64, BufferError> {
        portable::read_int16(buffer, offset, endian)
    }
    fn read_int32(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<i64, BufferError> {
        portable::read_int32(buffer, offset, endian)
    }
    fn read_int64(
        &self,
        buffer: &[u8],
        offset: usize,
        endian: Endian,
    ) -> Result<i64, BufferError> {
        portable::read_int64(buffer, offset, endian)
    }
}
