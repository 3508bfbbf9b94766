//! Portable binding: self-contained table- and shift-based primitives.
//!
//! Exports the same function set as [`crate::standard`] with identical
//! observable behavior. Only the implementation strategy differs, and the
//! conformance suite holds both bindings to the shared contract.

mod hex;
mod int;

pub use self::hex::{from_hex, from_hex_strict, to_hex};
pub use self::int::{
    read_int16, read_int32, read_int64, read_int8, read_uint16, read_uint32, read_uint64,
    read_uint8, write_int16, write_int32, write_int64, write_int8, write_uint16, write_uint32,
    write_uint64, write_uint8,
};
