//! Byte buffer utilities: hex and base64 codecs, bounded fixed-width integer
//! accessors, and lexicographic comparison.
//!
//! The same function contract ships in two bindings. [`standard`] uses native
//! conversions and ecosystem codecs, and is re-exported at the crate root as
//! the default surface; [`portable`] is a self-contained implementation built
//! from lookup tables and shift loops. Both expose identical observable
//! behavior, and both are reachable through the [`OctetTools`] trait for code
//! that selects a binding at run time.
//!
//! # Overview
//!
//! - Hex: [`to_hex`], [`from_hex`] (stops at the first invalid character and
//!   returns the decoded prefix), [`from_hex_strict`]
//! - Integer accessors: `write_uint8` through `write_uint64`, `write_int8`
//!   through `write_int64`, and the matching `read_*` forms; writes return
//!   the offset after the field and validate bounds before range
//! - Text: [`to_utf8`], [`from_utf8`], [`to_base64`], [`from_base64`]
//! - Ordering and assembly: [`compare`], [`concat`]
//!
//! # Example
//!
//! ```
//! use octet_tools::{from_hex, to_hex, write_uint16, write_uint32, Endian};
//!
//! let mut packet = [0u8; 6];
//! let offset = write_uint16(&mut packet, 0, 0xcafe, Endian::Big).unwrap();
//! write_uint32(&mut packet, offset, 0xdeadbeef, Endian::Big).unwrap();
//! assert_eq!(to_hex(&packet), "cafedeadbeef");
//! assert_eq!(from_hex("cafedeadbeef"), packet);
//! ```

mod cmp;
mod concat;
mod endian;
mod error;
mod text;
mod tools;

pub mod portable;
pub mod standard;

pub use cmp::compare;
pub use concat::concat;
pub use endian::{Endian, ParseEndianError};
pub use error::{BufferError, HexError};
pub use standard::{
    from_hex, from_hex_strict, read_int16, read_int32, read_int64, read_int8, read_uint16,
    read_uint32, read_uint64, read_uint8, to_hex, write_int16, write_int32, write_int64,
    write_int8, write_uint16, write_uint32, write_uint64, write_uint8,
};
pub use text::{from_base64, from_utf8, to_base64, to_utf8, Base64Error};
pub use tools::{OctetTools, Portable, Standard};
