//! Self-contained hex codec for the portable binding.
//!
//! Everything here is table-driven over plain byte loops, with no ecosystem
//! dependencies. The standard binding produces identical output through
//! native codecs.

use crate::error::HexError;

/// Lower-case hex digits, indexed by nibble value.
const HEX_CHARS: [u8; 16] = *b"0123456789abcdef";

/// Marker for bytes that are not hex digits.
const INVALID: u8 = 0xff;

/// Maps an input byte to its nibble value; upper- and lower-case digits map
/// to the same nibbles, everything else to [`INVALID`].
const HEX_NIBBLES: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0u8;
    while i < 10 {
        table[(b'0' + i) as usize] = i;
        i += 1;
    }
    let mut i = 0u8;
    while i < 6 {
        table[(b'a' + i) as usize] = 10 + i;
        table[(b'A' + i) as usize] = 10 + i;
        i += 1;
    }
    table
};

/// Input length above which [`to_hex`] switches to the bulk strategy.
const BULK_THRESHOLD: usize = 512;

/// Encodes bytes as a lower-case hex string, two digits per byte.
///
/// # Example
///
/// ```
/// use octet_tools::portable::to_hex;
///
/// assert_eq!(to_hex(&[0xff, 0x00]), "ff00");
/// assert_eq!(to_hex(&[]), "");
/// ```
pub fn to_hex(bytes: &[u8]) -> String {
    // Two strategies with byte-identical output: a preallocated table pass
    // for large inputs, per-byte pushes otherwise.
    if bytes.len() > BULK_THRESHOLD {
        to_hex_bulk(bytes)
    } else {
        to_hex_iter(bytes)
    }
}

fn to_hex_iter(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        hex.push(HEX_CHARS[(byte >> 4) as usize] as char);
        hex.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    hex
}

fn to_hex_bulk(bytes: &[u8]) -> String {
    let mut hex_bytes = vec![0u8; bytes.len() * 2];
    for (i, &byte) in bytes.iter().enumerate() {
        hex_bytes[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        hex_bytes[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }
    // The table only emits ASCII.
    String::from_utf8(hex_bytes).unwrap_or_default()
}

/// Decodes a hex string, stopping at the first invalid character.
///
/// Scans two characters at a time; on the first byte that is not a hex digit,
/// at either position of a pair, the bytes decoded so far are returned. A
/// trailing lone character is never consumed. This mirrors the permissive
/// behavior of Node.js `Buffer.from(s, "hex")`; use [`from_hex_strict`] to
/// reject malformed input instead.
///
/// # Example
///
/// ```
/// use octet_tools::portable::from_hex;
///
/// assert_eq!(from_hex("ff00"), [0xff, 0x00]);
/// assert_eq!(from_hex("ffba34aQcdef"), [0xff, 0xba, 0x34]);
/// assert_eq!(from_hex("abc"), [0xab]);
/// ```
pub fn from_hex(hex: &str) -> Vec<u8> {
    let input = hex.as_bytes();
    let mut bytes = Vec::with_capacity(input.len() / 2);
    let mut i = 0;
    while i + 2 <= input.len() {
        let hi = HEX_NIBBLES[input[i] as usize];
        let lo = HEX_NIBBLES[input[i + 1] as usize];
        if hi == INVALID || lo == INVALID {
            break;
        }
        bytes.push((hi << 4) | lo);
        i += 2;
    }
    bytes
}

/// Decodes a hex string, rejecting malformed input.
///
/// Odd-length input fails before any character inspection; otherwise the
/// first non-digit byte is reported with its byte position.
///
/// # Example
///
/// ```
/// use octet_tools::portable::from_hex_strict;
/// use octet_tools::HexError;
///
/// assert_eq!(from_hex_strict("ff00").unwrap(), [0xff, 0x00]);
/// assert_eq!(
///     from_hex_strict("abc"),
///     Err(HexError::OddLength { length: 3 })
/// );
/// ```
pub fn from_hex_strict(hex: &str) -> Result<Vec<u8>, HexError> {
    let input = hex.as_bytes();
    if input.len() % 2 != 0 {
        return Err(HexError::OddLength {
            length: input.len(),
        });
    }
    let mut bytes = Vec::with_capacity(input.len() / 2);
    let mut i = 0;
    while i < input.len() {
        let hi = HEX_NIBBLES[input[i] as usize];
        if hi == INVALID {
            return Err(HexError::InvalidCharacter {
                character: input[i] as char,
                position: i,
            });
        }
        let lo = HEX_NIBBLES[input[i + 1] as usize];
        if lo == INVALID {
            return Err(HexError::InvalidCharacter {
                character: input[i + 1] as char,
                position: i + 1,
            });
        }
        bytes.push((hi << 4) | lo);
        i += 2;
    }
    Ok(bytes)
}
