//! Hex codec for the standard binding, backed by the `hex` crate.

use crate::error::HexError;

/// Encodes bytes as a lower-case hex string, two digits per byte.
///
/// # Example
///
/// ```
/// use octet_tools::to_hex;
///
/// assert_eq!(to_hex(&[0xff, 0x00]), "ff00");
/// assert_eq!(to_hex(&[]), "");
/// ```
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string, stopping at the first invalid character.
///
/// Scans two characters at a time; on the first character that is not a hex
/// digit, at either position of a pair, the bytes decoded so far are
/// returned. A trailing lone character is never consumed. This mirrors the
/// permissive behavior of Node.js `Buffer.from(s, "hex")`; use
/// [`from_hex_strict`] to reject malformed input instead.
///
/// # Example
///
/// ```
/// use octet_tools::from_hex;
///
/// assert_eq!(from_hex("ff00"), [0xff, 0x00]);
/// assert_eq!(from_hex("ffa bcdef"), [0xff]);
/// assert_eq!(from_hex(""), Vec::<u8>::new());
/// ```
pub fn from_hex(hex: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(hex.len() / 2);
    let mut digits = hex.chars().map(|c| c.to_digit(16));
    while let (Some(Some(hi)), Some(Some(lo))) = (digits.next(), digits.next()) {
        bytes.push(((hi << 4) | lo) as u8);
    }
    bytes
}

/// Decodes a hex string, rejecting malformed input.
///
/// Odd-length input fails before any character inspection; otherwise the
/// first non-digit byte is reported with its byte position. Error values are
/// identical to the portable binding's.
///
/// # Example
///
/// ```
/// use octet_tools::from_hex_strict;
/// use octet_tools::HexError;
///
/// assert_eq!(from_hex_strict("deadbeef").unwrap(), [0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(
///     from_hex_strict("ffQa"),
///     Err(HexError::InvalidCharacter { character: 'Q', position: 2 })
/// );
/// ```
pub fn from_hex_strict(input: &str) -> Result<Vec<u8>, HexError> {
    hex::decode(input).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
            character: c,
            position: index,
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            HexError::OddLength {
                length: input.len(),
            }
        }
    })
}
