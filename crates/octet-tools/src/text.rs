//! UTF-8 and base64 pass-throughs shared by both bindings.
//!
//! These are thin delegations to the standard codecs; the interesting
//! byte-level work lives in the hex and integer modules.

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

/// Error returned when base64 decoding fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Base64Error {
    #[error("invalid base64 input: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Decodes a byte buffer as UTF-8 text.
///
/// Invalid sequences are replaced with U+FFFD, so decoding never fails.
///
/// # Example
///
/// ```
/// use octet_tools::to_utf8;
///
/// assert_eq!(to_utf8(b"hello"), "hello");
/// assert_eq!(to_utf8(&[0xff]), "\u{fffd}");
/// ```
pub fn to_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Encodes text as a fresh UTF-8 byte buffer.
///
/// # Example
///
/// ```
/// use octet_tools::from_utf8;
///
/// assert_eq!(from_utf8("hey"), b"hey");
/// ```
pub fn from_utf8(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Encodes a byte buffer as base64 (standard alphabet, padded).
///
/// # Example
///
/// ```
/// use octet_tools::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decodes canonical padded base64 into a byte buffer.
///
/// # Example
///
/// ```
/// use octet_tools::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// assert!(from_base64("not base64!").is_err());
/// ```
pub fn from_base64(text: &str) -> Result<Vec<u8>, Base64Error> {
    Ok(general_purpose::STANDARD.decode(text)?)
}
