//! Byte-order tag for multi-byte integer accessors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a byte-order token cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown byte order token {0:?}, expected \"LE\" or \"BE\"")]
pub struct ParseEndianError(pub String);

/// Byte order of a multi-byte integer.
///
/// `Little` stores the least-significant byte first, `Big` the
/// most-significant byte first. Single-byte accessors take no byte order.
///
/// # Example
///
/// ```
/// use octet_tools::Endian;
///
/// assert_eq!("LE".parse::<Endian>().unwrap(), Endian::Little);
/// assert_eq!("be".parse::<Endian>().unwrap(), Endian::Big);
/// assert!("middle".parse::<Endian>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Canonical upper-case token for this byte order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endian::Little => "LE",
            Endian::Big => "BE",
        }
    }

    /// Parses a byte-order token, ignoring ASCII case.
    ///
    /// Only the `LE` and `BE` tokens are recognized; every case mixture of
    /// those two parses, anything else is an error.
    pub fn parse_str(s: &str) -> Result<Self, ParseEndianError> {
        if s.eq_ignore_ascii_case("LE") {
            Ok(Endian::Little)
        } else if s.eq_ignore_ascii_case("BE") {
            Ok(Endian::Big)
        } else {
            Err(ParseEndianError(s.to_string()))
        }
    }
}

impl FromStr for Endian {
    type Err = ParseEndianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endian::parse_str(s)
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_mixtures() {
        for token in ["LE", "le", "Le", "lE"] {
            assert_eq!(Endian::parse_str(token).unwrap(), Endian::Little);
        }
        for token in ["BE", "be", "Be", "bE"] {
            assert_eq!(Endian::parse_str(token).unwrap(), Endian::Big);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for token in ["", "L", "E", "LEE", "middle", "little", "big", " le"] {
            assert_eq!(
                Endian::parse_str(token),
                Err(ParseEndianError(token.to_string()))
            );
        }
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for endian in [Endian::Little, Endian::Big] {
            assert_eq!(endian.to_string().parse::<Endian>().unwrap(), endian);
        }
    }

    #[test]
    fn test_as_str_is_canonical() {
        assert_eq!(Endian::Little.as_str(), "LE");
        assert_eq!(Endian::Big.as_str(), "BE");
    }
}
