//! Four-character file format tags.

use alsref_common::{Error, Result};
use std::str::FromStr;

/// Four-character file type code, e.g. `AIFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatTag([u8; 4]);

impl FormatTag {
    pub const AIFF: Self = Self(*b"AIFF");
    pub const AIFC: Self = Self(*b"AIFC");
    pub const WAVE: Self = Self(*b"WAVE");
    pub const MP3: Self = Self(*b"MPG3");

    /// Create from raw bytes, which must all be ASCII.
    pub fn from_bytes(bytes: [u8; 4]) -> Result<Self> {
        if !bytes.is_ascii() {
            return Err(Error::InvalidFormatTag(::hex::encode_upper(bytes)));
        }
        Ok(Self(bytes))
    }

    /// Get the raw 4-byte code.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Parse a tag from exactly four ASCII characters.
    pub fn parse(tag: &str) -> Result<Self> {
        match <[u8; 4]>::try_from(tag.as_bytes()) {
            Ok(bytes) if tag.is_ascii() => Ok(Self(bytes)),
            _ => Err(Error::InvalidFormatTag(tag.to_string())),
        }
    }

    /// Get the 4-char code as a string.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl FromStr for FormatTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
