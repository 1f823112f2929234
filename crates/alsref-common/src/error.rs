//! Error types for alsref.
//!
//! Every failure of the FileRef codec is reported through [`Error`]. None of
//! them are retried: a malformed stream cannot become valid by reading it
//! again, and the codec never repairs corruption on its own.

use thiserror::Error;

/// Result type for alsref operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for alsref operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Hex input had an odd length, a non-hex digit or a byte that is not ASCII.
    #[error("Malformed hex: {0}")]
    MalformedHex(String),

    /// Text that has to be stored one byte per character contained non-ASCII.
    #[error("Non-ASCII text cannot be encoded: {0:?}")]
    NonAscii(String),

    /// An integer or field length does not fit the fixed width of its slot.
    #[error("Value {value} out of range (max: {max})")]
    ValueOutOfRange { value: usize, max: usize },

    /// A control code never occurs at a structurally valid position.
    #[error("Control code {code} not found after offset {offset}")]
    DelimiterNotFound { code: &'static str, offset: usize },

    /// The decoder found a different token than the one it requires.
    #[error("Expected control code {expected} at offset {offset}, found {found:?}")]
    ProtocolMismatch {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    /// The stream ended inside a field.
    #[error("Stream truncated at offset {offset}: need {needed} hex chars, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Two encodings of the same value inside one record disagree.
    #[error("Inconsistent {field}: expected {expected:?}, found {found:?}")]
    InconsistentField {
        field: &'static str,
        expected: String,
        found: String,
    },

    /// A format tag was not exactly four ASCII characters.
    #[error("Invalid format tag: {0:?}")]
    InvalidFormatTag(String),

    /// The requested operation is not supported for this record.
    #[error("Unsupported: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// Create a malformed hex error.
    pub fn malformed_hex(msg: impl Into<String>) -> Self {
        Self::MalformedHex(msg.into())
    }

    /// Create an unsupported operation error.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }

    /// Create an inconsistent field error.
    pub fn inconsistent(
        field: &'static str,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::InconsistentField {
            field,
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl From<::hex::FromHexError> for Error {
    fn from(err: ::hex::FromHexError) -> Self {
        Self::MalformedHex(err.to_string())
    }
}
