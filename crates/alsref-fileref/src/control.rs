//! Control codes and the scanner that locates them.
//!
//! Each field after the header opens with a two-byte token. In the underlying
//! alias record a token is the low byte of an item tag followed by the high
//! byte of the item length, so the same four hex characters can also turn up
//! inside the opaque header by accident. [`Scanner::find_framed`] only accepts
//! an occurrence whose following length-prefixed field ends exactly on the
//! next expected token.

use alsref_common::hex::{hex_to_dec, len_pad, slice};
use alsref_common::{Error, Result};

/// Two-byte token that opens a field of a FileRef stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlCode(&'static str);

impl ControlCode {
    /// Classic `:`-delimited path.
    pub const PATH: Self = Self("0200");
    /// File name in double-byte form.
    pub const FILE_NAME: Self = Self("0E00");
    /// Volume name in double-byte form.
    pub const DISK_NAME: Self = Self("0F00");
    /// Canonical `/`-delimited location.
    pub const LOCATION: Self = Self("1200");
    /// Start of the trailing block.
    pub const FOOTER: Self = Self("1300");

    /// Width of a control code in hex characters.
    pub const WIDTH: usize = 4;

    /// Get the token as hex.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ControlCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locates control codes inside a hex stream.
///
/// Only byte-aligned (even) hex offsets are considered.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    stream: &'a str,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `stream`.
    pub fn new(stream: &'a str) -> Self {
        Self { stream }
    }

    /// Check whether `code` starts exactly at `offset`.
    pub fn is_at(&self, code: ControlCode, offset: usize) -> bool {
        self.stream
            .get(offset..offset + ControlCode::WIDTH)
            .is_some_and(|token| token.eq_ignore_ascii_case(code.as_str()))
    }

    /// Find the first byte-aligned occurrence of `code` at or after `from`.
    pub fn position(&self, code: ControlCode, from: usize) -> Option<usize> {
        let mut offset = from + from % 2;
        while offset + ControlCode::WIDTH <= self.stream.len() {
            if self.is_at(code, offset) {
                return Some(offset);
            }
            offset += 2;
        }
        None
    }

    /// Find the first occurrence of `code` at or after `from` that is followed
    /// by a single-byte length-prefixed field and then by `next`.
    ///
    /// The search cursor only moves forward and stops at the end of the
    /// stream, so the scan is linear even when no occurrence is valid.
    pub fn find_framed(&self, code: ControlCode, next: ControlCode, from: usize) -> Result<usize> {
        let mut cursor = from;

        while cursor < self.stream.len() {
            let Some(candidate) = self.position(code, cursor) else {
                break;
            };

            match self.framed_end(candidate) {
                Some(end) if self.is_at(next, end) => return Ok(candidate),
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        "Skipping {} at offset {}: not followed by {}",
                        code,
                        candidate,
                        next
                    );
                }
            }

            cursor = candidate + 2;
        }

        Err(Error::DelimiterNotFound {
            code: code.as_str(),
            offset: from,
        })
    }

    /// Verify that `code` starts at `offset`.
    ///
    /// A token that never occurs again is reported as
    /// [`Error::DelimiterNotFound`]; a token that occurs only somewhere else as
    /// [`Error::ProtocolMismatch`].
    pub fn expect(&self, code: ControlCode, offset: usize) -> Result<()> {
        if self.is_at(code, offset) {
            return Ok(());
        }

        match self.position(code, offset) {
            None => Err(Error::DelimiterNotFound {
                code: code.as_str(),
                offset,
            }),
            Some(_) => {
                let end = (offset + ControlCode::WIDTH).min(self.stream.len());
                Err(Error::ProtocolMismatch {
                    expected: code.as_str(),
                    found: self.stream.get(offset..end).unwrap_or_default().to_string(),
                    offset,
                })
            }
        }
    }

    /// Offset just past the length-prefixed field that follows a token at
    /// `candidate`, including its parity filler.
    fn framed_end(&self, candidate: usize) -> Option<usize> {
        let prefix = slice(self.stream, candidate + ControlCode::WIDTH, 2).ok()?;
        let len = hex_to_dec(prefix).ok()?;
        Some(candidate + ControlCode::WIDTH + 2 + len * 2 + len_pad(len).len())
    }
}
