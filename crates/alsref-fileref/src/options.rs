//! Decoder configuration.

/// Strictness switches for decoding.
///
/// Both checks are on by default. A record decoded with a check disabled may
/// not re-encode to the stream it came from.
///
/// ```
/// use alsref_fileref::CodecOptions;
///
/// let options = CodecOptions::lenient();
/// assert!(!options.verify_length);
/// assert!(CodecOptions::default().verify_redundant_fields);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecOptions {
    /// Require the stored total length to equal the stream length.
    /// Default: true
    pub verify_length: bool,

    /// Require redundant copies of names and paths, and the zero bytes
    /// between fields, to agree with the decoded values.
    /// Default: true
    pub verify_redundant_fields: bool,
}

impl CodecOptions {
    /// All checks enabled.
    pub fn strict() -> Self {
        Self {
            verify_length: true,
            verify_redundant_fields: true,
        }
    }

    /// All checks disabled.
    pub fn lenient() -> Self {
        Self {
            verify_length: false,
            verify_redundant_fields: false,
        }
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::strict()
    }
}
