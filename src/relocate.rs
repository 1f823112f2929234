//! Decode, relocate and re-encode FileRef blobs in one call.

use crate::config::Config;
use alsref_fileref::{decode_with, encode, CodecOptions, Error, FileRef, Result, Variant};

/// Rewrites the location stored in FileRef blobs.
#[derive(Debug, Clone)]
pub struct Relocator {
    options: CodecOptions,
    variant: Variant,
    keep_external: bool,
}

impl Relocator {
    pub fn new(config: &Config) -> Self {
        Self {
            options: config.codec,
            variant: config.fileref.variant,
            keep_external: config.fileref.keep_external,
        }
    }

    /// Decode a blob with the configured variant.
    pub fn decode(&self, stream: &str) -> Result<FileRef> {
        self.decode_as(stream, self.variant)
    }

    /// Decode a blob with an explicit variant.
    pub fn decode_as(&self, stream: &str, variant: Variant) -> Result<FileRef> {
        decode_with(stream, variant, &self.options)
    }

    /// Point the blob at `location` using the configured variant.
    pub fn relocate(&self, stream: &str, location: &str) -> Result<String> {
        self.relocate_as(stream, self.variant, location)
    }

    /// Point the blob at `location`.
    ///
    /// External references are moved onto the project volume unless the
    /// relocator was configured to keep them.
    pub fn relocate_as(&self, stream: &str, variant: Variant, location: &str) -> Result<String> {
        let fileref = self.decode_as(stream, variant)?;

        if fileref.is_external() && self.keep_external {
            return Err(Error::unsupported(format!(
                "relocating external reference to {}",
                fileref.absolute_location('/')
            )));
        }

        let previous = fileref.absolute_location('/');
        let fileref = fileref.with_location(location);
        let relocated = encode(&fileref)?;

        tracing::info!(
            "Relocated {} FileRef: {} -> {}",
            variant,
            previous,
            fileref.absolute_location('/')
        );
        tracing::debug!(
            "FileRef length {} -> {} bytes",
            stream.len() / 2,
            relocated.len() / 2
        );

        Ok(relocated)
    }
}

impl Default for Relocator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Relocate a blob with default options.
pub fn relocate(stream: &str, variant: Variant, location: &str) -> Result<String> {
    Relocator::default().relocate_as(stream, variant, location)
}
