//! FileRef decoding.
//!
//! A single cursor walks the stream left to right. Every control code is
//! checked before the cursor crosses it, and the decoder never skips over a
//! token it does not recognise.

use crate::classic;
use crate::control::{ControlCode, Scanner};
use crate::location::Location;
use crate::options::CodecOptions;
use crate::record::{FileRef, RefKind, Variant};
use alsref_common::hex::{check_hex, hex_to_ascii, hex_to_dec, hex_to_wide, len_pad, slice};
use alsref_common::{Error, Result};

/// Marker in front of the classic path.
pub(crate) const VOLUME_MARKER: &str = "/:";

/// Decode a record with the default (strict) options.
///
/// # Example
///
/// ```no_run
/// use alsref_fileref::{decode, Variant};
///
/// # let stream = String::new();
/// let fileref = decode(&stream, Variant::Format)?;
/// println!("{} on {}", fileref.location('/'), fileref.disk_name());
/// # Ok::<(), alsref_fileref::Error>(())
/// ```
pub fn decode(stream: &str, variant: Variant) -> Result<FileRef> {
    decode_with(stream, variant, &CodecOptions::default())
}

/// Decode a record with explicit options.
pub fn decode_with(stream: &str, variant: Variant, options: &CodecOptions) -> Result<FileRef> {
    check_hex(stream)?;
    // Opaque spans are kept verbatim, so they must already be in output case.
    let stream = stream.to_ascii_uppercase();
    Decoder::new(&stream, options).decode(variant)
}

struct Decoder<'a> {
    stream: &'a str,
    scanner: Scanner<'a>,
    options: &'a CodecOptions,
    cursor: usize,
}

impl<'a> Decoder<'a> {
    fn new(stream: &'a str, options: &'a CodecOptions) -> Self {
        Self {
            stream,
            scanner: Scanner::new(stream),
            options,
            cursor: 0,
        }
    }

    fn decode(mut self, variant: Variant) -> Result<FileRef> {
        let path_start =
            self.scanner
                .find_framed(ControlCode::PATH, ControlCode::FILE_NAME, 0)?;
        let header = slice(self.stream, 0, path_start)?;
        self.cursor = path_start;

        self.expect(ControlCode::PATH)?;
        let classic_path = self.read_ascii_field()?;

        self.expect(ControlCode::FILE_NAME)?;
        let file_name = self.read_wide_field("file name")?;

        self.expect(ControlCode::DISK_NAME)?;
        let disk_name = self.read_wide_field("disk name")?;

        self.expect(ControlCode::LOCATION)?;
        let location = Location::parse(&self.read_ascii_field()?, '/');

        self.expect(ControlCode::FOOTER)?;

        let (header, kind) = match variant {
            Variant::Format => self.format_block(header, &disk_name, &location)?,
            Variant::DiskLocation => {
                let len = self.read_byte()?;
                let disk_location = hex_to_ascii(self.read(len * 2)?)?;
                (header, RefKind::DiskLocation { disk_location })
            }
        };

        let footer = &self.stream[self.cursor..];
        let fileref = FileRef::from_parts(header, disk_name, location, kind, footer);

        self.verify_total_length()?;
        if self.options.verify_redundant_fields {
            verify_path(&classic_path, &fileref)?;
            verify_name("file name", fileref.file_name(), &file_name)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Decoded {} FileRef: {} on {:?} ({} header, {} footer hex chars)",
            variant,
            fileref.location('/'),
            fileref.disk_name(),
            fileref.header().len(),
            fileref.footer().len()
        );

        Ok(fileref)
    }

    /// Split the classic block off the header and read the format tag.
    fn format_block(
        &self,
        header: &'a str,
        disk_name: &str,
        location: &Location,
    ) -> Result<(&'a str, RefKind)> {
        let names = classic::read(header)?;
        let (dir_name, end) = classic::read_dir_name(header)?;

        if end != header.len() {
            return Err(Error::ProtocolMismatch {
                expected: ControlCode::PATH.as_str(),
                found: slice(self.stream, end, ControlCode::WIDTH)
                    .unwrap_or_default()
                    .to_string(),
                offset: end,
            });
        }

        if self.options.verify_redundant_fields {
            verify_name("volume name", disk_name, &names.volume_name)?;
            verify_name("classic file name", location.file_name(), &names.file_name)?;
            verify_name("directory name", location.dir_name(), &dir_name)?;
        }

        Ok((
            &header[..classic::BLOCK_LEN],
            RefKind::Format {
                format: names.format,
            },
        ))
    }

    fn read(&mut self, len: usize) -> Result<&'a str> {
        let span = slice(self.stream, self.cursor, len)?;
        self.cursor += len;
        Ok(span)
    }

    fn read_byte(&mut self) -> Result<usize> {
        hex_to_dec(self.read(2)?)
    }

    fn expect(&mut self, code: ControlCode) -> Result<()> {
        self.scanner.expect(code, self.cursor)?;
        self.cursor += ControlCode::WIDTH;
        Ok(())
    }

    /// Consume `len` hex chars that must be zero.
    fn skip_zeros(&mut self, len: usize, field: &'static str) -> Result<()> {
        let offset = self.cursor;
        let span = self.read(len)?;
        if self.options.verify_redundant_fields && span.bytes().any(|b| b != b'0') {
            return Err(Error::inconsistent(
                field,
                "0".repeat(len),
                format!("{span} at offset {offset}"),
            ));
        }
        Ok(())
    }

    /// Single-byte length, ASCII characters, parity filler.
    fn read_ascii_field(&mut self) -> Result<String> {
        let len = self.read_byte()?;
        let text = hex_to_ascii(self.read(len * 2)?)?;
        self.skip_zeros(len_pad(len).len(), "filler")?;
        Ok(text)
    }

    /// Outer byte count, character count, then one ASCII byte and one null
    /// byte per character.
    fn read_wide_field(&mut self, field: &'static str) -> Result<String> {
        let outer = self.read_byte()?;
        self.skip_zeros(2, "filler")?;
        let count = self.read_byte()?;
        self.skip_zeros(2, "filler")?;
        let text = hex_to_wide(self.read(count * 4)?)?;

        if self.options.verify_redundant_fields && outer != count * 2 + 2 {
            return Err(Error::inconsistent(
                field,
                format!("byte count {}", count * 2 + 2),
                format!("byte count {outer}"),
            ));
        }
        Ok(text)
    }

    fn verify_total_length(&self) -> Result<()> {
        if !self.options.verify_length {
            return Ok(());
        }

        let stored = hex_to_dec(slice(
            self.stream,
            classic::TOTAL_LENGTH_OFFSET,
            classic::TOTAL_LENGTH_WIDTH * 2,
        )?)?;
        let actual = self.stream.len() / 2;
        if stored != actual {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "FileRef total length field says {} bytes, stream has {}",
                stored,
                actual
            );
            return Err(Error::inconsistent(
                "total length",
                actual.to_string(),
                stored.to_string(),
            ));
        }
        Ok(())
    }
}

/// The classic path must be the volume marker plus the location with `:`
/// delimiters. External references point into another volume and only need
/// the marker to be present.
fn verify_path(classic_path: &str, fileref: &FileRef) -> Result<()> {
    let Some(path) = classic_path.strip_prefix(VOLUME_MARKER) else {
        return Err(Error::inconsistent(
            "volume marker",
            VOLUME_MARKER,
            classic_path.get(..2).unwrap_or(classic_path),
        ));
    };

    if fileref.is_external() {
        return Ok(());
    }

    let classic = Location::parse(path, ':').render(':');
    let expected = fileref.location(':');
    if classic != expected {
        return Err(Error::inconsistent("classic path", expected, classic));
    }
    Ok(())
}

fn verify_name(field: &'static str, expected: &str, found: &str) -> Result<()> {
    if expected != found {
        return Err(Error::inconsistent(field, expected, found));
    }
    Ok(())
}
