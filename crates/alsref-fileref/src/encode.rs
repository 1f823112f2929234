//! FileRef encoding.

use crate::classic::{self, ClassicNames};
use crate::control::ControlCode;
use crate::decode::VOLUME_MARKER;
use crate::record::{FileRef, RefKind};
use alsref_common::hex::{
    ascii_to_hex, check_hex, dec_to_hex, len_pad, replace_at, wide_to_hex,
};
use alsref_common::{Error, Result};

/// Encode a record into its hex stream.
///
/// Every length prefix and filler is derived from the current field values,
/// and the total length field is rewritten once the stream is complete.
/// External references cannot be encoded.
pub fn encode(fileref: &FileRef) -> Result<String> {
    if fileref.is_external() {
        return Err(Error::unsupported(format!(
            "encoding external reference to {}",
            fileref.absolute_location('/')
        )));
    }

    check_hex(fileref.header())?;
    check_hex(fileref.footer())?;

    let length_end = classic::TOTAL_LENGTH_OFFSET + classic::TOTAL_LENGTH_WIDTH * 2;
    if fileref.header().len() < length_end {
        return Err(Error::Truncated {
            offset: 0,
            needed: length_end,
            available: fileref.header().len(),
        });
    }

    let location = fileref.path();
    let mut stream = String::with_capacity(fileref.header().len() + 512);

    match fileref.kind() {
        RefKind::Format { format } => {
            let names = ClassicNames {
                volume_name: fileref.disk_name().to_string(),
                file_name: location.file_name().to_string(),
                format: *format,
            };
            stream.push_str(&classic::patch(fileref.header(), &names)?);
            stream.push_str(&classic::dir_name_field(location.dir_name())?);
        }
        RefKind::DiskLocation { .. } => stream.push_str(fileref.header()),
    }

    let classic_path = location.render(':');
    stream.push_str(ControlCode::PATH.as_str());
    stream.push_str(&dec_to_hex(classic_path.len() + VOLUME_MARKER.len(), 1)?);
    stream.push_str(&ascii_to_hex(VOLUME_MARKER)?);
    stream.push_str(&ascii_to_hex(&classic_path)?);
    stream.push_str(len_pad(classic_path.len()));

    push_wide_field(&mut stream, ControlCode::FILE_NAME, location.file_name())?;
    push_wide_field(&mut stream, ControlCode::DISK_NAME, fileref.disk_name())?;

    let canonical = location.render('/');
    stream.push_str(ControlCode::LOCATION.as_str());
    stream.push_str(&dec_to_hex(canonical.len(), 1)?);
    stream.push_str(&ascii_to_hex(&canonical)?);
    stream.push_str(len_pad(canonical.len()));

    stream.push_str(ControlCode::FOOTER.as_str());
    if let RefKind::DiskLocation { disk_location } = fileref.kind() {
        stream.push_str(&dec_to_hex(disk_location.len(), 1)?);
        stream.push_str(&ascii_to_hex(disk_location)?);
    }
    stream.push_str(fileref.footer());

    let total = dec_to_hex(stream.len() / 2, classic::TOTAL_LENGTH_WIDTH)?;
    let stream = replace_at(&stream, &total, classic::TOTAL_LENGTH_OFFSET)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Encoded {} FileRef for {} ({} bytes)",
        fileref.variant(),
        canonical,
        stream.len() / 2
    );

    Ok(stream)
}

/// Outer byte count, character count, then one ASCII byte and one null byte
/// per character.
fn push_wide_field(stream: &mut String, code: ControlCode, name: &str) -> Result<()> {
    stream.push_str(code.as_str());
    stream.push_str(&dec_to_hex(name.len() * 2 + 2, 1)?);
    stream.push_str("00");
    stream.push_str(&dec_to_hex(name.len(), 1)?);
    stream.push_str("00");
    stream.push_str(&wide_to_hex(name)?);
    Ok(())
}
