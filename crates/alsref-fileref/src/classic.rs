//! Fixed-offset block at the start of format-variant records.
//!
//! The block is the fixed part of a version 2 alias record. Only the volume
//! name, file name and file type code are modelled; every other byte is kept
//! as it was read. The parent directory name follows the block as a
//! variable-length field and is rebuilt from the location on every encode.
//!
//! Offsets are in hex characters.

use crate::FormatTag;
use alsref_common::hex::{
    ascii_to_hex, dec_to_hex, hex_to_ascii, hex_to_dec, len_pad, replace_at, slice,
};
use alsref_common::{Error, Result};

/// Offset of the 2-byte total length field.
pub const TOTAL_LENGTH_OFFSET: usize = 8;
/// Width of the total length field in bytes.
pub const TOTAL_LENGTH_WIDTH: usize = 2;

const VOLUME_NAME_OFFSET: usize = 20;
const VOLUME_NAME_CAPACITY: usize = 31;
const FILE_NAME_OFFSET: usize = 100;
const FILE_NAME_CAPACITY: usize = 63;
const FORMAT_OFFSET: usize = 244;
const FORMAT_WIDTH: usize = 8;

/// Length of the fixed block; the parent directory name starts here.
pub const BLOCK_LEN: usize = 306;

/// Trailing block written after the footer token of a fresh record.
pub const DEFAULT_FOOTER: &str = "012F00001500020015FFFF0000";

/// Names stored in the fixed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicNames {
    pub volume_name: String,
    pub file_name: String,
    pub format: FormatTag,
}

/// Block used for records built from scratch, with empty names and format.
pub fn default_block() -> String {
    let mut block = String::with_capacity(BLOCK_LEN);
    block.push_str("00000000000000020000");
    block.push_str(&"0".repeat(2 + VOLUME_NAME_CAPACITY * 2));
    block.push_str("42440001FFFFFFFF");
    block.push_str(&"0".repeat(2 + FILE_NAME_CAPACITY * 2));
    block.push_str("FFFFFFFF00000000");
    block.push_str(&"0".repeat(FORMAT_WIDTH));
    block.push_str("00000000FFFFFFFF");
    block.push_str("00000A20637500000000000000000000000000");
    block
}

/// Read the modelled names from a block.
pub fn read(block: &str) -> Result<ClassicNames> {
    let format = hex_to_ascii(slice(block, FORMAT_OFFSET, FORMAT_WIDTH)?)?;

    Ok(ClassicNames {
        volume_name: read_short_name(block, VOLUME_NAME_OFFSET, VOLUME_NAME_CAPACITY)?,
        file_name: read_short_name(block, FILE_NAME_OFFSET, FILE_NAME_CAPACITY)?,
        format: FormatTag::parse(&format)?,
    })
}

/// Write `names` into a copy of `block`, keeping all other bytes.
pub fn patch(block: &str, names: &ClassicNames) -> Result<String> {
    if block.len() != BLOCK_LEN {
        return Err(Error::Truncated {
            offset: 0,
            needed: BLOCK_LEN,
            available: block.len(),
        });
    }

    let volume = short_name_field(&names.volume_name, VOLUME_NAME_CAPACITY)?;
    let file = short_name_field(&names.file_name, FILE_NAME_CAPACITY)?;
    let format = ::hex::encode_upper(names.format.as_bytes());

    let block = replace_at(block, &volume, VOLUME_NAME_OFFSET)?;
    let block = replace_at(&block, &file, FILE_NAME_OFFSET)?;
    replace_at(&block, &format, FORMAT_OFFSET)
}

/// Read the parent directory name that follows the block.
///
/// Returns the name and the offset just past its filler.
pub fn read_dir_name(header: &str) -> Result<(String, usize)> {
    let len = hex_to_dec(slice(header, BLOCK_LEN, 2)?)?;
    let name = hex_to_ascii(slice(header, BLOCK_LEN + 2, len * 2)?)?;
    Ok((name, BLOCK_LEN + 2 + len * 2 + len_pad(len).len()))
}

/// Encode the parent directory name field.
pub fn dir_name_field(name: &str) -> Result<String> {
    Ok(format!(
        "{}{}{}",
        dec_to_hex(name.len(), 1)?,
        ascii_to_hex(name)?,
        len_pad(name.len())
    ))
}

/// Length-prefixed name in a zero-filled slot of `capacity` characters.
fn short_name_field(name: &str, capacity: usize) -> Result<String> {
    if name.len() > capacity {
        return Err(Error::ValueOutOfRange {
            value: name.len(),
            max: capacity,
        });
    }
    let mut field = dec_to_hex(name.len(), 1)?;
    field.push_str(&ascii_to_hex(name)?);
    field.push_str(&"0".repeat((capacity - name.len()) * 2));
    Ok(field)
}

fn read_short_name(block: &str, offset: usize, capacity: usize) -> Result<String> {
    let len = hex_to_dec(slice(block, offset, 2)?)?;
    if len > capacity {
        return Err(Error::ValueOutOfRange {
            value: len,
            max: capacity,
        });
    }
    hex_to_ascii(slice(block, offset + 2, len * 2)?)
}
