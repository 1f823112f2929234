//! # alsref-fileref
//!
//! Decoder and encoder for the FileRef records Ableton Live stores, hex
//! encoded, inside its project files.
//!
//! A FileRef is a classic Mac OS alias record: an opaque or fixed-layout
//! header, a run of fields opened by two-byte control codes, and an opaque
//! footer. Decoding followed by encoding reproduces the input exactly, so
//! tools can rewrite the referenced location without disturbing the bytes
//! they do not understand.
//!
//! ## Features
//!
//! - `serde` - Serialize/Deserialize for [`CodecOptions`] and [`Variant`]
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```
//! use alsref_fileref::{decode, encode, FileRef, FormatTag, Variant};
//!
//! let original = FileRef::new("Macintosh HD", "Users/me/Desktop/take.aif", FormatTag::AIFF);
//! let stream = encode(&original)?;
//!
//! let mut fileref = decode(&stream, Variant::Format)?;
//! assert_eq!(fileref.location('/'), original.location('/'));
//! assert_eq!(encode(&fileref)?, stream);
//!
//! fileref.set_location("Users/me/Music/Project/take.aif");
//! let relocated = encode(&fileref)?;
//! assert_eq!(decode(&relocated, Variant::Format)?.dir_name(), "Project");
//! # Ok::<(), alsref_fileref::Error>(())
//! ```

pub mod classic;
pub mod control;
mod decode;
mod encode;
mod format;
mod location;
mod options;
mod record;

pub use alsref_common::{Error, Result};
pub use control::{ControlCode, Scanner};
pub use decode::{decode, decode_with};
pub use encode::encode;
pub use format::FormatTag;
pub use location::{Location, ROOT};
pub use options::CodecOptions;
pub use record::{FileRef, RefKind, Variant};
