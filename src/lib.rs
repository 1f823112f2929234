//! Alsref - FileRef tooling for Ableton Live projects
//!
//! This library crate wires the FileRef codec to configuration and logging.

pub mod config;
pub mod relocate;

pub use alsref_fileref::{
    decode, decode_with, encode, CodecOptions, Error, FileRef, FormatTag, Location, RefKind,
    Result, Variant,
};
pub use relocate::{relocate, Relocator};
