//! Alsref-Common: shared error type and hex primitives.
//!
//! - **Error Handling**: [`Error`] covers every failure of the FileRef codec
//! - **Hex Primitives**: conversions between hex-character strings, ASCII
//!   text and fixed-width integers
//!
//! # Examples
//!
//! ```
//! use alsref_common::hex::{ascii_to_hex, dec_to_hex, hex_to_ascii};
//! use alsref_common::{Error, Result};
//!
//! fn label() -> Result<String> {
//!     let hex = format!("{}{}", dec_to_hex(4, 1)?, ascii_to_hex("AIFF")?);
//!     hex_to_ascii(&hex[2..])
//! }
//!
//! assert_eq!(label().unwrap(), "AIFF");
//! assert!(matches!(dec_to_hex(256, 1), Err(Error::ValueOutOfRange { .. })));
//! ```

pub mod error;
pub mod hex;

pub use error::{Error, Result};
