//! Hex-string primitives.
//!
//! FileRef records travel as hex-character strings, two characters per byte.
//! These helpers convert between that representation and ASCII text or
//! fixed-width integers, and provide the bounds-checked slicing the decoder
//! walks the stream with. All output uses uppercase digits; input may use
//! either case.

use crate::{Error, Result};

/// Decode hex into raw bytes.
fn decode_bytes(hex: &str) -> Result<Vec<u8>> {
    Ok(::hex::decode(hex)?)
}

/// Check that `hex` is a well-formed hex string.
pub fn check_hex(hex: &str) -> Result<()> {
    decode_bytes(hex).map(|_| ())
}

/// Decode hex into ASCII text, one byte per character.
///
/// # Examples
///
/// ```
/// use alsref_common::hex::hex_to_ascii;
///
/// assert_eq!(hex_to_ascii("4149464600").unwrap(), "AIFF\0");
/// assert!(hex_to_ascii("414").is_err());
/// ```
pub fn hex_to_ascii(hex: &str) -> Result<String> {
    let bytes = decode_bytes(hex)?;
    if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(Error::malformed_hex(format!(
            "byte {:02X} at offset {} is not ASCII",
            bytes[pos],
            pos * 2
        )));
    }
    Ok(bytes.into_iter().map(char::from).collect())
}

/// Encode ASCII text as hex, one byte per character.
///
/// # Examples
///
/// ```
/// use alsref_common::hex::ascii_to_hex;
///
/// assert_eq!(ascii_to_hex("/:").unwrap(), "2F3A");
/// assert!(ascii_to_hex("café").is_err());
/// ```
pub fn ascii_to_hex(text: &str) -> Result<String> {
    if !text.is_ascii() {
        return Err(Error::NonAscii(text.to_string()));
    }
    Ok(::hex::encode_upper(text))
}

/// Decode a big-endian hex integer.
pub fn hex_to_dec(hex: &str) -> Result<usize> {
    if hex.is_empty() || hex.len() > 16 {
        return Err(Error::malformed_hex(format!(
            "integer field of width {}",
            hex.len()
        )));
    }
    Ok(decode_bytes(hex)?
        .into_iter()
        .fold(0usize, |acc, b| (acc << 8) | b as usize))
}

/// Encode an integer as a big-endian hex field of `width` bytes.
///
/// # Examples
///
/// ```
/// use alsref_common::hex::dec_to_hex;
///
/// assert_eq!(dec_to_hex(12, 1).unwrap(), "0C");
/// assert_eq!(dec_to_hex(350, 2).unwrap(), "015E");
/// assert!(dec_to_hex(256, 1).is_err());
/// ```
pub fn dec_to_hex(value: usize, width: usize) -> Result<String> {
    let max = if width >= std::mem::size_of::<usize>() {
        usize::MAX
    } else {
        (1usize << (width * 8)) - 1
    };
    if value > max {
        return Err(Error::ValueOutOfRange { value, max });
    }
    Ok(format!("{value:0digits$X}", digits = width * 2))
}

/// Alignment filler following a single-byte string field of `char_len`
/// characters: one null byte when the length is even, two when it is odd.
pub fn len_pad(char_len: usize) -> &'static str {
    if char_len % 2 == 0 {
        "00"
    } else {
        "0000"
    }
}

/// Overwrite the span of `hex` starting at `offset` with `replacement`.
pub fn replace_at(hex: &str, replacement: &str, offset: usize) -> Result<String> {
    let end = offset + replacement.len();
    let (head, tail) = match (hex.get(..offset), hex.get(end..)) {
        (Some(head), Some(tail)) => (head, tail),
        _ if end > hex.len() => {
            return Err(Error::Truncated {
                offset,
                needed: replacement.len(),
                available: hex.len().saturating_sub(offset),
            })
        }
        _ => return Err(Error::malformed_hex("replacement splits a character")),
    };

    let mut out = String::with_capacity(hex.len());
    out.push_str(head);
    out.push_str(replacement);
    out.push_str(tail);
    Ok(out)
}

/// Borrow `len` hex characters starting at `offset`.
pub fn slice(hex: &str, offset: usize, len: usize) -> Result<&str> {
    let end = offset + len;
    if end > hex.len() {
        return Err(Error::Truncated {
            offset,
            needed: len,
            available: hex.len().saturating_sub(offset),
        });
    }
    hex.get(offset..end)
        .ok_or_else(|| Error::malformed_hex(format!("non-ASCII data at offset {offset}")))
}

/// Encode text in the double-byte name form: each ASCII byte is followed by a
/// null byte.
///
/// # Examples
///
/// ```
/// use alsref_common::hex::wide_to_hex;
///
/// assert_eq!(wide_to_hex("HD").unwrap(), "48004400");
/// ```
pub fn wide_to_hex(text: &str) -> Result<String> {
    if !text.is_ascii() {
        return Err(Error::NonAscii(text.to_string()));
    }
    let wide: Vec<u8> = text.bytes().flat_map(|b| [b, 0]).collect();
    Ok(::hex::encode_upper(wide))
}

/// Decode the double-byte name form produced by [`wide_to_hex`].
pub fn hex_to_wide(hex: &str) -> Result<String> {
    let bytes = decode_bytes(hex)?;
    if bytes.len() % 2 != 0 {
        return Err(Error::malformed_hex(format!(
            "double-byte text of odd byte length {}",
            bytes.len()
        )));
    }

    bytes
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [ch, 0] if ch.is_ascii() => Ok(char::from(*ch)),
            _ => Err(Error::malformed_hex(format!(
                "character {:02X}{:02X} at offset {} is not ASCII followed by a null byte",
                pair[0],
                pair[1],
                i * 4
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "48656C6C6F20576F726C6421313233344023";
    const ASCII: &str = "Hello World!1234@#";

    #[test]
    fn test_hex_to_ascii() {
        assert_eq!(hex_to_ascii(HEX).unwrap(), ASCII);
        assert_eq!(hex_to_ascii(&HEX.to_lowercase()).unwrap(), ASCII);
        assert_eq!(hex_to_ascii("").unwrap(), "");
    }

    #[test]
    fn test_ascii_to_hex() {
        assert_eq!(ascii_to_hex(ASCII).unwrap(), HEX);
    }

    #[test]
    fn test_ascii_round_trip() {
        for text in ["", "a", "Macintosh HD", "0001 20-Audio.aif", "/:Users:x"] {
            let hex = ascii_to_hex(text).unwrap();
            assert_eq!(hex.len(), text.len() * 2);
            assert_eq!(hex_to_ascii(&hex).unwrap(), text);
        }
        for hex in ["", "00", "7F41", "2F3A55736572733A"] {
            assert_eq!(ascii_to_hex(&hex_to_ascii(hex).unwrap()).unwrap(), hex);
        }
    }

    #[test]
    fn test_malformed_hex() {
        assert!(matches!(hex_to_ascii("ABC"), Err(Error::MalformedHex(_))));
        assert!(matches!(hex_to_ascii("4G"), Err(Error::MalformedHex(_))));
        assert!(matches!(hex_to_ascii("+1"), Err(Error::MalformedHex(_))));
        assert!(matches!(hex_to_ascii("FF"), Err(Error::MalformedHex(_))));
        assert!(matches!(hex_to_ascii("é0"), Err(Error::MalformedHex(_))));
        assert_eq!(
            hex_to_ascii("4G"),
            Err(Error::malformed_hex("Invalid character 'G' at position 1"))
        );
    }

    #[test]
    fn test_check_hex() {
        assert!(check_hex("00ff15FFFF0000").is_ok());
        assert!(check_hex("").is_ok());
        assert!(matches!(check_hex("0"), Err(Error::MalformedHex(_))));
        assert!(matches!(check_hex("0x"), Err(Error::MalformedHex(_))));
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(
            ascii_to_hex("Überweg"),
            Err(Error::NonAscii("Überweg".to_string()))
        );
        assert!(matches!(wide_to_hex("ß"), Err(Error::NonAscii(_))));
    }

    #[test]
    fn test_dec_hex() {
        assert_eq!(hex_to_dec("0C").unwrap(), 12);
        assert_eq!(hex_to_dec("015E").unwrap(), 350);
        assert_eq!(hex_to_dec("ff").unwrap(), 255);
        assert_eq!(dec_to_hex(0, 1).unwrap(), "00");
        assert_eq!(dec_to_hex(255, 1).unwrap(), "FF");
        assert_eq!(dec_to_hex(468, 2).unwrap(), "01D4");
        assert!(hex_to_dec("").is_err());
        assert!(hex_to_dec("1").is_err());
    }

    #[test]
    fn test_dec_to_hex_out_of_range() {
        assert_eq!(
            dec_to_hex(256, 1),
            Err(Error::ValueOutOfRange {
                value: 256,
                max: 255
            })
        );
        assert_eq!(
            dec_to_hex(70_000, 2),
            Err(Error::ValueOutOfRange {
                value: 70_000,
                max: 65_535
            })
        );
    }

    #[test]
    fn test_len_pad_parity() {
        for n in 0..64 {
            let bytes = len_pad(n).len() / 2;
            if n % 2 == 0 {
                assert_eq!(bytes, 1, "even length {n}");
            } else {
                assert_eq!(bytes, 2, "odd length {n}");
            }
        }
    }

    #[test]
    fn test_replace_at() {
        assert_eq!(
            replace_at("000000000000", "015E", 8).unwrap(),
            "00000000015E"
        );
        assert_eq!(replace_at("ABCD", "", 2).unwrap(), "ABCD");
        assert!(matches!(
            replace_at("000000", "015E", 4),
            Err(Error::Truncated { offset: 4, .. })
        ));
    }

    #[test]
    fn test_slice() {
        assert_eq!(slice("0A0B0C", 2, 2).unwrap(), "0B");
        assert_eq!(slice("0A0B0C", 6, 0).unwrap(), "");
        assert_eq!(
            slice("0A0B0C", 4, 4),
            Err(Error::Truncated {
                offset: 4,
                needed: 4,
                available: 2
            })
        );
    }

    #[test]
    fn test_wide() {
        let hex = wide_to_hex("Macintosh HD").unwrap();
        assert_eq!(hex, "4D006100630069006E0074006F0073006800200048004400");
        assert_eq!(hex_to_wide(&hex).unwrap(), "Macintosh HD");
        assert!(matches!(hex_to_wide("4D01"), Err(Error::MalformedHex(_))));
        assert!(matches!(hex_to_wide("4D"), Err(Error::MalformedHex(_))));
    }
}
