use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::TranscodeError;

// -----------------------------------------------------------------------------
// Encoding

/// A character encoding for host text.
///
/// Implementations convert between their own code units and UTF-8 `str`, which is
/// the only text representation the document model and the writers understand.
pub trait Encoding: Copy + Default + 'static {
    /// The code unit type, `u8` for narrow encodings and `u16` for wide ones.
    type Unit: Copy + Eq + Ord + Hash + Debug + 'static;

    /// Human readable name, used in error messages.
    const NAME: &'static str;

    /// Whether every Unicode scalar value can be represented.
    ///
    /// Writers targeting an encoding without Unicode support escape non-ASCII
    /// characters as `\uXXXX` sequences.
    const SUPPORTS_UNICODE: bool;

    /// Appends `text` to `out`.
    ///
    /// On error, `out` may hold a prefix of the converted text.
    fn encode_into(text: &str, out: &mut Vec<Self::Unit>) -> Result<(), TranscodeError>;

    /// Decodes a complete unit sequence, stopping at the first invalid unit.
    fn decode(units: &[Self::Unit]) -> Result<String, TranscodeError>;
}

/// Encodes `text`, never returning a partially converted buffer.
#[inline]
pub fn encode<E: Encoding>(text: &str) -> Result<Vec<E::Unit>, TranscodeError> {
    let mut out = Vec::with_capacity(text.len());
    E::encode_into(text, &mut out)?;
    Ok(out)
}

/// Decodes `units` into UTF-8 text.
#[inline]
pub fn decode<E: Encoding>(units: &[E::Unit]) -> Result<String, TranscodeError> {
    E::decode(units)
}

/// Converts a unit sequence from encoding `I` to encoding `O`.
///
/// Conversion stops at the first code unit that cannot be decoded or re-encoded;
/// the caller receives the error and no output at all.
///
/// # Examples
///
/// ```
/// use jb_text::{Ascii, Utf8, Utf16, transcode};
///
/// let wide = transcode::<Utf8, Utf16>("héllo".as_bytes()).unwrap();
/// assert_eq!(wide, "héllo".encode_utf16().collect::<Vec<_>>());
///
/// assert!(transcode::<Utf16, Ascii>(&wide).is_err());
/// ```
pub fn transcode<I: Encoding, O: Encoding>(
    input: &[I::Unit],
) -> Result<Vec<O::Unit>, TranscodeError> {
    let text = I::decode(input)?;
    encode::<O>(&text)
}

// -----------------------------------------------------------------------------
// Utf8

/// UTF-8, one to four 8-bit units per character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf8;

impl Encoding for Utf8 {
    type Unit = u8;
    const NAME: &'static str = "UTF-8";
    const SUPPORTS_UNICODE: bool = true;

    #[inline]
    fn encode_into(text: &str, out: &mut Vec<u8>) -> Result<(), TranscodeError> {
        out.extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn decode(units: &[u8]) -> Result<String, TranscodeError> {
        match core::str::from_utf8(units) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => Err(TranscodeError::Invalid {
                encoding: Self::NAME,
                offset: e.valid_up_to(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Utf16

/// UTF-16 in native byte order, one or two 16-bit units per character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf16;

impl Encoding for Utf16 {
    type Unit = u16;
    const NAME: &'static str = "UTF-16";
    const SUPPORTS_UNICODE: bool = true;

    #[inline]
    fn encode_into(text: &str, out: &mut Vec<u16>) -> Result<(), TranscodeError> {
        out.extend(text.encode_utf16());
        Ok(())
    }

    fn decode(units: &[u16]) -> Result<String, TranscodeError> {
        let mut text = String::with_capacity(units.len());
        let mut offset = 0usize;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) => {
                    offset += ch.len_utf16();
                    text.push(ch);
                }
                Err(_) => {
                    return Err(TranscodeError::Invalid {
                        encoding: Self::NAME,
                        offset,
                    });
                }
            }
        }
        Ok(text)
    }
}

// -----------------------------------------------------------------------------
// Ascii

/// 7-bit ASCII stored in 8-bit units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ascii;

impl Encoding for Ascii {
    type Unit = u8;
    const NAME: &'static str = "ASCII";
    const SUPPORTS_UNICODE: bool = false;

    fn encode_into(text: &str, out: &mut Vec<u8>) -> Result<(), TranscodeError> {
        out.reserve(text.len());
        for (offset, ch) in text.char_indices() {
            if !ch.is_ascii() {
                return Err(TranscodeError::Unrepresentable {
                    encoding: Self::NAME,
                    ch,
                    offset,
                });
            }
            out.push(ch as u8);
        }
        Ok(())
    }

    fn decode(units: &[u8]) -> Result<String, TranscodeError> {
        if let Some(offset) = units.iter().position(|unit| !unit.is_ascii()) {
            return Err(TranscodeError::Invalid {
                encoding: Self::NAME,
                offset,
            });
        }
        Ok(units.iter().map(|&unit| char::from(unit)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{Ascii, Utf8, Utf16, decode, encode, transcode};
    use crate::TranscodeError;

    #[test]
    fn utf16_round_trip_keeps_surrogate_pairs() {
        let wide = encode::<Utf16>("a😀b").unwrap();
        assert_eq!(wide.len(), 4);
        assert_eq!(decode::<Utf16>(&wide).unwrap(), "a😀b");
    }

    #[test]
    fn lone_surrogate_stops_decoding() {
        let units = [0x61, 0xD800, 0x62];
        assert_eq!(
            decode::<Utf16>(&units),
            Err(TranscodeError::Invalid {
                encoding: "UTF-16",
                offset: 1
            })
        );
    }

    #[test]
    fn invalid_utf8_reports_valid_prefix() {
        let err = decode::<Utf8>(&[b'o', b'k', 0xFF]).unwrap_err();
        assert_eq!(
            err,
            TranscodeError::Invalid {
                encoding: "UTF-8",
                offset: 2
            }
        );
    }

    #[test]
    fn ascii_rejects_non_ascii() {
        let err = transcode::<Utf8, Ascii>("naïve".as_bytes()).unwrap_err();
        assert_eq!(
            err,
            TranscodeError::Unrepresentable {
                encoding: "ASCII",
                ch: 'ï',
                offset: 2
            }
        );
        assert_eq!(err.encoding(), "ASCII");
        assert_eq!(transcode::<Utf8, Ascii>(b"plain").unwrap(), b"plain");
    }
}
