use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use crate::{Ascii, Encoding, TranscodeError, Utf8, Utf16, decode, encode};

// -----------------------------------------------------------------------------
// EncodedString

/// Owned host text stored as code units of encoding `E`.
///
/// The units are not validated on construction through
/// [`from_units`](Self::from_units), so a value may hold a sequence that fails to
/// [`decode`](Self::decode). Code that hands the text to a JSON writer must be
/// prepared for that.
///
/// # Examples
///
/// ```
/// use jb_text::{AsciiString, Utf16String};
///
/// let wide = Utf16String::from("größe");
/// assert_eq!(wide.decode().unwrap(), "größe");
///
/// assert!(AsciiString::encode("größe").is_err());
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedString<E: Encoding> {
    units: Vec<E::Unit>,
    _marker: PhantomData<E>,
}

/// Wide (16-bit) host text.
pub type Utf16String = EncodedString<Utf16>;

/// 7-bit host text.
pub type AsciiString = EncodedString<Ascii>;

impl<E: Encoding> EncodedString<E> {
    /// Creates an empty string.
    #[inline]
    pub const fn new() -> Self {
        Self {
            units: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Wraps raw code units without validating them.
    #[inline]
    pub const fn from_units(units: Vec<E::Unit>) -> Self {
        Self {
            units,
            _marker: PhantomData,
        }
    }

    /// Encodes UTF-8 text, failing on the first character `E` cannot represent.
    #[inline]
    pub fn encode(text: &str) -> Result<Self, TranscodeError> {
        encode::<E>(text).map(Self::from_units)
    }

    /// Decodes the stored units into UTF-8 text.
    #[inline]
    pub fn decode(&self) -> Result<String, TranscodeError> {
        decode::<E>(&self.units)
    }

    #[inline]
    pub fn as_units(&self) -> &[E::Unit] {
        &self.units
    }

    #[inline]
    pub fn into_units(self) -> Vec<E::Unit> {
        self.units
    }

    /// Number of code units, not characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<E: Encoding> fmt::Debug for EncodedString<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Ok(text) => write!(f, "{}{text:?}", E::NAME),
            Err(_) => write!(f, "{}{:?}", E::NAME, self.units),
        }
    }
}

impl From<&str> for EncodedString<Utf8> {
    #[inline]
    fn from(value: &str) -> Self {
        Self::from_units(value.as_bytes().to_vec())
    }
}

impl From<&str> for EncodedString<Utf16> {
    #[inline]
    fn from(value: &str) -> Self {
        Self::from_units(value.encode_utf16().collect())
    }
}

impl TryFrom<&str> for EncodedString<Ascii> {
    type Error = TranscodeError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::encode(value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec};

    use super::{AsciiString, Utf16String};

    #[test]
    fn invalid_units_are_kept_until_decoded() {
        let broken = Utf16String::from_units(vec![0xDC00]);
        assert_eq!(broken.len(), 1);
        assert!(broken.decode().is_err());
        assert_eq!(format!("{broken:?}"), "UTF-16[56320]");
    }

    #[test]
    fn ascii_try_from() {
        let text = AsciiString::try_from("abc").unwrap();
        assert_eq!(text.as_units(), b"abc");
        assert!(AsciiString::try_from("ä").is_err());
    }
}
