use alloc::borrow::Cow;

use jb_text::{EncodedString, Encoding};

use crate::{Context, IssueKind};

// -----------------------------------------------------------------------------
// JsonKey

/// A type usable as the key of a mapping bound as a JSON object.
///
/// Object member names are always text, so every key type converts to and
/// from `str`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use jb_bind::{from_json, to_json};
///
/// let mut scores = BTreeMap::new();
/// scores.insert(2u16, "b".to_string());
/// scores.insert(10u16, "c".to_string());
///
/// let text = to_json(&scores);
/// assert_eq!(text, r#"{"2":"b","10":"c"}"#);
/// assert_eq!(from_json::<BTreeMap<u16, String>>(&text).unwrap(), scores);
/// ```
pub trait JsonKey: Sized {
    fn to_key(&self) -> Cow<'_, str>;

    /// Parses a member name, reporting to `cx` and returning `None` when the
    /// name is not a valid key.
    fn from_key(key: &str, cx: &mut Context) -> Option<Self>;
}

impl JsonKey for String {
    #[inline]
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    #[inline]
    fn from_key(key: &str, _cx: &mut Context) -> Option<Self> {
        Some(key.to_owned())
    }
}

impl JsonKey for Box<str> {
    #[inline]
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    #[inline]
    fn from_key(key: &str, _cx: &mut Context) -> Option<Self> {
        Some(key.into())
    }
}

impl<E: Encoding> JsonKey for EncodedString<E> {
    fn to_key(&self) -> Cow<'_, str> {
        match self.decode() {
            Ok(text) => Cow::Owned(text),
            Err(e) => {
                log::error!("object key written as an empty string: {e}");
                Cow::Borrowed("")
            }
        }
    }

    fn from_key(key: &str, cx: &mut Context) -> Option<Self> {
        match Self::encode(key) {
            Ok(encoded) => Some(encoded),
            Err(e) => {
                cx.report(IssueKind::Transcode(e));
                None
            }
        }
    }
}

macro_rules! impl_json_key_for_int {
    ($($ty:ty => $expected:literal),* $(,)?) => {$(
        impl JsonKey for $ty {
            #[inline]
            fn to_key(&self) -> Cow<'_, str> {
                Cow::Owned(self.to_string())
            }

            fn from_key(key: &str, cx: &mut Context) -> Option<Self> {
                match key.parse::<$ty>() {
                    Ok(parsed) => Some(parsed),
                    Err(_) => {
                        cx.report(IssueKind::InvalidKey {
                            key: key.to_owned(),
                            expected: $expected,
                        });
                        None
                    }
                }
            }
        }
    )*};
}

impl_json_key_for_int! {
    i8 => "an 8-bit integer",
    i16 => "a 16-bit integer",
    i32 => "a 32-bit integer",
    i64 => "a 64-bit integer",
    isize => "a pointer-sized integer",
    u8 => "an unsigned 8-bit integer",
    u16 => "an unsigned 16-bit integer",
    u32 => "an unsigned 32-bit integer",
    u64 => "an unsigned 64-bit integer",
    usize => "an unsigned pointer-sized integer",
}

#[cfg(test)]
mod tests {
    use jb_text::AsciiString;

    use super::JsonKey;
    use crate::{Context, IssueKind};

    #[test]
    fn integer_keys() {
        let mut cx = Context::new();
        assert_eq!(i32::from_key("-12", &mut cx), Some(-12));
        assert_eq!(u8::from_key("300", &mut cx), None);
        assert!(matches!(
            &cx.issues()[0].kind,
            IssueKind::InvalidKey { key, .. } if key == "300"
        ));
        assert_eq!(7u64.to_key(), "7");
    }

    #[test]
    fn encoded_keys() {
        let mut cx = Context::new();
        let key = AsciiString::from_key("plain", &mut cx).unwrap();
        assert_eq!(key.to_key(), "plain");
        assert!(AsciiString::from_key("ünlaut", &mut cx).is_none());
        assert!(matches!(cx.issues()[0].kind, IssueKind::Transcode(_)));
    }
}
