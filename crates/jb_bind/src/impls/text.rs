use alloc::borrow::Cow;

use jb_json::{JsonWriter, Value, ValueExt};
use jb_text::{EncodedString, Encoding};

use crate::{Context, FromJson, IssueKind, JsonShape, Shape, ToJson, extract};

// -----------------------------------------------------------------------------
// UTF-8 text

impl JsonShape for str {
    const SHAPE: Shape = Shape::TEXT;
}

impl ToJson for str {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        writer.string(self);
    }
}

impl JsonShape for String {
    const SHAPE: Shape = Shape::TEXT;
}

impl ToJson for String {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        writer.string(self);
    }
}

impl FromJson for String {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = extract(value, cx);
    }
}

// `Box<str>` writes through the generic `Box<T>` binding.
impl FromJson for Box<str> {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = extract::<String>(value, cx).into_boxed_str();
    }
}

impl JsonShape for Cow<'_, str> {
    const SHAPE: Shape = Shape::TEXT;
}

impl ToJson for Cow<'_, str> {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        writer.string(self);
    }
}

impl FromJson for Cow<'_, str> {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = Cow::Owned(extract(value, cx));
    }
}

// -----------------------------------------------------------------------------
// Encoded text

impl<E: Encoding> JsonShape for EncodedString<E> {
    const SHAPE: Shape = Shape::TEXT;
}

impl<E: Encoding> ToJson for EncodedString<E> {
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        match self.decode() {
            Ok(text) => writer.string(&text),
            Err(e) => {
                log::error!("string written as empty: {e}");
                writer.string("");
            }
        }
    }
}

impl<E: Encoding> FromJson for EncodedString<E> {
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        let Some(text) = value.as_str() else {
            cx.report(IssueKind::Mismatch {
                expected: "a string",
                found: value.kind(),
            });
            *self = Self::new();
            return;
        };
        match Self::encode(text) {
            Ok(encoded) => *self = encoded,
            Err(e) => {
                cx.report(IssueKind::Transcode(e));
                *self = Self::new();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jb_text::{AsciiString, Utf16String};

    use crate::{Category, FromJson, IssueKind, ToJson, from_json, from_json_with_issues, to_json};

    #[test]
    fn strings_are_values() {
        assert_eq!(String::SER_CATEGORY, Category::Value);
        assert_eq!(Utf16String::DE_CATEGORY, Category::Value);
        assert_eq!(<str as ToJson>::SER_CATEGORY, Category::Value);
    }

    #[test]
    fn wide_text_round_trips() {
        let wide = Utf16String::from("zoë 😀");
        let text = to_json(&wide);
        assert_eq!(text, "\"zoë 😀\"");
        assert_eq!(from_json::<Utf16String>(&text).unwrap(), wide);
    }

    #[test]
    fn transcode_failure_yields_empty() {
        let (value, issues) = from_json_with_issues::<AsciiString>(r#""crème""#).unwrap();
        assert!(value.is_empty());
        assert!(matches!(issues[0].kind, IssueKind::Transcode(_)));

        let broken = Utf16String::from_units(vec![0x61, 0xD800]);
        assert_eq!(to_json(&broken), "\"\"");
    }

    #[test]
    fn string_from_number_is_empty() {
        let (value, issues) = from_json_with_issues::<String>("12").unwrap();
        assert_eq!(value, "");
        assert_eq!(issues[0].to_string(), "$: expected a string, got a numeric type");
    }
}
