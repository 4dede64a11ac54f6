//! Entry points.
//!
//! Serialization writes through a [`StreamWriter`] (text) or a [`ValueWriter`]
//! (document). Deserialization parses first, which is the only step that can
//! fail as a whole; everything after it reports per-field [`Issue`]s.

use core::any::type_name;
use std::io;

use jb_json::{StreamWriter, Value, ValueWriter, WriteError, parse, parse_reader, parse_units};
use jb_text::{Encoding, Utf8, Utf16, transcode};
use serde_json::ser::Formatter;

use crate::{Context, Error, FromJson, Issue, ToJson, deserialize_new, serialize};

// -----------------------------------------------------------------------------
// Serialization

fn write_stream<W, F, T>(mut writer: StreamWriter<W, F>, value: &T) -> Result<W, WriteError>
where
    W: io::Write,
    F: Formatter,
    T: ToJson + ?Sized,
{
    serialize(&mut writer, value);
    writer.finish()
}

fn into_text<T: ?Sized>(result: Result<Vec<u8>, WriteError>) -> String {
    match result {
        Ok(bytes) => String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()),
        Err(e) => {
            log::error!("{} produced no JSON: {e}", type_name::<T>());
            String::new()
        }
    }
}

/// Serializes `value` to compact JSON text.
///
/// Bindings of the standard types always produce a complete document. A custom
/// hook that emits a malformed event sequence is logged and yields an empty
/// string; use [`to_json_as`] to receive that failure as an error instead.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use jb_bind::to_json;
///
/// assert_eq!(to_json(&vec![1, 2, 3]), "[1,2,3]");
///
/// let mut map = IndexMap::new();
/// map.insert("a".to_string(), 1);
/// map.insert("b".to_string(), 2);
/// assert_eq!(to_json(&map), r#"{"a":1,"b":2}"#);
/// ```
pub fn to_json<T: ToJson + ?Sized>(value: &T) -> String {
    into_text::<T>(write_stream(StreamWriter::new(Vec::new()), value))
}

/// Serializes `value` to JSON text indented with four spaces.
///
/// ```
/// use jb_bind::to_pretty_json;
///
/// assert_eq!(to_pretty_json(&[[1], [2]]), "[\n    [\n        1\n    ],\n    [\n        2\n    ]\n]");
/// ```
pub fn to_pretty_json<T: ToJson + ?Sized>(value: &T) -> String {
    into_text::<T>(write_stream(StreamWriter::pretty(Vec::new()), value))
}

/// Serializes `value` to compact JSON text in encoding `O`.
///
/// Encodings that cannot carry Unicode receive every non-ASCII character as a
/// `\uXXXX` escape.
///
/// ```
/// use jb_bind::to_json_as;
/// use jb_text::{Ascii, Utf16};
///
/// let wide = to_json_as::<Utf16, _>("é").unwrap();
/// assert_eq!(wide, "\"é\"".encode_utf16().collect::<Vec<_>>());
///
/// let narrow = to_json_as::<Ascii, _>("é").unwrap();
/// assert_eq!(narrow, br#""\u00e9""#);
/// ```
pub fn to_json_as<O, T>(value: &T) -> Result<Vec<O::Unit>, Error>
where
    O: Encoding,
    T: ToJson + ?Sized,
{
    let writer = StreamWriter::new(Vec::new()).escape_unicode(!O::SUPPORTS_UNICODE);
    let bytes = write_stream(writer, value)?;
    Ok(transcode::<Utf8, O>(&bytes)?)
}

/// Serializes `value` to indented JSON text in encoding `O`.
pub fn to_pretty_json_as<O, T>(value: &T) -> Result<Vec<O::Unit>, Error>
where
    O: Encoding,
    T: ToJson + ?Sized,
{
    let writer = StreamWriter::pretty(Vec::new()).escape_unicode(!O::SUPPORTS_UNICODE);
    let bytes = write_stream(writer, value)?;
    Ok(transcode::<Utf8, O>(&bytes)?)
}

/// Serializes `value` as compact UTF-8 JSON into `sink`.
pub fn to_writer<W, T>(sink: W, value: &T) -> Result<(), Error>
where
    W: io::Write,
    T: ToJson + ?Sized,
{
    write_stream(StreamWriter::new(sink), value)?;
    Ok(())
}

/// Serializes `value` as indented UTF-8 JSON into `sink`.
pub fn to_pretty_writer<W, T>(sink: W, value: &T) -> Result<(), Error>
where
    W: io::Write,
    T: ToJson + ?Sized,
{
    write_stream(StreamWriter::pretty(sink), value)?;
    Ok(())
}

/// Serializes `value` into an in-memory document.
pub fn to_value<T: ToJson + ?Sized>(value: &T) -> Result<Value, Error> {
    let mut writer = ValueWriter::new();
    serialize(&mut writer, value);
    Ok(writer.finish()?)
}

// -----------------------------------------------------------------------------
// Deserialization

/// Parses `text` and reads it into a default-constructed `T`.
///
/// Malformed text is an [`Error::InvalidInput`] and no value is produced. Once
/// parsing succeeds, fields of the wrong kind are logged and defaulted; use
/// [`from_json_with_issues`] to inspect them.
///
/// # Examples
///
/// ```
/// use jb_bind::{Error, from_json};
///
/// let items: Vec<i32> = from_json("[1,2,3]").unwrap();
/// assert_eq!(items, [1, 2, 3]);
///
/// assert!(matches!(from_json::<Vec<i32>>("[1,2,]"), Err(Error::InvalidInput(_))));
/// ```
pub fn from_json<T: FromJson + Default>(text: &str) -> Result<T, Error> {
    Ok(from_value(&parse(text)?))
}

/// Parses UTF-16 `units` and reads them into a default-constructed `T`.
pub fn from_json_utf16<T: FromJson + Default>(units: &[u16]) -> Result<T, Error> {
    from_json_as::<Utf16, T>(units)
}

/// Parses `units` in encoding `I` and reads them into a default-constructed `T`.
///
/// A code unit that does not decode is an [`Error::InvalidInput`].
pub fn from_json_as<I, T>(units: &[I::Unit]) -> Result<T, Error>
where
    I: Encoding,
    T: FromJson + Default,
{
    Ok(from_value(&parse_units::<I>(units)?))
}

/// Parses UTF-8 JSON from `reader` and reads it into a default-constructed `T`.
pub fn from_reader<R, T>(reader: R) -> Result<T, Error>
where
    R: io::Read,
    T: FromJson + Default,
{
    Ok(from_value(&parse_reader(reader)?))
}

/// Reads a parsed document into a default-constructed `T`.
#[inline]
pub fn from_value<T: FromJson + Default>(value: &Value) -> T {
    from_value_with_issues(value).0
}

/// Like [`from_json`], also returning every issue found along the way.
pub fn from_json_with_issues<T: FromJson + Default>(text: &str) -> Result<(T, Vec<Issue>), Error> {
    Ok(from_value_with_issues(&parse(text)?))
}

/// Like [`from_value`], also returning every issue found along the way.
pub fn from_value_with_issues<T: FromJson + Default>(value: &Value) -> (T, Vec<Issue>) {
    let mut cx = Context::new();
    let target = deserialize_new(value, &mut cx);
    if !cx.is_clean() {
        log::debug!(
            "{} read with {} issue(s)",
            type_name::<T>(),
            cx.issues().len()
        );
    }
    (target, cx.into_issues())
}

#[cfg(test)]
mod tests {
    use jb_json::{JsonKind, JsonWriter};
    use jb_text::{Ascii, Utf16};
    use serde_json::json;

    use super::{
        from_json, from_json_as, from_json_utf16, from_json_with_issues, from_reader, to_json,
        to_json_as, to_pretty_json, to_value, to_writer,
    };
    use crate::{Error, IssueKind, JsonShape, Shape, ToJson, json_object};

    #[derive(Debug, Default, PartialEq)]
    struct Sample {
        x: i32,
        y: String,
    }

    json_object!(Sample { x, y });

    struct Unbalanced;

    impl JsonShape for Unbalanced {
        const SHAPE: Shape = Shape::SCALAR;
    }

    impl ToJson for Unbalanced {
        fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
            writer.start_array();
        }
    }

    #[test]
    fn field_mismatch_keeps_siblings() {
        let (sample, issues) =
            from_json_with_issues::<Sample>(r#"{"x": true, "y": "kept"}"#).unwrap();
        assert_eq!(sample, Sample { x: 0, y: "kept".into() });
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "$.x");
        assert_eq!(
            issues[0].kind,
            IssueKind::Mismatch {
                expected: "a 32-bit integer",
                found: JsonKind::Bool
            }
        );
    }

    #[test]
    fn malformed_text_is_fatal() {
        for text in [r#"{"x": 1"#, r#"["open]"#, "[1,]", "", "nul"] {
            assert!(matches!(
                from_json::<Sample>(text),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn encodings() {
        let units: Vec<u16> = r#"{"x": 3, "y": "ñ"}"#.encode_utf16().collect();
        let sample: Sample = from_json_utf16(&units).unwrap();
        assert_eq!(sample.y, "ñ");

        let broken: [u16; 2] = [0x5B, 0xDC00];
        assert!(matches!(
            from_json_utf16::<Vec<u8>>(&broken),
            Err(Error::InvalidInput(_))
        ));

        let ascii = to_json_as::<Ascii, _>(&sample).unwrap();
        assert_eq!(ascii, br#"{"x":3,"y":"\u00f1"}"#);
        let back: Sample = from_json_as::<Ascii, _>(&ascii).unwrap();
        assert_eq!(back, sample);

        let wide = to_json_as::<Utf16, _>(&sample).unwrap();
        assert_eq!(String::from_utf16(&wide).unwrap(), r#"{"x":3,"y":"ñ"}"#);
    }

    #[test]
    fn writers_and_readers() {
        let mut out = Vec::new();
        to_writer(&mut out, &Sample { x: 1, y: "a".into() }).unwrap();
        assert_eq!(out, br#"{"x":1,"y":"a"}"#);

        let sample: Sample = from_reader(&out[..]).unwrap();
        assert_eq!(sample.x, 1);

        assert_eq!(to_value(&sample).unwrap(), json!({"x": 1, "y": "a"}));
    }

    #[test]
    fn pretty_output() {
        let sample = Sample { x: 1, y: "a".into() };
        assert_eq!(to_pretty_json(&sample), "{\n    \"x\": 1,\n    \"y\": \"a\"\n}");
    }

    #[test]
    fn broken_hooks() {
        assert_eq!(to_json(&Unbalanced), "");
        assert!(matches!(
            to_json_as::<Ascii, _>(&Unbalanced),
            Err(Error::Write(_))
        ));
        assert!(to_value(&Unbalanced).is_err());
    }
}
