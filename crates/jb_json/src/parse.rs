use std::io;

use jb_text::{Encoding, TranscodeError};
use serde_json::Value;
use thiserror::Error;

// -----------------------------------------------------------------------------
// ParseError

/// A document that could not be turned into a [`Value`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("undecodable JSON text: {0}")]
    Encoding(#[from] TranscodeError),
}

// -----------------------------------------------------------------------------
// Parsing

/// Parses a complete UTF-8 document.
///
/// Trailing characters, trailing commas and documents nested 128 or more
/// levels deep are rejected.
#[inline]
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Parses a complete document from UTF-8 bytes.
#[inline]
pub fn parse_slice(bytes: &[u8]) -> Result<Value, ParseError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parses a complete document stored in encoding `E`.
///
/// The text is decoded first; a code unit that does not decode aborts parsing
/// with [`ParseError::Encoding`].
pub fn parse_units<E: Encoding>(units: &[E::Unit]) -> Result<Value, ParseError> {
    let text = E::decode(units)?;
    parse(&text)
}

/// Parses a complete UTF-8 document from a byte stream.
#[inline]
pub fn parse_reader<R: io::Read>(reader: R) -> Result<Value, ParseError> {
    Ok(serde_json::from_reader(io::BufReader::new(reader))?)
}

#[cfg(test)]
mod tests {
    use jb_text::Utf16;
    use serde_json::json;

    use super::{ParseError, parse, parse_reader, parse_units};

    #[test]
    fn keeps_member_order() {
        let value = parse(r#"{"b": 1, "a": 2}"#).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(parse("[1, 2,]"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse(r#"{"a": "open"#), Err(ParseError::Syntax(_))));
        assert!(matches!(parse("1 2"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn wide_documents() {
        let units: Vec<u16> = r#"{"k": "ü"}"#.encode_utf16().collect();
        assert_eq!(parse_units::<Utf16>(&units).unwrap(), json!({"k": "ü"}));

        let broken = [0x5B, 0xD800, 0x5D];
        assert!(matches!(
            parse_units::<Utf16>(&broken),
            Err(ParseError::Encoding(_))
        ));
    }

    #[test]
    fn reader_input() {
        let value = parse_reader(&b"[true, null]"[..]).unwrap();
        assert_eq!(value, json!([true, null]));
    }
}
