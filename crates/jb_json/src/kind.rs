use core::fmt;

use serde_json::Value;

// -----------------------------------------------------------------------------
// JsonKind

/// The discriminant of a parsed JSON [`Value`].
///
/// Numbers are a single kind here; the finer integer/real distinction is made by the
/// typed accessors of [`ValueExt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Returns the kind of `value`.
    #[inline]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// A phrase suitable for "expected X, got Y" messages.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "a boolean",
            Self::Number => "a numeric type",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.describe())
    }
}

// -----------------------------------------------------------------------------
// ValueExt

/// Strict typed accessors over a parsed [`Value`].
///
/// Each accessor answers only when the value is stored in a representation that
/// holds the requested type exactly:
///
/// - integers must be integral and inside the target range (`1.0` is not an integer);
/// - reals must have been written with a fraction or exponent (`1` is not a real).
///
/// # Examples
///
/// ```
/// use jb_json::{ValueExt, parse};
///
/// let value = parse("[7, -1, 2.5, 4294967296]").unwrap();
/// let items = value.as_array().unwrap();
///
/// assert_eq!(items[0].as_int(), Some(7));
/// assert_eq!(items[1].as_uint(), None);
/// assert_eq!(items[2].as_double(), Some(2.5));
/// assert_eq!(items[0].as_double(), None);
/// assert_eq!(items[3].as_uint(), None);
/// assert_eq!(items[3].as_int64(), Some(4294967296));
/// ```
pub trait ValueExt {
    fn kind(&self) -> JsonKind;

    /// A signed integer that fits 32 bits.
    fn as_int(&self) -> Option<i32>;

    /// An unsigned integer that fits 32 bits.
    fn as_uint(&self) -> Option<u32>;

    /// A signed integer that fits 64 bits.
    fn as_int64(&self) -> Option<i64>;

    /// An unsigned integer that fits 64 bits.
    fn as_uint64(&self) -> Option<u64>;

    /// A number stored as floating point.
    fn as_double(&self) -> Option<f64>;
}

impl ValueExt for Value {
    #[inline]
    fn kind(&self) -> JsonKind {
        JsonKind::of(self)
    }

    #[inline]
    fn as_int(&self) -> Option<i32> {
        self.as_i64().and_then(|v| i32::try_from(v).ok())
    }

    #[inline]
    fn as_uint(&self) -> Option<u32> {
        self.as_u64().and_then(|v| u32::try_from(v).ok())
    }

    #[inline]
    fn as_int64(&self) -> Option<i64> {
        self.as_i64()
    }

    #[inline]
    fn as_uint64(&self) -> Option<u64> {
        self.as_u64()
    }

    #[inline]
    fn as_double(&self) -> Option<f64> {
        match self {
            Value::Number(number) if number.is_f64() => number.as_f64(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{JsonKind, ValueExt};

    #[test]
    fn kinds_describe_themselves() {
        assert_eq!(json!(true).kind(), JsonKind::Bool);
        assert_eq!(json!({}).kind().to_string(), "an object");
        assert_eq!(json!(null).kind().describe(), "null");
        assert_eq!(json!(3).kind().describe(), "a numeric type");
    }

    #[test]
    fn integer_ranges_are_strict() {
        assert_eq!(json!(-5).as_int(), Some(-5));
        assert_eq!(json!(2147483648u64).as_int(), None);
        assert_eq!(json!(u64::MAX).as_int64(), None);
        assert_eq!(json!(u64::MAX).as_uint64(), Some(u64::MAX));
        assert_eq!(json!(true).as_int(), None);
    }
}
