use jb_json::{Value, ValueExt};

use super::{Context, IssueKind};

// -----------------------------------------------------------------------------
// Extract

/// The strict conversion from a JSON value to a scalar.
///
/// `extract` answers only when the value is stored in a form that holds the type
/// exactly. No coercion takes place: a boolean is not a number, a numeric string
/// is not a number, and `1` is not a float.
pub trait Extract: Sized {
    /// What the type expects, phrased for diagnostics.
    const EXPECTED: &'static str;

    fn extract(value: &Value) -> Option<Self>;
}

/// Extracts a `T` or reports a mismatch and returns `T::default()`.
///
/// # Examples
///
/// ```
/// use jb_bind::{Context, extract};
/// use serde_json::json;
///
/// let mut cx = Context::new();
/// assert_eq!(extract::<i64>(&json!(-4), &mut cx), -4);
/// assert_eq!(extract::<i64>(&json!("4"), &mut cx), 0);
/// assert_eq!(cx.issues().len(), 1);
/// ```
pub fn extract<T: Extract + Default>(value: &Value, cx: &mut Context) -> T {
    match T::extract(value) {
        Some(extracted) => extracted,
        None => {
            cx.report(IssueKind::Mismatch {
                expected: T::EXPECTED,
                found: value.kind(),
            });
            T::default()
        }
    }
}

impl Extract for bool {
    const EXPECTED: &'static str = "a boolean";

    #[inline]
    fn extract(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

macro_rules! impl_extract_signed {
    ($($ty:ty => $expected:literal),* $(,)?) => {$(
        impl Extract for $ty {
            const EXPECTED: &'static str = $expected;

            #[inline]
            fn extract(value: &Value) -> Option<Self> {
                value.as_int64().and_then(|v| <$ty>::try_from(v).ok())
            }
        }
    )*};
}

macro_rules! impl_extract_unsigned {
    ($($ty:ty => $expected:literal),* $(,)?) => {$(
        impl Extract for $ty {
            const EXPECTED: &'static str = $expected;

            #[inline]
            fn extract(value: &Value) -> Option<Self> {
                value.as_uint64().and_then(|v| <$ty>::try_from(v).ok())
            }
        }
    )*};
}

impl_extract_signed! {
    i8 => "an 8-bit integer",
    i16 => "a 16-bit integer",
    i32 => "a 32-bit integer",
    i64 => "a 64-bit integer",
    isize => "a pointer-sized integer",
}

impl_extract_unsigned! {
    u8 => "an unsigned 8-bit integer",
    u16 => "an unsigned 16-bit integer",
    u32 => "an unsigned 32-bit integer",
    u64 => "an unsigned 64-bit integer",
    usize => "an unsigned pointer-sized integer",
}

impl Extract for f64 {
    const EXPECTED: &'static str = "a floating-point number";

    #[inline]
    fn extract(value: &Value) -> Option<Self> {
        value.as_double()
    }
}

impl Extract for f32 {
    const EXPECTED: &'static str = "a floating-point number";

    #[inline]
    fn extract(value: &Value) -> Option<Self> {
        // Out of range doubles would round to infinity.
        value
            .as_double()
            .map(|v| v as f32)
            .filter(|v| v.is_finite())
    }
}

impl Extract for char {
    const EXPECTED: &'static str = "a single-character string";

    fn extract(value: &Value) -> Option<Self> {
        let mut chars = value.as_str()?.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

impl Extract for String {
    const EXPECTED: &'static str = "a string";

    #[inline]
    fn extract(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}
