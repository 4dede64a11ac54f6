//! The deserialization half: validating a parsed value's shape and reading it
//! into a target.
//!
//! Failures below the document level never abort. A value of the wrong kind is
//! reported to the [`Context`] and the target falls back to its zero value, so
//! the remaining fields of the document are still read.

// -----------------------------------------------------------------------------
// Modules

mod context;
mod extract;
mod insert;

// -----------------------------------------------------------------------------
// Exports

pub use context::{Context, Issue, IssueKind};
pub use extract::{Extract, extract};
pub use insert::{Append, InsertionPolicy, Mapping, Prepend, Sequence};
pub use insert::{read_mapping, read_sequence};

use jb_json::{Value, ValueExt};

use crate::{Category, JsonShape};

// -----------------------------------------------------------------------------
// FromJson

/// A type that can be populated from a parsed JSON value.
///
/// `from_json` is only called once the value has the kind
/// [`DE_CATEGORY`](Self::DE_CATEGORY) requires; call [`deserialize`] rather
/// than `from_json` directly so that check takes place. Implementations read
/// into `self` in place, so fields without a counterpart in the document keep
/// their current values.
///
/// Wrapper types (those whose shape has an indirection) skip the check and
/// handle `null` themselves.
pub trait FromJson: JsonShape {
    const DE_CATEGORY: Category = Self::SHAPE.deserialize_category();

    fn from_json(&mut self, value: &Value, cx: &mut Context);
}

/// Reads `value` into `target`, after checking that its kind fits the target's
/// category.
///
/// On a mismatch the issue is reported and `target` is left untouched.
pub fn deserialize<T>(value: &Value, target: &mut T, cx: &mut Context)
where
    T: FromJson + ?Sized,
{
    if T::SHAPE.indirection.is_none() {
        let fits = match T::DE_CATEGORY {
            Category::Array => value.is_array(),
            Category::Object | Category::UserDefined => value.is_object(),
            Category::Value => true,
        };
        if !fits {
            if let Some(expected) = T::DE_CATEGORY.required_kind() {
                cx.report(IssueKind::Mismatch {
                    expected,
                    found: value.kind(),
                });
            }
            return;
        }
    }
    log::trace!(
        "deserializing {} as {}",
        core::any::type_name::<T>(),
        T::DE_CATEGORY
    );
    target.from_json(value, cx);
}

/// Reads `value` into a fresh default instance of `T`.
#[inline]
pub fn deserialize_new<T>(value: &Value, cx: &mut Context) -> T
where
    T: FromJson + Default,
{
    let mut target = T::default();
    deserialize(value, &mut target, cx);
    target
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Context, FromJson, IssueKind, deserialize};
    use crate::{Append, Category, JsonShape, JsonWriter, Shape, ToJson, read_sequence, to_json};

    /// A sequence that writes itself as an object but reads structurally.
    #[derive(Debug, Default)]
    struct Tags(Vec<String>);

    impl JsonShape for Tags {
        const SHAPE: Shape = Shape::SEQUENCE.with_hooks(true, false);
    }

    impl ToJson for Tags {
        fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
            writer.start_object();
            writer.key("tags");
            self.0.to_json(writer);
            writer.end_object();
        }
    }

    impl FromJson for Tags {
        fn from_json(&mut self, value: &jb_json::Value, cx: &mut Context) {
            read_sequence::<Append, _>(value, &mut self.0, cx);
        }
    }

    /// A sequence with hooks in both directions.
    #[derive(Debug, Default)]
    struct Hooked(Vec<u8>);

    impl JsonShape for Hooked {
        const SHAPE: Shape = Shape::SEQUENCE.with_hooks(true, true);
    }

    impl FromJson for Hooked {
        fn from_json(&mut self, value: &jb_json::Value, cx: &mut Context) {
            if let Some(items) = value.get("items") {
                deserialize(items, &mut self.0, cx);
            }
        }
    }

    #[test]
    fn asymmetric_hooks() {
        assert_eq!(Tags::SER_CATEGORY, Category::UserDefined);
        assert_eq!(Tags::DE_CATEGORY, Category::Array);

        let tags = Tags(vec!["a".into()]);
        assert_eq!(to_json(&tags), r#"{"tags":["a"]}"#);

        let mut cx = Context::new();
        let mut back = Tags::default();
        deserialize(&json!({"tags": ["a"]}), &mut back, &mut cx);
        assert!(back.0.is_empty());
        assert!(matches!(
            cx.issues()[0].kind,
            IssueKind::Mismatch { expected: "an array", .. }
        ));

        deserialize(&json!(["a", "b"]), &mut back, &mut cx);
        assert_eq!(back.0, ["a", "b"]);
    }

    #[test]
    fn user_defined_wins_over_sequence() {
        assert_eq!(Hooked::DE_CATEGORY, Category::UserDefined);

        let mut cx = Context::new();
        let mut hooked = Hooked::default();
        deserialize(&json!([1, 2]), &mut hooked, &mut cx);
        assert!(hooked.0.is_empty());
        assert!(matches!(
            cx.issues()[0].kind,
            IssueKind::Mismatch { expected: "an object", .. }
        ));

        deserialize(&json!({"items": [1, 2]}), &mut hooked, &mut cx);
        assert_eq!(hooked.0, [1, 2]);
        assert_eq!(cx.issues().len(), 1);
    }
}
