use core::ops::{Deref, DerefMut};

use jb_json::{JsonWriter, Value};
use serde_core::Serialize;
use serde_core::de::{Deserialize, DeserializeOwned};

use crate::{Context, FromJson, IssueKind, JsonShape, Shape, ToJson, serialize};

// -----------------------------------------------------------------------------
// Serde

/// Binds any `serde` type through its `Serialize` / `Deserialize` impls.
///
/// The wrapped value is converted to a [`Value`] and back, so it binds as a
/// single `Value`-category unit: a failed conversion is one issue for the
/// whole field, which keeps its previous contents.
///
/// # Examples
///
/// ```
/// use jb_bind::{Serde, from_json, json_object, to_json};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
/// struct Settings {
///     verbose: bool,
/// }
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Job {
///     name: String,
///     settings: Serde<Settings>,
/// }
///
/// json_object!(Job { name, settings });
///
/// let text = r#"{"name":"build","settings":{"verbose":true}}"#;
/// let job: Job = from_json(text).unwrap();
/// assert!(job.settings.verbose);
/// assert_eq!(to_json(&job), text);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Serde<T>(pub T);

impl<T> Serde<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Serde<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Serde<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Serde<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> JsonShape for Serde<T> {
    const SHAPE: Shape = Shape::SCALAR;
}

impl<T: Serialize> ToJson for Serde<T> {
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        match serde_json::to_value(&self.0) {
            Ok(value) => serialize(writer, &value),
            Err(e) => {
                log::error!(
                    "{} written as null: {e}",
                    core::any::type_name::<T>()
                );
                writer.null();
            }
        }
    }
}

impl<T: DeserializeOwned> FromJson for Serde<T> {
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        match <T as Deserialize<'_>>::deserialize(value) {
            Ok(parsed) => self.0 = parsed,
            Err(e) => cx.report(IssueKind::Serde(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::Serde;
    use crate::{IssueKind, from_json_with_issues};

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Pair {
        left: u8,
        right: u8,
    }

    #[test]
    fn failure_is_one_issue() {
        let (value, issues) =
            from_json_with_issues::<Serde<Pair>>(r#"{"left": 1, "right": "x"}"#).unwrap();
        assert_eq!(value.into_inner(), Pair::default());
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].kind, IssueKind::Serde(_)));
    }
}
