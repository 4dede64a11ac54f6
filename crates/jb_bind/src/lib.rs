//! Compile-time JSON bindings for native data structures.
//!
//! A type becomes bindable by implementing [`JsonShape`] plus [`ToJson`] and/or
//! [`FromJson`]. Its [`Shape`] is classified at compile time into one of four
//! [`Category`]s, which decides how it is written and what a document must look
//! like to be read into it:
//!
//! | Category      | Written as                 | Read from        |
//! |---------------|----------------------------|------------------|
//! | `Array`       | elements in order          | arrays           |
//! | `Object`      | key/value members in order | objects          |
//! | `Value`       | a scalar or a string       | checked per type |
//! | `UserDefined` | the type's own hook        | objects          |
//!
//! `Option`, `Box`, `Rc`, `Arc` and `Weak` take the category of what they wrap
//! and add `null` handling. Types without an implementation are rejected by the
//! compiler.
//!
//! # Errors
//!
//! Reading is fatal only when the text is not JSON at all ([`Error`]). Every
//! problem below that, such as a string where a number was expected, is an
//! [`Issue`]: it is logged, the field falls back to its zero value, and the rest
//! of the document is still read.
//!
//! # Examples
//!
//! ```
//! use jb_bind::{from_json_with_issues, json_object, to_json};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Reading {
//!     sensor: String,
//!     values: Vec<f64>,
//!     x: i32,
//! }
//!
//! json_object!(Reading { sensor, values, x });
//!
//! let reading = Reading { sensor: "t1".into(), values: vec![0.5, 1.25], x: 3 };
//! assert_eq!(to_json(&reading), r#"{"sensor":"t1","values":[0.5,1.25],"x":3}"#);
//!
//! let (back, issues) =
//!     from_json_with_issues::<Reading>(r#"{"sensor":"t1","values":[0.5],"x":true}"#).unwrap();
//! assert_eq!(back.x, 0);
//! assert_eq!(back.values, [0.5]);
//! assert_eq!(issues[0].to_string(), "$.x: expected a 32-bit integer, got a boolean");
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod api;
mod error;
mod impls;
mod key;
mod macros;
mod serde_bridge;

pub mod de;
pub mod ser;
pub mod shape;

// -----------------------------------------------------------------------------
// Top-level exports

pub use api::{from_json, from_json_as, from_json_utf16, from_json_with_issues, from_reader};
pub use api::{from_value, from_value_with_issues};
pub use api::{to_json, to_json_as, to_pretty_json, to_pretty_json_as, to_pretty_writer};
pub use api::{to_value, to_writer};
pub use de::{Append, InsertionPolicy, Mapping, Prepend, Sequence, read_mapping, read_sequence};
pub use de::{Context, Issue, IssueKind};
pub use de::{Extract, FromJson, deserialize, deserialize_new, extract};
pub use error::Error;
pub use key::JsonKey;
pub use ser::{ToJson, serialize};
pub use serde_bridge::Serde;
pub use shape::{Category, Element, Indirection, JsonShape, Shape, classify};

pub use jb_json::JsonWriter;

#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::borrow::Cow;

    pub use jb_json::{Value, ValueExt};
}
