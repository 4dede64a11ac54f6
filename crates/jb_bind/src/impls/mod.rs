//! Bindings for standard library and ecosystem types.
//!
//! - scalars: `bool`, integers, floats
//! - text: `String`, `str`, `Box<str>`, `Cow<str>`, [`EncodedString`](jb_text::EncodedString)
//! - raw documents: [`Value`](jb_json::Value)
//! - sequences: `Vec`, `VecDeque`, `LinkedList`, `BTreeSet`, `HashSet`, `IndexSet`
//! - mappings: `BTreeMap`, `HashMap`, `IndexMap`
//! - fixed: `[T; N]`, tuples of up to 8 elements
//! - wrappers: `Option`, `Box`, `Rc`, `Arc`, `Weak`, `RefCell`, `&T`
//!
//! With the `hashbrown` feature, `hashbrown::HashMap` and `hashbrown::HashSet`
//! bind like their std counterparts.

mod fixed;
mod map;
mod ptr;
mod scalar;
mod seq;
mod text;
mod value;
