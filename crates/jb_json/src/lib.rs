//! The JSON document collaborator of the binding layer.
//!
//! This crate owns everything that touches JSON text directly, so that the binding
//! core only ever sees two narrow interfaces:
//!
//! - **Reading**: a parsed [`Value`], inspected through its [`JsonKind`] tag and
//!   the strict typed accessors of [`ValueExt`].
//! - **Writing**: the event interface [`JsonWriter`] (`start_object`, `key`,
//!   `int`, `string`, ...), implemented by [`StreamWriter`] for text output and by
//!   [`ValueWriter`] for building a [`Value`] in memory.
//!
//! Parsing is delegated to `serde_json`, built with `preserve_order` so that object
//! members iterate in document order.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod parse;
mod writer;

// -----------------------------------------------------------------------------
// Top-level exports

pub use kind::{JsonKind, ValueExt};
pub use parse::{ParseError, parse, parse_reader, parse_slice, parse_units};
pub use writer::{JsonWriter, MAX_DEPTH, StreamWriter, ValueWriter, WriteError};

pub use serde_json::{Map, Number, Value};
