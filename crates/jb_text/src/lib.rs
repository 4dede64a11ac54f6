//! Text encodings used at the boundaries of the JSON binding layer.
//!
//! Parsed documents and writer events always carry UTF-8 `str`. Host text of another
//! width is converted on the way in and out through an [`Encoding`]:
//!
//! - [`Utf8`]: 8-bit units, the default for input and output.
//! - [`Utf16`]: 16-bit units, the "wide" host text.
//! - [`Ascii`]: 7-bit units. Cannot carry Unicode, so writers escape everything else.
//!
//! [`transcode`] converts between two encodings and stops at the first code unit
//! that fails, returning a [`TranscodeError`] instead of a partial result.
//!
//! [`EncodedString`] stores text in a specific encoding and is what host types such as
//! [`Utf16String`] use as a field type.

#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod encoding;
mod error;
mod string;

// -----------------------------------------------------------------------------
// Top-level exports

pub use encoding::{Ascii, Encoding, Utf8, Utf16, decode, encode, transcode};
pub use error::TranscodeError;
pub use string::{AsciiString, EncodedString, Utf16String};
