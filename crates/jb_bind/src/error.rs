use jb_json::{ParseError, WriteError};
use jb_text::TranscodeError;
use thiserror::Error;

/// A failure that aborts a whole serialization or deserialization call.
///
/// Problems local to one field are not errors; they are reported as
/// [`Issue`](crate::Issue)s and the field is defaulted.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input text is not a JSON document.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ParseError),

    #[error(transparent)]
    Write(#[from] WriteError),

    /// The output could not be produced in the requested encoding.
    #[error("cannot encode output: {0}")]
    Encoding(#[from] TranscodeError),
}
