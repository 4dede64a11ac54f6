use std::io;

use thiserror::Error;

/// The first failure a writer ran into.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteError {
    #[error("failed to write JSON output: {0}")]
    Io(#[from] io::Error),

    /// Events did not describe a well-formed value.
    #[error("invalid JSON event sequence: {0}")]
    Misuse(&'static str),

    #[error("document finished with {open} container(s) still open")]
    Incomplete { open: usize },

    #[error("no value was written")]
    Empty,
}
