use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// A code unit sequence that could not be converted between two encodings.
///
/// `offset` is measured in code units of the side that failed: the input for
/// [`Invalid`](Self::Invalid), the decoded text (in bytes) for
/// [`Unrepresentable`](Self::Unrepresentable).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TranscodeError {
    #[error("invalid {encoding} code unit at offset {offset}")]
    Invalid {
        encoding: &'static str,
        offset: usize,
    },

    #[error("character {ch:?} at offset {offset} cannot be represented in {encoding}")]
    Unrepresentable {
        encoding: &'static str,
        ch: char,
        offset: usize,
    },
}

impl TranscodeError {
    /// Name of the encoding that rejected the text.
    #[inline]
    pub const fn encoding(&self) -> &'static str {
        match self {
            Self::Invalid { encoding, .. } | Self::Unrepresentable { encoding, .. } => encoding,
        }
    }
}
