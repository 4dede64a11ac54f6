use core::fmt::{self, Write as _};

use jb_json::JsonKind;
use jb_text::TranscodeError;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Issue

/// What went wrong with one field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IssueKind {
    #[error("expected {expected}, got {found}")]
    Mismatch {
        expected: &'static str,
        found: JsonKind,
    },

    #[error("expected {expected} elements, got {found}")]
    Length { expected: usize, found: usize },

    #[error("missing required member `{name}`")]
    MissingField { name: &'static str },

    #[error("`{name}` is not a variant of {ty}")]
    UnknownVariant { ty: &'static str, name: String },

    #[error("{value} is not a discriminant of {ty}")]
    UnknownDiscriminant { ty: &'static str, value: i64 },

    #[error("object key `{key}` is not {expected}")]
    InvalidKey { key: String, expected: &'static str },

    #[error("{0}")]
    Transcode(#[from] TranscodeError),

    #[error("{0}")]
    Serde(String),
}

/// A recoverable problem found while reading a document.
///
/// The affected field was left at its default; its siblings were still read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{path}: {kind}")]
pub struct Issue {
    /// Location in the document, such as `$.items[2].x`.
    pub path: String,
    pub kind: IssueKind,
}

// -----------------------------------------------------------------------------
// Context

#[derive(Debug, Clone)]
enum Segment {
    Key(String),
    Index(usize),
}

/// State threaded through one deserialization call.
///
/// Tracks the current position in the document and collects every [`Issue`]
/// reported along the way. Each report is also logged at error level.
#[derive(Debug, Default)]
pub struct Context {
    path: Vec<Segment>,
    issues: Vec<Issue>,
}

impl Context {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue at the current position.
    pub fn report(&mut self, kind: IssueKind) {
        let issue = Issue {
            path: self.path(),
            kind,
        };
        log::error!("{issue}");
        self.issues.push(issue);
    }

    /// Runs `f` positioned at object member `key`.
    pub fn at_key<R>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(Segment::Key(key.to_owned()));
        let result = f(self);
        self.path.pop();
        result
    }

    /// Runs `f` positioned at array element `index`.
    pub fn at_index<R>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(Segment::Index(index));
        let result = f(self);
        self.path.pop();
        result
    }

    /// Renders the current position.
    pub fn path(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            // Writing into a `String` cannot fail.
            let _ = match segment {
                Segment::Index(index) => write!(out, "[{index}]"),
                Segment::Key(key) if is_plain(key) => write!(out, ".{key}"),
                Segment::Key(key) => write!(out, "[{key:?}]"),
            };
        }
        out
    }

    #[inline]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[inline]
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Whether nothing has been reported.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

fn is_plain(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_')
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(f, "{issue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jb_json::JsonKind;

    use super::{Context, IssueKind};

    #[test]
    fn paths_follow_nesting() {
        let mut cx = Context::new();
        cx.at_key("items", |cx| {
            cx.at_index(2, |cx| {
                cx.at_key("x", |cx| {
                    cx.report(IssueKind::Mismatch {
                        expected: "a 32-bit integer",
                        found: JsonKind::Bool,
                    });
                });
            });
        });
        cx.at_key("odd key", |cx| cx.report(IssueKind::MissingField { name: "y" }));

        let issues = cx.issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].to_string(),
            "$.items[2].x: expected a 32-bit integer, got a boolean"
        );
        assert_eq!(issues[1].path, r#"$["odd key"]"#);
        assert_eq!(cx.path(), "$");
    }
}
