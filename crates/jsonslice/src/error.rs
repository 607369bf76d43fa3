//! Error types.
//!
//! Every parse failure carries exactly one datum: the byte offset of the
//! first byte that could not be consumed. [`SyntaxError`] is the crate-
//! internal, fine-grained view (used so the scanners can be unit-tested
//! precisely); it collapses to the single-datum [`ParseError`] at the
//! public API boundary.
use core::fmt;

use thiserror::Error;

/// A JSON document could not be decoded.
///
/// Carries the byte offset of the first offending byte. Displays as
/// `invalid@<pos>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError(pub usize);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid@{}", self.0)
    }
}

impl core::error::Error for ParseError {}

/// The outcome of [`crate::get`] when the path or the document is
/// unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GetError {
    /// The input was malformed at or before the point the target was
    /// located.
    #[error("invalid@{0}")]
    Malformed(usize),
    /// No path component could be resolved. The offset is the last byte
    /// position visited during the unsuccessful search (typically the
    /// closing `}}`/`]` of the container that should have held the
    /// target).
    #[error("not found, search ended at byte {0}")]
    NotFound(usize),
}

/// Crate-internal, fine-grained malformation classification.
///
/// Every variant carries the byte offset at which the scanner gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum SyntaxError {
    #[error("invalid character at byte {0}")]
    InvalidCharacter(usize),
    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),
    #[error("invalid unicode escape at byte {0}")]
    InvalidUnicodeEscape(usize),
    #[error("invalid number at byte {0}")]
    InvalidNumber(usize),
    #[error("invalid utf-8 at byte {0}")]
    InvalidUtf8(usize),
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEof(usize),
}

impl SyntaxError {
    /// The byte offset this error points at.
    pub(crate) fn position(self) -> usize {
        match self {
            Self::InvalidCharacter(p)
            | Self::InvalidEscape(p)
            | Self::InvalidUnicodeEscape(p)
            | Self::InvalidNumber(p)
            | Self::InvalidUtf8(p)
            | Self::UnexpectedEof(p) => p,
        }
    }
}

impl From<SyntaxError> for ParseError {
    fn from(e: SyntaxError) -> Self {
        Self(e.position())
    }
}

impl From<SyntaxError> for GetError {
    fn from(e: SyntaxError) -> Self {
        Self::Malformed(e.position())
    }
}
