//! The DataError type for signage decoding failures.
//!
//! Decoding has exactly one error kind: a human-readable message naming the
//! required attribute or sub-structure that failed to decode, plus the byte
//! range of the offending element when one is known. The range points into
//! the source text the document was parsed from and exists purely for
//! diagnostics; callers that do not render source snippets can ignore it.

use std::ops::Range;

use thiserror::Error;

/// A type alias for `Result<T, DataError>`.
pub type Result<T, E = DataError> = std::result::Result<T, E>;

/// A structurally invalid piece of signage markup.
///
/// Any `DataError` invalidates the whole pipeline call that produced it:
/// documents are static input, so there is no retry and no per-element
/// recovery. Callers must discard the output of a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DataError {
    message: String,
    span: Option<Range<usize>>,
}

impl DataError {
    /// Create a new data error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    /// Attach the byte range of the offending element.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    /// The human-readable failure description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte range of the offending element in the source text, if known.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let err = DataError::new("missing required attribute `id` on <signal>");
        assert_eq!(
            err.to_string(),
            "missing required attribute `id` on <signal>"
        );
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_with_span() {
        let err = DataError::new("unsupported signal layout type `DIAMOND`").with_span(10..42);
        assert_eq!(err.span(), Some(10..42));
    }
}
