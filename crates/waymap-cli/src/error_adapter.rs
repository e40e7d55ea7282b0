//! Error adapter for converting WaymapError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. A
//! [`WaymapError::Data`] carries the document source and, usually, the byte
//! range of the offending element, which becomes a labeled source snippet
//! in the report.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use waymap::WaymapError;

/// A reportable error that can be rendered by miette.
pub struct Reportable<'a>(pub &'a WaymapError);

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            WaymapError::Io(_) => "waymap::io",
            WaymapError::Document(_) => "waymap::document",
            WaymapError::Data { .. } => "waymap::data",
            WaymapError::Export(_) => "waymap::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            WaymapError::Data { .. } => Some(Box::new(
                "the document is corrupt; no records from this section are usable",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            WaymapError::Data { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let WaymapError::Data { err, .. } = &self.0 else {
            return None;
        };
        let span = err.span()?;
        let span = SourceSpan::new(span.start.into(), span.end - span.start);
        let label = LabeledSpan::new_primary_with_span(Some(err.message().to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}
