//! Error types for Waymap operations.
//!
//! This module provides the main error type [`WaymapError`] which wraps
//! the error conditions that can occur while turning a road-network
//! document into signage records.

use std::io;

use thiserror::Error;

use waymap_parser::DataError;

/// The main error type for Waymap operations.
///
/// # Diagnostic Variants
///
/// The `Data` variant carries the source text alongside the decoding error,
/// so callers can render the offending element when the error has a byte
/// span.
#[derive(Debug, Error)]
pub enum WaymapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid markup: {0}")]
    Document(#[from] roxmltree::Error),

    #[error("{err}")]
    Data { err: DataError, src: String },

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}

impl WaymapError {
    /// Create a new `Data` error with the associated source text.
    pub fn new_data_error(err: DataError, src: impl Into<String>) -> Self {
        Self::Data {
            err,
            src: src.into(),
        }
    }
}
