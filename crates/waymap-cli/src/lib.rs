//! CLI logic for the Waymap adapter tool.
//!
//! This module contains the core CLI logic for the Waymap adapter tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use waymap::{SignageExtractor, WaymapError};

/// Run the Waymap CLI application
///
/// This function decodes the signage section of the input road-network
/// document and writes the resulting records as JSON to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `WaymapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document or signage decoding errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), WaymapError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing road-network document"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let pretty = app_config.output().pretty();

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Decode signage records
    let extractor = SignageExtractor::new(app_config);
    let set = extractor.extract(&source)?;
    let json = waymap::to_json(&set, pretty)?;

    // Write output file
    fs::write(&args.output, json)?;

    info!(
        output_file = args.output,
        records = set.len();
        "Signage records exported successfully"
    );

    Ok(())
}
