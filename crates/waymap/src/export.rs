//! Export of extracted record sets.
//!
//! Downstream map-compilation stages usually consume [`SignageSet`] values
//! directly; JSON export exists for inspection and for the CLI.

use crate::SignageSet;
use crate::error::WaymapError;

/// Serialize a signage set to JSON.
///
/// # Errors
///
/// Returns [`WaymapError::Export`] if serialization fails.
pub fn to_json(set: &SignageSet, pretty: bool) -> Result<String, WaymapError> {
    let json = if pretty {
        serde_json::to_string_pretty(set)?
    } else {
        serde_json::to_string(set)?
    };
    Ok(json)
}
