//! Classification of free-text type tags into closed enumerations.
//!
//! Map documents encode signal layouts and sub-signal kinds as arbitrary
//! strings. Both mappings here are closed tables: the input is folded to
//! uppercase (the only normalization applied — no trimming, no locale
//! handling) and matched exactly. An unmatched tag is an "unsupported type"
//! [`DataError`], never a silent default — `UNKNOWN` is itself a distinct
//! recognized value reserved for a literal `UNKNOWN` tag, and treating
//! unrecognized tags as unknown would mask schema drift in upstream map
//! data.

use waymap_core::signage::{SignalLayout, SubSignalKind};

use crate::error::{DataError, Result};

/// Classify a signal layout tag (e.g. `mix3Vertical`) into a [`SignalLayout`].
///
/// # Errors
///
/// Returns a [`DataError`] for any tag outside the closed table.
pub fn signal_layout(tag: &str) -> Result<SignalLayout> {
    match tag.to_uppercase().as_str() {
        "UNKNOWN" => Ok(SignalLayout::Unknown),
        "MIX2HORIZONTAL" => Ok(SignalLayout::Mix2Horizontal),
        "MIX2VERTICAL" => Ok(SignalLayout::Mix2Vertical),
        "MIX3HORIZONTAL" => Ok(SignalLayout::Mix3Horizontal),
        "MIX3VERTICAL" => Ok(SignalLayout::Mix3Vertical),
        "SINGLE" => Ok(SignalLayout::Single),
        _ => Err(DataError::new(format!(
            "unsupported signal layout type `{tag}`"
        ))),
    }
}

/// Classify a sub-signal tag (e.g. `arrowLeft`) into a [`SubSignalKind`].
///
/// # Errors
///
/// Returns a [`DataError`] for any tag outside the closed table.
pub fn sub_signal_kind(tag: &str) -> Result<SubSignalKind> {
    match tag.to_uppercase().as_str() {
        "UNKNOWN" => Ok(SubSignalKind::Unknown),
        "CIRCLE" => Ok(SubSignalKind::Circle),
        "ARROWLEFT" => Ok(SubSignalKind::ArrowLeft),
        "ARROWFORWARD" => Ok(SubSignalKind::ArrowForward),
        "ARROWRIGHT" => Ok(SubSignalKind::ArrowRight),
        "ARROWLEFTANDFORWARD" => Ok(SubSignalKind::ArrowLeftAndForward),
        "ARROWRIGHTANDFORWARD" => Ok(SubSignalKind::ArrowRightAndForward),
        "ARROWUTURN" => Ok(SubSignalKind::ArrowUTurn),
        _ => Err(DataError::new(format!("unsupported sub signal type `{tag}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_table_is_complete() {
        assert_eq!(signal_layout("UNKNOWN").unwrap(), SignalLayout::Unknown);
        assert_eq!(
            signal_layout("MIX2HORIZONTAL").unwrap(),
            SignalLayout::Mix2Horizontal
        );
        assert_eq!(
            signal_layout("MIX2VERTICAL").unwrap(),
            SignalLayout::Mix2Vertical
        );
        assert_eq!(
            signal_layout("MIX3HORIZONTAL").unwrap(),
            SignalLayout::Mix3Horizontal
        );
        assert_eq!(
            signal_layout("MIX3VERTICAL").unwrap(),
            SignalLayout::Mix3Vertical
        );
        assert_eq!(signal_layout("SINGLE").unwrap(), SignalLayout::Single);
    }

    #[test]
    fn test_layout_any_casing() {
        assert_eq!(
            signal_layout("mix2horizontal").unwrap(),
            SignalLayout::Mix2Horizontal
        );
        assert_eq!(
            signal_layout("Mix2Horizontal").unwrap(),
            SignalLayout::Mix2Horizontal
        );
        assert_eq!(signal_layout("single").unwrap(), SignalLayout::Single);
    }

    #[test]
    fn test_layout_rejects_unlisted_tags() {
        let err = signal_layout("DIAMOND").unwrap_err();
        assert_eq!(err.message(), "unsupported signal layout type `DIAMOND`");
        // A spelling that merely resembles a valid tag is still rejected.
        assert!(signal_layout("MIX_2_HORIZONTAL").is_err());
        assert!(signal_layout("").is_err());
        assert!(signal_layout(" single").is_err());
    }

    #[test]
    fn test_sub_signal_table_is_complete() {
        assert_eq!(sub_signal_kind("UNKNOWN").unwrap(), SubSignalKind::Unknown);
        assert_eq!(sub_signal_kind("CIRCLE").unwrap(), SubSignalKind::Circle);
        assert_eq!(
            sub_signal_kind("ARROWLEFT").unwrap(),
            SubSignalKind::ArrowLeft
        );
        assert_eq!(
            sub_signal_kind("ARROWFORWARD").unwrap(),
            SubSignalKind::ArrowForward
        );
        assert_eq!(
            sub_signal_kind("ARROWRIGHT").unwrap(),
            SubSignalKind::ArrowRight
        );
        assert_eq!(
            sub_signal_kind("ARROWLEFTANDFORWARD").unwrap(),
            SubSignalKind::ArrowLeftAndForward
        );
        assert_eq!(
            sub_signal_kind("ARROWRIGHTANDFORWARD").unwrap(),
            SubSignalKind::ArrowRightAndForward
        );
        assert_eq!(
            sub_signal_kind("ARROWUTURN").unwrap(),
            SubSignalKind::ArrowUTurn
        );
    }

    #[test]
    fn test_sub_signal_rejects_unlisted_tags() {
        let err = sub_signal_kind("pedestrian").unwrap_err();
        assert_eq!(err.message(), "unsupported sub signal type `pedestrian`");
        assert!(sub_signal_kind("ARROW_LEFT").is_err());
    }
}
