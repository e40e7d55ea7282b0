//! The three signage decoding pipelines.
//!
//! Each pipeline walks the direct `<signal>` children of one container
//! element, keeps the elements whose `type` discriminator names its signage
//! kind, and builds one record per kept element. The pipelines share the
//! discriminator scan ([`match_signal`]) and the stop-line reference
//! collector ([`collect_stop_line_ids`]); everything else differs per kind.
//!
//! A pipeline call is single-threaded and atomic: it either returns the
//! complete record collection for the container or the first [`DataError`]
//! encountered, with no partial output.

use indexmap::IndexSet;
use log::{debug, trace};
use roxmltree::Node;

use waymap_core::signage::{StopSign, SubSignal, TrafficLight, YieldSign};

use crate::classify;
use crate::element;
use crate::error::Result;
use crate::geometry;

/// Decode every `trafficLight` signal under `container`, in document order.
///
/// For each matched element this reads and classifies the required
/// `layoutType`, decodes the boundary outline, decodes the nested
/// `<subsignal>` elements (zero or more, order preserved), and collects
/// stop-line references.
///
/// # Errors
///
/// Returns a [`DataError`](crate::DataError) on the first structurally
/// invalid element; see the crate-level failure policy.
pub fn parse_traffic_lights(container: Node) -> Result<Vec<TrafficLight>> {
    let mut lights = Vec::new();

    for signal in element::children_named(container, "signal") {
        let Some(id) = match_signal(signal, "trafficLight")? else {
            continue;
        };

        let layout_tag = element::require_attr(signal, "layoutType")?;
        let layout =
            classify::signal_layout(layout_tag).map_err(|err| err.with_span(signal.range()))?;
        let boundary = geometry::decode_outline(signal)?;

        let mut sub_signals = Vec::new();
        for sub in element::children_named(signal, "subsignal") {
            let kind_tag = element::require_attr(sub, "type")?;
            let sub_id = element::require_attr(sub, "id")?;
            let kind =
                classify::sub_signal_kind(kind_tag).map_err(|err| err.with_span(sub.range()))?;
            let location = geometry::decode_point(sub)?;
            sub_signals.push(SubSignal::new(sub_id, kind, location));
        }

        let stop_line_ids = collect_stop_line_ids(signal)?;

        debug!(id, layout = layout.as_str(), sub_signals = sub_signals.len();
            "decoded traffic light");
        lights.push(TrafficLight::new(
            id,
            layout,
            boundary,
            sub_signals,
            stop_line_ids,
        ));
    }

    Ok(lights)
}

/// Decode every `stopSign` signal under `container`, in document order.
///
/// # Errors
///
/// Returns a [`DataError`](crate::DataError) on the first structurally
/// invalid element.
pub fn parse_stop_signs(container: Node) -> Result<Vec<StopSign>> {
    let mut signs = Vec::new();

    for signal in element::children_named(container, "signal") {
        let Some(id) = match_signal(signal, "stopSign")? else {
            continue;
        };
        let stop_line_ids = collect_stop_line_ids(signal)?;

        debug!(id, stop_lines = stop_line_ids.len(); "decoded stop sign");
        signs.push(StopSign::new(id, stop_line_ids));
    }

    Ok(signs)
}

/// Decode every `yieldSign` signal under `container`, in document order.
///
/// # Errors
///
/// Returns a [`DataError`](crate::DataError) on the first structurally
/// invalid element.
pub fn parse_yield_signs(container: Node) -> Result<Vec<YieldSign>> {
    let mut signs = Vec::new();

    for signal in element::children_named(container, "signal") {
        let Some(id) = match_signal(signal, "yieldSign")? else {
            continue;
        };
        let stop_line_ids = collect_stop_line_ids(signal)?;

        debug!(id, stop_lines = stop_line_ids.len(); "decoded yield sign");
        signs.push(YieldSign::new(id, stop_line_ids));
    }

    Ok(signs)
}

/// The shared scanner step: dispatch one `<signal>` element.
///
/// Reads the `type` discriminator (required on every signal element — a
/// signal without one cannot be dispatched and marks the document corrupt).
/// Returns `Ok(None)` for discriminators naming other signage kinds, which
/// are intentionally out of scope here, and `Ok(Some(id))` for a match,
/// requiring the `id` attribute only once the discriminator is recognized.
fn match_signal<'a>(signal: Node<'a, '_>, discriminator: &str) -> Result<Option<&'a str>> {
    let kind = element::require_attr(signal, "type")?;
    if kind != discriminator {
        trace!(kind; "skipping signage kind outside this pipeline");
        return Ok(None);
    }
    Ok(Some(element::require_attr(signal, "id")?))
}

/// Collect the stop-line references of one signage element.
///
/// Iterates the `<objectReference>` children of the optional `<stopline>`
/// section and gathers their `id` attributes into a deduplicated set. The
/// identifiers are weak keys into the stop-line section parsed elsewhere;
/// they are not resolved or validated here. A reference without an `id` is
/// the same class of corruption as any other missing required attribute and
/// fails the call.
fn collect_stop_line_ids(signal: Node) -> Result<IndexSet<String>> {
    let mut ids = IndexSet::new();

    if let Some(stopline) = element::first_child_named(signal, "stopline") {
        for reference in element::children_named(stopline, "objectReference") {
            let id = element::require_attr(reference, "id")?;
            ids.insert(id.to_string());
        }
    }

    Ok(ids)
}
