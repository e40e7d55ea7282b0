//! Waymap - a road-network markup adapter for map compilation.
//!
//! Decodes hierarchical road-network markup into strongly-typed records
//! describing traffic control signage: traffic lights, stop signs, and yield
//! signs. The records are validated and normalized; building the navigable
//! road graph from them is the consumer's job.

pub mod config;

mod error;
mod export;

pub use waymap_core::{geometry, signage};

pub use error::WaymapError;
pub use export::to_json;

use log::{debug, info, trace};
use roxmltree::{Document, Node};
use serde::Serialize;

use waymap_core::signage::{StopSign, TrafficLight, YieldSign};
use waymap_parser::{element, parse_stop_signs, parse_traffic_lights, parse_yield_signs};

use config::AppConfig;

/// The complete set of signage records extracted from one document.
///
/// Three independent ordered sequences, one per pipeline. A set is only ever
/// returned whole: if any pipeline fails, the entire extraction fails and no
/// partial set escapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignageSet {
    traffic_lights: Vec<TrafficLight>,
    stop_signs: Vec<StopSign>,
    yield_signs: Vec<YieldSign>,
}

impl SignageSet {
    /// Returns the decoded traffic lights in document order.
    pub fn traffic_lights(&self) -> &[TrafficLight] {
        &self.traffic_lights
    }

    /// Returns the decoded stop signs in document order.
    pub fn stop_signs(&self) -> &[StopSign] {
        &self.stop_signs
    }

    /// Returns the decoded yield signs in document order.
    pub fn yield_signs(&self) -> &[YieldSign] {
        &self.yield_signs
    }

    /// Returns the total number of records across all three kinds.
    pub fn len(&self) -> usize {
        self.traffic_lights.len() + self.stop_signs.len() + self.yield_signs.len()
    }

    /// Checks whether the set contains no records at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extractor for signage records in road-network documents.
///
/// # Examples
///
/// ```
/// use waymap::{SignageExtractor, config::AppConfig};
///
/// let source = r#"
/// <roadNetwork>
///   <signals>
///     <signal type="stopSign" id="stop_1"/>
///   </signals>
/// </roadNetwork>"#;
///
/// let extractor = SignageExtractor::new(AppConfig::default());
/// let set = extractor.extract(source).expect("well-formed document");
/// assert_eq!(set.stop_signs().len(), 1);
/// ```
#[derive(Default)]
pub struct SignageExtractor {
    config: AppConfig,
}

impl SignageExtractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Extract all enabled signage kinds from a road-network document.
    ///
    /// Every element with at least one direct `<signal>` child counts as a
    /// signage container; the enabled pipelines run over each container in
    /// document order and their results are concatenated.
    ///
    /// # Errors
    ///
    /// Returns `WaymapError` for malformed XML ([`WaymapError::Document`])
    /// or for any structurally invalid signage element
    /// ([`WaymapError::Data`]). Extraction is atomic: a failure discards all
    /// records decoded so far.
    pub fn extract(&self, source: &str) -> Result<SignageSet, WaymapError> {
        info!("Decoding road-network document");

        let doc = Document::parse(source)?;
        let extract = self.config.extract();
        let mut set = SignageSet::default();

        for container in doc
            .root_element()
            .descendants()
            .filter(is_signage_container)
        {
            trace!(container = container.tag_name().name(); "Scanning signage container");

            if extract.traffic_lights() {
                let lights = parse_traffic_lights(container)
                    .map_err(|err| WaymapError::new_data_error(err, source))?;
                set.traffic_lights.extend(lights);
            }
            if extract.stop_signs() {
                let signs = parse_stop_signs(container)
                    .map_err(|err| WaymapError::new_data_error(err, source))?;
                set.stop_signs.extend(signs);
            }
            if extract.yield_signs() {
                let signs = parse_yield_signs(container)
                    .map_err(|err| WaymapError::new_data_error(err, source))?;
                set.yield_signs.extend(signs);
            }
        }

        debug!(
            traffic_lights = set.traffic_lights.len(),
            stop_signs = set.stop_signs.len(),
            yield_signs = set.yield_signs.len();
            "Document decoded");

        Ok(set)
    }
}

/// A container is any element with at least one direct `<signal>` child.
fn is_signage_container(node: &Node) -> bool {
    node.is_element() && element::children_named(*node, "signal").next().is_some()
}
