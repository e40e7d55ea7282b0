//! Configuration types for signage extraction.
//!
//! This module provides configuration structures controlling which signage
//! kinds are extracted and how the result is exported. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Example
//!
//! ```
//! # use waymap::config::AppConfig;
//! // Use default configuration: everything extracted, pretty output.
//! let config = AppConfig::default();
//! assert!(config.extract().traffic_lights());
//! assert!(config.output().pretty());
//! ```

use serde::Deserialize;

/// Top-level application configuration combining extraction and output
/// settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Extraction configuration section.
    #[serde(default)]
    extract: ExtractConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(extract: ExtractConfig, output: OutputConfig) -> Self {
        Self { extract, output }
    }

    /// Returns the extraction configuration.
    pub fn extract(&self) -> &ExtractConfig {
        &self.extract
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Selects which signage kinds the extractor decodes.
///
/// All kinds are enabled by default. Disabling a kind skips its pipeline
/// entirely; it does not change how the remaining pipelines behave.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Decode `trafficLight` signals.
    #[serde(default = "enabled")]
    traffic_lights: bool,

    /// Decode `stopSign` signals.
    #[serde(default = "enabled")]
    stop_signs: bool,

    /// Decode `yieldSign` signals.
    #[serde(default = "enabled")]
    yield_signs: bool,
}

fn enabled() -> bool {
    true
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            traffic_lights: true,
            stop_signs: true,
            yield_signs: true,
        }
    }
}

impl ExtractConfig {
    /// Creates a new [`ExtractConfig`] with explicit kind selection.
    pub fn new(traffic_lights: bool, stop_signs: bool, yield_signs: bool) -> Self {
        Self {
            traffic_lights,
            stop_signs,
            yield_signs,
        }
    }

    /// Whether traffic lights are decoded.
    pub fn traffic_lights(&self) -> bool {
        self.traffic_lights
    }

    /// Whether stop signs are decoded.
    pub fn stop_signs(&self) -> bool {
        self.stop_signs
    }

    /// Whether yield signs are decoded.
    pub fn yield_signs(&self) -> bool {
        self.yield_signs
    }
}

/// Output options for exported record sets.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print exported JSON.
    #[serde(default = "enabled")]
    pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`].
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Whether exported JSON is pretty-printed.
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
