//! Decoding pipelines for road-network signage markup.
//!
//! This crate walks one container element of a road-network document and
//! produces strongly-typed records for the traffic control devices it
//! recognizes: traffic lights, stop signs, and yield signs. The public entry
//! points are [`parse_traffic_lights`], [`parse_stop_signs`], and
//! [`parse_yield_signs`] — one pipeline per signage kind, each a single
//! blocking pass that completes or fails atomically.
//!
//! # Pipeline Position
//!
//! ```text
//! Markup document (roxmltree)
//!     ↓ element        typed child views, attribute reads
//!     ↓ classify       free-text tags → closed enumerations
//!     ↓ geometry       <outline> / <position> sections → Polygon / Point3
//!     ↓ signage        scanner + record builders (these pipelines)
//! Signage records (waymap-core) — consumed by road-graph compilation
//! ```
//!
//! # Failure policy
//!
//! Every required-attribute read failure, unsupported type tag, and geometry
//! decoding failure aborts the current pipeline call with a [`DataError`].
//! A malformed required attribute on a recognized signage element indicates
//! a corrupt document, so the whole call fails rather than the one element
//! being skipped. Elements whose discriminator names a signage kind outside
//! this crate's scope are silently ignored.

pub mod classify;
pub mod element;
pub mod error;
pub mod geometry;

mod signage;


pub use error::{DataError, Result};
pub use signage::{parse_stop_signs, parse_traffic_lights, parse_yield_signs};
