//! Waymap Core Types
//!
//! This crate provides the foundational types for the Waymap road-network
//! adapter. It includes:
//!
//! - **Geometry**: Opaque geometric primitives ([`geometry`] module)
//! - **Signage**: Traffic control records and their classification
//!   enumerations ([`signage`] module)
//!
//! Records are finished, immutable values: they are constructed in one pass
//! over a map document and handed to downstream map-compilation stages.
//! There is no update path; re-parsing a document produces a fresh
//! collection.

pub mod geometry;
pub mod signage;
