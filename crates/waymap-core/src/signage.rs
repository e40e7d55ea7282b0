//! Traffic control signage records.
//!
//! One record per recognized signage instance in a road-network document:
//! [`TrafficLight`], [`StopSign`], and [`YieldSign`]. Stop signs and yield
//! signs are structurally identical but kept as distinct types so that
//! downstream road-graph stages cannot accidentally interchange them.
//!
//! Stop-line identifiers are weak back-references (string keys) into the
//! stop-line section of the map document, which is parsed elsewhere. Nothing
//! here resolves or validates that the referenced identifier exists.

use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

use crate::geometry::{Point3, Polygon};

/// The physical lamp arrangement of a traffic light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignalLayout {
    /// Layout was declared but not further specified.
    ///
    /// This is a recognized value in its own right, reserved for an explicit
    /// `UNKNOWN` tag in the document. It is never a fallback for tags the
    /// classifier does not recognize.
    Unknown,
    /// Two lamps, arranged horizontally.
    Mix2Horizontal,
    /// Two lamps, arranged vertically.
    Mix2Vertical,
    /// Three lamps, arranged horizontally.
    Mix3Horizontal,
    /// Three lamps, arranged vertically.
    Mix3Vertical,
    /// A single lamp.
    Single,
}

impl SignalLayout {
    /// Returns the canonical name of the layout (e.g. `MIX_3_VERTICAL`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalLayout::Unknown => "UNKNOWN",
            SignalLayout::Mix2Horizontal => "MIX_2_HORIZONTAL",
            SignalLayout::Mix2Vertical => "MIX_2_VERTICAL",
            SignalLayout::Mix3Horizontal => "MIX_3_HORIZONTAL",
            SignalLayout::Mix3Vertical => "MIX_3_VERTICAL",
            SignalLayout::Single => "SINGLE",
        }
    }
}

impl fmt::Display for SignalLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The indicated movement of one sub-signal (one lamp head).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubSignalKind {
    /// Kind was declared but not further specified (explicit `UNKNOWN` tag).
    Unknown,
    /// A plain circular lamp.
    Circle,
    /// Left-turn arrow.
    ArrowLeft,
    /// Straight-ahead arrow.
    ArrowForward,
    /// Right-turn arrow.
    ArrowRight,
    /// Combined left-turn and straight-ahead arrow.
    ArrowLeftAndForward,
    /// Combined right-turn and straight-ahead arrow.
    ArrowRightAndForward,
    /// U-turn arrow.
    ArrowUTurn,
}

impl SubSignalKind {
    /// Returns the canonical name of the kind (e.g. `ARROW_U_TURN`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SubSignalKind::Unknown => "UNKNOWN",
            SubSignalKind::Circle => "CIRCLE",
            SubSignalKind::ArrowLeft => "ARROW_LEFT",
            SubSignalKind::ArrowForward => "ARROW_FORWARD",
            SubSignalKind::ArrowRight => "ARROW_RIGHT",
            SubSignalKind::ArrowLeftAndForward => "ARROW_LEFT_AND_FORWARD",
            SubSignalKind::ArrowRightAndForward => "ARROW_RIGHT_AND_FORWARD",
            SubSignalKind::ArrowUTurn => "ARROW_U_TURN",
        }
    }
}

impl fmt::Display for SubSignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One lamp head within a traffic light.
///
/// Owned exclusively by its parent [`TrafficLight`]; sub-signals are never
/// shared across lights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubSignal {
    id: String,
    kind: SubSignalKind,
    location: Point3,
}

impl SubSignal {
    /// Creates a new sub-signal record.
    pub fn new(id: impl Into<String>, kind: SubSignalKind, location: Point3) -> Self {
        Self {
            id: id.into(),
            kind,
            location,
        }
    }

    /// Returns the sub-signal identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the classified sub-signal kind.
    pub fn kind(&self) -> SubSignalKind {
        self.kind
    }

    /// Returns the 3D location of the lamp head.
    pub fn location(&self) -> Point3 {
        self.location
    }
}

/// A decoded traffic light instance.
///
/// A light always has an identifier and a layout. A light with zero
/// sub-signals is legal — not all lights declare their lamp heads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrafficLight {
    id: String,
    layout: SignalLayout,
    boundary: Polygon,
    sub_signals: Vec<SubSignal>,
    stop_line_ids: IndexSet<String>,
}

impl TrafficLight {
    /// Creates a new traffic light record.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier, unique within the signage section
    /// * `layout` - Classified lamp arrangement
    /// * `boundary` - Boundary polygon owned by this record
    /// * `sub_signals` - Lamp heads in document order
    /// * `stop_line_ids` - Deduplicated stop-line back-references
    pub fn new(
        id: impl Into<String>,
        layout: SignalLayout,
        boundary: Polygon,
        sub_signals: Vec<SubSignal>,
        stop_line_ids: IndexSet<String>,
    ) -> Self {
        Self {
            id: id.into(),
            layout,
            boundary,
            sub_signals,
            stop_line_ids,
        }
    }

    /// Returns the light identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the classified lamp arrangement.
    pub fn layout(&self) -> SignalLayout {
        self.layout
    }

    /// Returns the boundary polygon.
    pub fn boundary(&self) -> &Polygon {
        &self.boundary
    }

    /// Returns the lamp heads in document order.
    pub fn sub_signals(&self) -> &[SubSignal] {
        &self.sub_signals
    }

    /// Returns the stop-line identifiers referenced by this light.
    pub fn stop_line_ids(&self) -> &IndexSet<String> {
        &self.stop_line_ids
    }
}

/// A decoded stop sign instance.
///
/// Carries no geometry of its own, only stop-line back-references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopSign {
    id: String,
    stop_line_ids: IndexSet<String>,
}

impl StopSign {
    /// Creates a new stop sign record.
    pub fn new(id: impl Into<String>, stop_line_ids: IndexSet<String>) -> Self {
        Self {
            id: id.into(),
            stop_line_ids,
        }
    }

    /// Returns the sign identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the stop-line identifiers referenced by this sign.
    pub fn stop_line_ids(&self) -> &IndexSet<String> {
        &self.stop_line_ids
    }
}

/// A decoded yield sign instance.
///
/// Same shape as [`StopSign`], kept distinct so the two cannot be
/// interchanged downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldSign {
    id: String,
    stop_line_ids: IndexSet<String>,
}

impl YieldSign {
    /// Creates a new yield sign record.
    pub fn new(id: impl Into<String>, stop_line_ids: IndexSet<String>) -> Self {
        Self {
            id: id.into(),
            stop_line_ids,
        }
    }

    /// Returns the sign identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the stop-line identifiers referenced by this sign.
    pub fn stop_line_ids(&self) -> &IndexSet<String> {
        &self.stop_line_ids
    }
}
