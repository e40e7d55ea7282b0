//! Decoding of the geometry sections nested inside signage elements.
//!
//! Traffic lights carry a boundary `<outline>` section whose `<cornerGlobal>`
//! children each hold `x`/`y`/`z` coordinate attributes; sub-signals carry a
//! single `<position>` element with the same attributes. The pipelines store
//! the decoded values opaquely — no geometric validation happens here or
//! anywhere else in this crate.

use waymap_core::geometry::{Point3, Polygon};

use roxmltree::Node;

use crate::element;
use crate::error::{DataError, Result};

/// Decode the boundary polygon of a signage element.
///
/// # Errors
///
/// Returns a [`DataError`] if the `<outline>` section is absent or any
/// corner coordinate is missing or unparsable. An outline with zero corners
/// decodes to an empty polygon.
pub fn decode_outline(node: Node) -> Result<Polygon> {
    let outline = element::first_child_named(node, "outline").ok_or_else(|| {
        DataError::new(format!(
            "missing <outline> section on <{element}>",
            element = node.tag_name().name()
        ))
        .with_span(node.range())
    })?;

    let mut points = Vec::new();
    for corner in element::children_named(outline, "cornerGlobal") {
        points.push(decode_coordinates(corner)?);
    }
    Ok(Polygon::new(points))
}

/// Decode the 3D location of a signage element.
///
/// # Errors
///
/// Returns a [`DataError`] if the `<position>` element is absent or any
/// coordinate is missing or unparsable.
pub fn decode_point(node: Node) -> Result<Point3> {
    let position = element::first_child_named(node, "position").ok_or_else(|| {
        DataError::new(format!(
            "missing <position> element on <{element}>",
            element = node.tag_name().name()
        ))
        .with_span(node.range())
    })?;
    decode_coordinates(position)
}

fn decode_coordinates(node: Node) -> Result<Point3> {
    let x = require_f64(node, "x")?;
    let y = require_f64(node, "y")?;
    let z = require_f64(node, "z")?;
    Ok(Point3::new(x, y, z))
}

fn require_f64(node: Node, name: &str) -> Result<f64> {
    let raw = element::require_attr(node, name)?;
    raw.parse().map_err(|_| {
        DataError::new(format!(
            "invalid numeric value `{raw}` for attribute `{name}` on <{element}>",
            element = node.tag_name().name()
        ))
        .with_span(node.range())
    })
}
