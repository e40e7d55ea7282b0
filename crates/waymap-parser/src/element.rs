//! Typed child views and attribute reads over markup elements.
//!
//! Road-network markup is an implicit tree whose section presence and
//! cardinality are not statically known. These helpers re-express the
//! sibling walk as lazy iteration over "children named X", so each pipeline
//! reads as a declarative filter+map instead of manual cursor advancement.
//!
//! Element and attribute names are matched exactly (case-sensitive); only
//! attribute *values* are ever case-folded, and that happens in
//! [`classify`](crate::classify), not here.

use roxmltree::Node;

use crate::error::{DataError, Result};

/// Lazily iterate the direct child elements of `node` with the given tag name.
pub fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.has_tag_name(name))
}

/// Find the first direct child element of `node` with the given tag name.
pub fn first_child_named<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> Option<Node<'a, 'input>> {
    children_named(node, name).next()
}

/// Read an optional attribute value.
pub fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Read a required attribute value.
///
/// # Errors
///
/// Returns a [`DataError`] naming the element and attribute if the attribute
/// is absent. A missing required attribute is always a hard failure for the
/// pipeline call, never a per-element skip.
pub fn require_attr<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    attr(node, name).ok_or_else(|| {
        DataError::new(format!(
            "missing required attribute `{name}` on <{element}>",
            element = node.tag_name().name()
        ))
        .with_span(node.range())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_children_named_filters_by_tag() {
        let doc = Document::parse(
            r#"<root><signal id="a"/><other/><signal id="b"/>text<signal id="c"/></root>"#,
        )
        .unwrap();
        let ids: Vec<_> = children_named(doc.root_element(), "signal")
            .map(|n| n.attribute("id").unwrap())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_children_named_is_not_recursive() {
        let doc =
            Document::parse(r#"<root><wrapper><signal id="nested"/></wrapper></root>"#).unwrap();
        assert_eq!(children_named(doc.root_element(), "signal").count(), 0);
    }

    #[test]
    fn test_require_attr_present() {
        let doc = Document::parse(r#"<signal id="tl_1"/>"#).unwrap();
        assert_eq!(require_attr(doc.root_element(), "id").unwrap(), "tl_1");
    }

    #[test]
    fn test_require_attr_missing_names_element_and_attribute() {
        let doc = Document::parse(r#"<signal type="stopSign"/>"#).unwrap();
        let err = require_attr(doc.root_element(), "id").unwrap_err();
        assert_eq!(
            err.message(),
            "missing required attribute `id` on <signal>"
        );
        assert!(err.span().is_some());
    }
}
