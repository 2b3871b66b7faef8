//! Image node recognition across the two markup dialects.
//!
//! The parser produces images in two shapes: a plain rendered `<img>`
//! element whose alt text lives in the property map, and an embedded image
//! component whose alt text lives in its ordered attribute list. The
//! rewrite rules never care which shape they are holding, so this module
//! is the single place that knows the difference: one predicate and a
//! get/set pair over the accessible text, selected by a discriminant match
//! on the node.
//!
//! Nodes missing their property or attribute container read as having
//! empty accessible text rather than failing.

use crate::tree::Node;

use super::RewriteConfig;

/// Tag name of the plain rendered image element.
pub(crate) const IMG_TAG: &str = "img";

/// True for both accepted image shapes.
pub fn is_image(node: &Node, config: &RewriteConfig) -> bool {
    match node {
        Node::Element(el) => el.tag == IMG_TAG,
        Node::Component(c) => c.name == config.component_name,
        Node::Text(_) => false,
    }
}

/// Accessible (alt) text of an image node, `""` when absent.
///
/// Non-image nodes also read as `""`; callers gate on [`is_image`].
pub fn alt_text(node: &Node) -> &str {
    match node {
        Node::Element(el) => el.property("alt").unwrap_or(""),
        Node::Component(c) => c.attribute("alt").unwrap_or(""),
        Node::Text(_) => "",
    }
}

/// Write the accessible text back to the shape-appropriate location,
/// creating it if missing. No-op on text nodes.
pub fn set_alt_text(node: &mut Node, value: impl Into<String>) {
    match node {
        Node::Element(el) => el.set_property("alt", value),
        Node::Component(c) => c.set_attribute("alt", value),
        Node::Text(_) => {}
    }
}
