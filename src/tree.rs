//! Markup tree model shared with the host rendering pipeline.
//!
//! The external parser hands us an already-expanded tree of elements, text
//! runs, and embedded components. This module mirrors that wire shape
//! closely enough that trees round-trip through JSON unchanged: elements
//! carry a `tagName` and a property map, components carry an ordered
//! attribute list, and `className` is a token list rather than a single
//! string.
//!
//! The tree is owned and recursive. All mutation done by the rewrite pass
//! is index-based replacement or splicing on a parent's `children` vector.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Property key holding the class token list.
pub(crate) const CLASS_PROP: &str = "className";

/// A value in an element's property map.
///
/// Most properties are plain strings; `className` is a list of class
/// tokens, matching the parser's output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A single string value (`alt`, `src`, `data-*`, ...).
    Text(String),
    /// An ordered token list (`className`).
    List(Vec<String>),
}

/// Ordered property map of an element.
///
/// `BTreeMap` keeps serialization deterministic, which matters for fixture
/// comparisons and downstream caching of rendered output.
pub type Properties = BTreeMap<String, PropertyValue>;

/// One node in the document tree.
///
/// The `type` tag matches the parser's JSON. Component nodes accept the
/// host pipeline's flow/text spellings on input and normalize to
/// `component` on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// A rendered element: `img`, `p`, `figure`, `div`, anything else.
    #[serde(rename = "element")]
    Element(Element),
    /// A raw text run.
    #[serde(rename = "text")]
    Text(Text),
    /// An embedded component with an ordered attribute list.
    #[serde(
        rename = "component",
        alias = "mdxJsxFlowElement",
        alias = "mdxJsxTextElement"
    )]
    Component(Component),
}

/// A rendered element node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Lowercase tag name.
    #[serde(rename = "tagName")]
    pub tag: String,
    /// Property map. Absent in the wire format means empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,
    /// Ordered child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The literal text content.
    pub value: String,
}

/// An embedded component node.
///
/// Components store attributes as an ordered name/value list rather than a
/// map. Reads return the first occurrence of a name; writes overwrite the
/// first occurrence or append, so the last write wins without growing
/// duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Component name as written in the source markup.
    pub name: String,
    /// Ordered attribute list. Absent in the wire format means empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Ordered child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A single name/value attribute on a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Element {
    /// Create an element with no properties and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Get a string property. Token-list properties read as absent.
    pub fn property(&self, name: &str) -> Option<&str> {
        match self.properties.get(name) {
            Some(PropertyValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Set a string property, overwriting any existing value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties
            .insert(name.into(), PropertyValue::Text(value.into()));
    }

    /// Check whether the class token list contains `class`.
    ///
    /// A string-valued `className` is tolerated and split on whitespace,
    /// since hand-written fixtures sometimes use that form.
    pub fn has_class(&self, class: &str) -> bool {
        match self.properties.get(CLASS_PROP) {
            Some(PropertyValue::List(tokens)) => tokens.iter().any(|t| t == class),
            Some(PropertyValue::Text(value)) => value.split_whitespace().any(|t| t == class),
            None => false,
        }
    }

    /// Append a class token, creating the list if missing.
    pub fn push_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        let tokens = match self.properties.remove(CLASS_PROP) {
            Some(PropertyValue::List(mut tokens)) => {
                tokens.push(class);
                tokens
            }
            Some(PropertyValue::Text(value)) => {
                let mut tokens: Vec<String> =
                    value.split_whitespace().map(str::to_owned).collect();
                tokens.push(class);
                tokens
            }
            None => vec![class],
        };
        self.properties
            .insert(CLASS_PROP.to_owned(), PropertyValue::List(tokens));
    }
}

impl Component {
    /// Create a component with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value (first occurrence of the name).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute: overwrite the first occurrence, append otherwise.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }
}

impl Node {
    /// Shorthand for an element node.
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element(Element::new(tag))
    }

    /// Shorthand for a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// Borrow this node as an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Mutably borrow this node as an element.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Child sequence of this node, if it can carry children.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Element(el) => Some(&el.children),
            Node::Component(c) => Some(&c.children),
            Node::Text(_) => None,
        }
    }

    /// Mutable child sequence of this node, if it can carry children.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element(el) => Some(&mut el.children),
            Node::Component(c) => Some(&mut c.children),
            Node::Text(_) => None,
        }
    }

    /// True for text runs that are empty or whitespace only.
    ///
    /// Parsers emit these between block elements for source indentation;
    /// the rewrite pass treats them as structurally irrelevant inside
    /// image-only paragraphs.
    pub fn is_whitespace_text(&self) -> bool {
        match self {
            Node::Text(text) => text.value.trim().is_empty(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_roundtrip() {
        let mut el = Element::new("img");
        assert_eq!(el.property("alt"), None);

        el.set_property("alt", "a photo");
        assert_eq!(el.property("alt"), Some("a photo"));

        el.set_property("alt", "replaced");
        assert_eq!(el.property("alt"), Some("replaced"));
    }

    #[test]
    fn test_class_helpers() {
        let mut el = Element::new("div");
        assert!(!el.has_class("gallery-container"));

        el.push_class("gallery-container");
        assert!(el.has_class("gallery-container"));
        assert!(!el.has_class("gallery"));

        el.push_class("wide");
        assert!(el.has_class("wide"));
        assert!(el.has_class("gallery-container"));
    }

    #[test]
    fn test_string_class_name_tolerated() {
        let mut el = Element::new("div");
        el.properties.insert(
            CLASS_PROP.to_owned(),
            PropertyValue::Text("gallery-container wide".to_owned()),
        );

        assert!(el.has_class("gallery-container"));
        assert!(el.has_class("wide"));

        el.push_class("extra");
        assert!(el.has_class("extra"));
        assert!(el.has_class("wide"));
    }

    #[test]
    fn test_attribute_first_match_overwrite() {
        let mut c = Component::new("astro-image");
        c.attributes.push(Attribute {
            name: "alt".to_owned(),
            value: "first".to_owned(),
        });
        c.attributes.push(Attribute {
            name: "alt".to_owned(),
            value: "second".to_owned(),
        });

        assert_eq!(c.attribute("alt"), Some("first"));

        c.set_attribute("alt", "updated");
        assert_eq!(c.attribute("alt"), Some("updated"));
        assert_eq!(c.attributes.len(), 2);
    }

    #[test]
    fn test_whitespace_text() {
        assert!(Node::text("").is_whitespace_text());
        assert!(Node::text(" \n\t ").is_whitespace_text());
        assert!(!Node::text(" x ").is_whitespace_text());
        assert!(!Node::element("p").is_whitespace_text());
    }

    #[test]
    fn test_json_shape_matches_parser_output() {
        let json = r#"{
            "type": "element",
            "tagName": "p",
            "children": [
                {"type": "element", "tagName": "img",
                 "properties": {"src": "a.jpg", "alt": "a photo"}},
                {"type": "mdxJsxFlowElement", "name": "astro-image",
                 "attributes": [{"type": "mdxJsxAttribute", "name": "alt", "value": "two"}]}
            ]
        }"#;

        let node: Node = serde_json::from_str(json).expect("parser-shaped JSON");
        let el = node.as_element().expect("element");
        assert_eq!(el.tag, "p");
        assert_eq!(el.children.len(), 2);

        match &el.children[1] {
            Node::Component(c) => {
                assert_eq!(c.name, "astro-image");
                assert_eq!(c.attribute("alt"), Some("two"));
            }
            other => panic!("expected component, got {other:?}"),
        }

        // Normalized output round-trips through our own shape.
        let out = serde_json::to_string(&node).expect("serialize");
        let back: Node = serde_json::from_str(&out).expect("deserialize");
        assert_eq!(back, node);
    }

    #[test]
    fn test_missing_containers_deserialize_empty() {
        let node: Node =
            serde_json::from_str(r#"{"type": "element", "tagName": "img"}"#).expect("bare img");
        let el = node.as_element().expect("element");
        assert!(el.properties.is_empty());
        assert!(el.children.is_empty());

        let node: Node =
            serde_json::from_str(r#"{"type": "component", "name": "astro-image"}"#)
                .expect("bare component");
        match node {
            Node::Component(c) => {
                assert!(c.attributes.is_empty());
                assert_eq!(c.attribute("alt"), None);
            }
            other => panic!("expected component, got {other:?}"),
        }
    }
}
