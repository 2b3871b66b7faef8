//! # refigure
//!
//! Figure, caption, and gallery restructuring for parsed markup trees.
//!
//! The host content pipeline parses markdown into a tree of elements,
//! text runs, and embedded components, and renders that tree to HTML.
//! Between those two steps, `refigure` runs one in-place pass that turns
//! image-bearing constructs into the semantic structure the site
//! stylesheet expects:
//!
//! - an image paragraph becomes a `<figure>` with a `<figcaption>` built
//!   from the image's alt text
//! - image paragraphs inside a gallery container expand to one
//!   `<figure class="gallery-item">` per image
//! - a `landscape` / `portrait` keyword at the front of alt text becomes
//!   a `data-orientation` attribute on the wrapping element, and is
//!   stripped from the visible caption
//! - a leading `_` in alt text suppresses the caption
//!
//! Parsing markup and rendering the mutated tree stay with the host
//! pipeline; this crate only rewrites the tree it is handed. The pass is
//! idempotent, so re-running it over already-processed output is safe.
//!
//! ## Quick Start
//!
//! ```
//! use refigure::{rewrite, Element, Node, RewriteConfig};
//!
//! let mut image = Element::new("img");
//! image.set_property("src", "lake.jpg");
//! image.set_property("alt", "lake at dawn");
//!
//! let mut paragraph = Element::new("p");
//! paragraph.children.push(Node::Element(image));
//!
//! let mut document = Element::new("div");
//! document.children.push(Node::Element(paragraph));
//! let mut root = Node::Element(document);
//!
//! rewrite(&mut root, &RewriteConfig::default());
//!
//! let figure = root.children().unwrap()[0].as_element().unwrap();
//! assert_eq!(figure.tag, "figure");
//! assert_eq!(figure.children.len(), 2); // image + figcaption
//! ```
//!
//! ## Trees over the wire
//!
//! [`Node`] serializes to the same JSON shape the external parser emits,
//! so trees can cross a process boundary on either side of the pass:
//!
//! ```
//! use refigure::Node;
//!
//! let tree: Node = serde_json::from_str(
//!     r#"{"type": "element", "tagName": "img",
//!         "properties": {"src": "a.jpg", "alt": "a photo"}}"#,
//! ).unwrap();
//! assert_eq!(tree.as_element().unwrap().tag, "img");
//! ```

pub mod error;
pub mod rewrite;
pub mod tree;

pub use error::{Error, Result};
pub use rewrite::{
    rewrite, Orientation, RewriteConfig, DATA_ORIENTATION, GALLERY_ITEM_CLASS,
    IMAGE_WRAPPER_CLASS,
};
pub use tree::{Attribute, Component, Element, Node, Properties, PropertyValue, Text};
