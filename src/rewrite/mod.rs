//! The figure/gallery rewrite pass.
//!
//! One synchronous, in-place pass over a parsed document tree, run once
//! per rendered document. The pass finds image-bearing constructs and
//! restructures the markup around them:
//!
//! 1. **Standalone image** — an image sitting directly in a container,
//!    carrying an orientation keyword, is wrapped in a
//!    `<div class="image-wrapper" data-orientation=…>`. Downstream
//!    rendering may strip data attributes from the image element itself,
//!    so the flag is promoted onto the wrapper.
//! 2. **Image paragraph** — a `<p>` whose content is only images and
//!    whitespace is regrouped: inside a gallery container, one
//!    `<figure class="gallery-item">` per image replaces the paragraph;
//!    outside, a single image promotes the paragraph to a captioned
//!    `<figure>`, and two or more images are unwrapped to bare siblings.
//!    A paragraph with any other content is left completely untouched.
//! 3. Everything else passes through, with the pass descending into its
//!    children.
//!
//! Child sequences are walked with an explicit cursor: after a
//! replacement, the cursor steps over the nodes the pass just created.
//! Figures and image wrappers are never entered at all, in the same pass
//! or a later one, which is what makes the pass idempotent — running it
//! twice produces the same tree as running it once.

mod caption;
mod classify;
mod figure;
mod orientation;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tree::{Element, Node};

pub use orientation::{detect, strip, Orientation};

/// Class token placed on the `div` wrapping an orientation-tagged
/// standalone image. Part of the contract with the site stylesheet.
pub const IMAGE_WRAPPER_CLASS: &str = "image-wrapper";

/// Class token placed on each figure generated inside a gallery container.
pub const GALLERY_ITEM_CLASS: &str = "gallery-item";

/// Property carrying the detected orientation keyword on wrappers and
/// figures.
pub const DATA_ORIENTATION: &str = "data-orientation";

pub(crate) const FIGURE_TAG: &str = "figure";
pub(crate) const FIGCAPTION_TAG: &str = "figcaption";
pub(crate) const PARAGRAPH_TAG: &str = "p";
pub(crate) const WRAPPER_TAG: &str = "div";

/// Markup constants the pass matches and emits.
///
/// `Default` reproduces the host pipeline's conventions; hosts with
/// different markup vocabularies override the fields and should call
/// [`RewriteConfig::validate`] once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Class marking a container whose image paragraphs become galleries.
    pub gallery_class: String,
    /// Leading alt-text marker that suppresses caption rendering.
    pub hidden_prefix: String,
    /// Orientation keywords recognized at the front of alt text, scanned
    /// in order.
    pub orientations: Vec<Orientation>,
    /// Name of the embedded-image component shape.
    pub component_name: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            gallery_class: "gallery-container".to_owned(),
            hidden_prefix: "_".to_owned(),
            orientations: vec![Orientation::Landscape, Orientation::Portrait],
            component_name: "astro-image".to_owned(),
        }
    }
}

impl RewriteConfig {
    /// Reject configurations that can never match anything.
    ///
    /// The pass itself never fails: an invalid marker class simply never
    /// matches a class token. Validating up front turns that silence into
    /// a startup error for the host pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.gallery_class.is_empty()
            || self.gallery_class.chars().any(char::is_whitespace)
        {
            return Err(Error::InvalidGalleryClass(self.gallery_class.clone()));
        }
        if self.hidden_prefix.is_empty() {
            return Err(Error::EmptyHiddenPrefix);
        }
        if self.component_name.is_empty() {
            return Err(Error::EmptyComponentName);
        }
        for (i, o) in self.orientations.iter().enumerate() {
            if self.orientations[..i].contains(o) {
                return Err(Error::DuplicateOrientation(*o));
            }
        }
        Ok(())
    }
}

/// Rewrite `root`'s subtree in place.
///
/// The root node itself is never replaced; it has no parent to splice
/// into. The tree stays owned by the caller and no value is returned.
pub fn rewrite(root: &mut Node, config: &RewriteConfig) {
    visit(root, config);
}

/// Descend into one container node, rewriting its child sequence.
fn visit(node: &mut Node, config: &RewriteConfig) {
    let in_gallery = node
        .as_element()
        .is_some_and(|el| el.has_class(&config.gallery_class));

    if let Some(children) = node.children_mut() {
        rewrite_children(children, in_gallery, config);
    }
}

/// Walk one child sequence, applying the first matching rule per node.
///
/// Each rule handler returns how far the cursor advances. Advancing past
/// spliced-in figures and wrappers keeps freshly created nodes out of the
/// pass; the multi-image unwrap advances zero so the promoted images are
/// re-examined as standalone images.
fn rewrite_children(children: &mut Vec<Node>, in_gallery: bool, config: &RewriteConfig) {
    let mut index = 0;
    while index < children.len() {
        if classify::is_image(&children[index], config) {
            index += wrap_oriented_image(children, index, config);
        } else if is_candidate_paragraph(&children[index]) {
            index += regroup_paragraph(children, index, in_gallery, config);
        } else {
            if !is_figure_structure(&children[index]) {
                visit(&mut children[index], config);
            }
            index += 1;
        }
    }
}

/// A paragraph the grouping rule will even look at: `<p>` with children.
fn is_candidate_paragraph(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|el| el.tag == PARAGRAPH_TAG && !el.children.is_empty())
}

/// Figures and image wrappers are final: the pass never descends into
/// them. An image inside one has already had its keyword stripped, and
/// whatever alt text remains must stay exactly as is — it may itself
/// begin with an orientation keyword.
fn is_figure_structure(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|el| el.tag == FIGURE_TAG || el.has_class(IMAGE_WRAPPER_CLASS))
}

// ============================================================================
// Rule 1: standalone images
// ============================================================================

/// Wrap an orientation-tagged image in a marker `div`, stripping the
/// keyword from its alt text. Images without a hint are left untouched.
///
/// Standalone images never receive a caption, even when their alt text
/// would qualify; captions only come out of the paragraph-grouping rule.
fn wrap_oriented_image(children: &mut Vec<Node>, index: usize, config: &RewriteConfig) -> usize {
    let alt = classify::alt_text(&children[index]);
    let Some(detected) = orientation::detect(alt, &config.orientations) else {
        return 1;
    };

    let mut image = std::mem::replace(&mut children[index], Node::text(""));
    let stripped = orientation::strip(classify::alt_text(&image), detected).to_owned();
    classify::set_alt_text(&mut image, stripped);

    let mut wrapper = Element::new(WRAPPER_TAG);
    wrapper.push_class(IMAGE_WRAPPER_CLASS);
    wrapper.set_property(DATA_ORIENTATION, detected.keyword());
    wrapper.children.push(image);
    children[index] = Node::Element(wrapper);

    tracing::debug!(orientation = %detected, "wrapped standalone image");
    1
}

// ============================================================================
// Rule 2: image paragraphs
// ============================================================================

/// Regroup a paragraph whose content is only images and whitespace.
///
/// Returns the cursor advance: past the replacement for the gallery and
/// single-image paths, zero for the multi-image unwrap so the promoted
/// images run through the standalone rule.
fn regroup_paragraph(
    children: &mut Vec<Node>,
    index: usize,
    in_gallery: bool,
    config: &RewriteConfig,
) -> usize {
    let Node::Element(paragraph) = &children[index] else {
        return 1;
    };

    let mut image_count = 0;
    for child in &paragraph.children {
        if classify::is_image(child, config) {
            image_count += 1;
        } else if !child.is_whitespace_text() {
            // Mixed content: leave the paragraph fully untouched, images
            // included.
            return 1;
        }
    }
    if image_count == 0 {
        return 1;
    }

    if in_gallery {
        let Some(paragraph_children) = children[index].children_mut() else {
            return 1;
        };
        let figures: Vec<Node> = std::mem::take(paragraph_children)
            .into_iter()
            .filter(|child| classify::is_image(child, config))
            .map(|img| figure::build_figure(img, true, config))
            .collect();
        let count = figures.len();
        children.splice(index..=index, figures);

        tracing::debug!(count, "expanded gallery paragraph into figures");
        return count;
    }

    if image_count == 1 {
        // Pull the image out, leaving the paragraph shell in place.
        let Some(paragraph_children) = children[index].children_mut() else {
            return 1;
        };
        let Some(position) = paragraph_children
            .iter()
            .position(|child| classify::is_image(child, config))
        else {
            return 1;
        };
        let image = paragraph_children.remove(position);

        let built = figure::build_figure(image, false, config);
        if matches!(&built, Node::Element(el) if el.tag == FIGURE_TAG) {
            // The paragraph becomes the figure, same tree position.
            children[index] = built;
            tracing::debug!("promoted single-image paragraph to figure");
        } else if let Some(paragraph_children) = children[index].children_mut() {
            // No conversion: restore the paragraph exactly as it was.
            paragraph_children.insert(position, built);
        }
        return 1;
    }

    // Two or more images outside a gallery: promote them to bare siblings,
    // no figures, no captions.
    let Some(paragraph_children) = children[index].children_mut() else {
        return 1;
    };
    let images: Vec<Node> = std::mem::take(paragraph_children)
        .into_iter()
        .filter(|child| classify::is_image(child, config))
        .collect();
    children.splice(index..=index, images);

    tracing::debug!(count = image_count, "unwrapped multi-image paragraph");
    0
}
