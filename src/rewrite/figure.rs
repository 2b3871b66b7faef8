//! Figure construction for a single image.
//!
//! Takes one image node and decides, from its alt text alone, whether it
//! keeps its shape or becomes a `<figure>` with an optional `<figcaption>`
//! and orientation marker. The caller owns the splicing; this module only
//! ever returns either the image it was given or a figure wrapping it.

use crate::tree::{Element, Node};

use super::{caption, classify, orientation, RewriteConfig};
use super::{DATA_ORIENTATION, FIGCAPTION_TAG, FIGURE_TAG, GALLERY_ITEM_CLASS};

/// Build a figure around `image`, or hand it back unchanged.
///
/// The unchanged path is deliberate: a plain image with no orientation
/// hint, no caption, and no enclosing gallery gains no structure at all.
/// When an orientation keyword is detected it is stripped from the alt
/// text as a side effect, whichever path is taken afterwards.
pub(crate) fn build_figure(mut image: Node, in_gallery: bool, config: &RewriteConfig) -> Node {
    let before = classify::alt_text(&image).to_owned();

    let detected = orientation::detect(&before, &config.orientations);
    if let Some(o) = detected {
        let stripped = orientation::strip(&before, o).to_owned();
        classify::set_alt_text(&mut image, stripped);
    }

    let after = classify::alt_text(&image).to_owned();
    let captioned = caption::should_caption(&before, &after, &config.hidden_prefix);

    if !captioned && detected.is_none() && !in_gallery {
        return image;
    }

    let mut figure = Element::new(FIGURE_TAG);
    if in_gallery {
        figure.push_class(GALLERY_ITEM_CLASS);
    }
    if let Some(o) = detected {
        figure.set_property(DATA_ORIENTATION, o.keyword());
    }
    figure.children.push(image);

    if captioned {
        let mut figcaption = Element::new(FIGCAPTION_TAG);
        figcaption.children.push(Node::text(after));
        figure.children.push(Node::Element(figcaption));
    }

    Node::Element(figure)
}
