//! Caption eligibility.
//!
//! A caption is rendered from the image's alt text, but only when the
//! author wrote a real description. Two snapshots are checked: the alt
//! text as authored (`before`) and the text left after orientation
//! stripping (`after`). An author can suppress the caption outright by
//! starting the alt text with the hidden-caption prefix, and that prefix
//! suppresses it even when it only becomes leading after a keyword strip
//! (`"landscape _shed"` strips to `"_shed"` and stays uncaptioned).

/// Decide whether a caption should be emitted for an image.
///
/// Both snapshots must be non-empty and must not start with
/// `hidden_prefix`.
pub fn should_caption(before: &str, after: &str, hidden_prefix: &str) -> bool {
    !before.is_empty()
        && !before.starts_with(hidden_prefix)
        && !after.is_empty()
        && !after.starts_with(hidden_prefix)
}
