//! Orientation hints encoded as a keyword prefix in accessible text.
//!
//! Authors tag an image as landscape or portrait by starting its alt text
//! with the keyword: `![landscape lake at dawn](lake.jpg)`. The keyword is
//! a layout hint, not part of the description, so detection runs on the
//! raw alt text and the keyword is stripped before the text is reused for
//! a caption.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout orientation of an image, as hinted by its alt text prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// The alt-text keyword and `data-orientation` value for this variant.
    pub fn keyword(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Detect a leading orientation keyword in `text`.
///
/// `accepted` is scanned in order. A keyword matches only on a word
/// boundary: the text is the keyword exactly, or the keyword followed by
/// whitespace. `"landscapex"` does not match.
pub fn detect(text: &str, accepted: &[Orientation]) -> Option<Orientation> {
    accepted.iter().copied().find(|orientation| {
        let keyword = orientation.keyword();
        text == keyword
            || text
                .strip_prefix(keyword)
                .is_some_and(|rest| rest.starts_with(char::is_whitespace))
    })
}

/// Strip a detected keyword and the following whitespace run from the
/// front of `text`.
///
/// Returns `text` unchanged when the keyword is not a prefix on a word
/// boundary, so stripping already-stripped text is a no-op.
pub fn strip(text: &str, orientation: Orientation) -> &str {
    match text.strip_prefix(orientation.keyword()) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
            rest.trim_start()
        }
        _ => text,
    }
}
