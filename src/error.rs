//! Error types for rewrite configuration.
//!
//! The rewrite pass itself is infallible: malformed nodes degrade to empty
//! accessible text and unknown node shapes pass through untouched. The only
//! thing that can go wrong is the configuration, and a bad configuration
//! would otherwise fail silently (a marker class with a space in it can
//! never match a class token). `RewriteConfig::validate` surfaces those
//! cases so the host pipeline can reject them at startup.

use thiserror::Error;

use crate::rewrite::Orientation;

/// Errors reported by [`crate::RewriteConfig::validate`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("gallery class must be a single non-empty class token, got {0:?}")]
    InvalidGalleryClass(String),

    #[error("hidden caption prefix must be non-empty")]
    EmptyHiddenPrefix,

    #[error("image component name must be non-empty")]
    EmptyComponentName,

    #[error("duplicate orientation keyword: {0}")]
    DuplicateOrientation(Orientation),
}

pub type Result<T> = std::result::Result<T, Error>;
