//! Error types for the editing core.
//!
//! Nothing here is fatal: every variant describes a condition the caller
//! recovers from locally (keep the dialog open, show a message, ignore a
//! stale completion).

use thiserror::Error;

/// A dialog draft is missing a required field or holds a malformed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a URL is required")]
    MissingUrl,
    #[error("link text is required")]
    MissingLinkText,
    #[error("alternative text is required for images")]
    MissingAltText,
    #[error("`{0}` is not a hex color")]
    InvalidColor(String),
    #[error("font size must be a positive number of pixels")]
    InvalidFontSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("the dialog is not open")]
    DialogClosed,
    #[error("switch to the editor view to insert content")]
    SourceViewActive,
    #[error("an upload is already in progress")]
    UploadInFlight,
    #[error("image upload failed: {0}")]
    Upload(String),
    #[error("invalid editor configuration: {0}")]
    Config(String),
}
