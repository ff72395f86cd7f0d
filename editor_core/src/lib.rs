//! Platform-agnostic core of the rich-text editor.
//!
//! The browser-facing crate implements [`EditableSurface`] over a
//! `contenteditable` element and drives an [`EditorSession`]; everything that
//! decides *what* happens to the document lives here.

pub mod command;
pub mod config;
pub mod dialog;
pub mod error;
pub mod executor;
pub mod markup;
#[cfg(test)]
pub(crate) mod memory;
pub mod notify;
pub mod sanitize;
pub mod session;
pub mod surface;
pub mod sync;

pub use command::{shortcut_for, Alignment, Command, DialogKind, HeadingLevel, ListKind};
pub use config::{EditorConfig, ImageCdnConfig, SourcePolicy};
pub use dialog::{UploadState, UploadTicket};
pub use error::{EditorError, ValidationError};
pub use markup::TextStats;
pub use sanitize::ClipboardPayload;
pub use session::EditorSession;
pub use surface::{EditableSurface, PlatformCommand};
pub use sync::ViewMode;
