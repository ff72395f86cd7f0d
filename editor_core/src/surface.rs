//! The editable surface seen by the core.
//!
//! The surface is host-owned and opaque: the core reads its markup wholesale,
//! writes it back wholesale, and asks the host to run rich-text commands on
//! whatever selection is current. Browsers implement this over a
//! `contenteditable` element; the crate's tests use an in-memory surface.

/// A rich-text command understood by the host platform
/// (the `document.execCommand` vocabulary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCommand {
    pub name: &'static str,
    pub value: Option<String>,
}

impl PlatformCommand {
    pub fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn with_value(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }
}

pub trait EditableSurface {
    /// Current markup of the surface.
    fn inner_html(&self) -> String;

    /// Replaces the whole markup. Hosts reset the caret when this happens.
    fn set_inner_html(&mut self, html: &str);

    fn focus(&mut self);

    fn has_focus(&self) -> bool;

    /// Text of the current selection, `None` when there is no selection or
    /// caret inside the surface.
    fn selected_text(&self) -> Option<String>;

    /// Runs `command` on the current selection. Returns false when the
    /// platform did nothing (no selection, unsupported command).
    fn exec(&mut self, command: &PlatformCommand) -> bool;

    /// Whether `command` is already in effect at the selection. Advisory only.
    fn query_state(&self, command: &PlatformCommand) -> bool;

    /// Inserts markup at the caret, replacing the selection and leaving the
    /// caret after the inserted content. Without a caret the markup is
    /// appended to the end of the surface.
    fn insert_html(&mut self, html: &str);

    /// Inserts literal text at the caret, same placement rules as [`Self::insert_html`].
    fn insert_text(&mut self, text: &str);
}
