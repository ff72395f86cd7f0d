//! Component state for the rich-text editor.
//!
//! The document itself lives in the browser (the `contenteditable` element)
//! and in the core [`EditorSession`]; this struct only adds the DOM handles
//! and the bookkeeping that has no meaning outside a browser.

use editor_core::{DialogKind, EditorConfig, EditorSession};
use web_sys::{HtmlElement, Range};
use yew::prelude::*;

use super::helpers::compute_md5;
use super::surface::DomSurface;

/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct RichTextEditor {
    /// Synchronizer, dialogs and command execution.
    pub session: EditorSession,

    /// The `contenteditable` element. Yew never renders children into it.
    pub editor_ref: NodeRef,

    /// Hidden file input behind the image dialog's upload button.
    pub file_input_ref: NodeRef,

    pub link_dialog_ref: NodeRef,
    pub image_dialog_ref: NodeRef,
    pub color_dialog_ref: NodeRef,
    pub font_size_dialog_ref: NodeRef,

    /// Selection saved when a dialog opened; focus moves into the dialog
    /// and the insertion has to land where the user was.
    pub bookmark: Option<Range>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// MD5 of the last value handed in by the owner. Used for dirty tracking.
    pub original_md5: Option<String>,
}

impl RichTextEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            session: EditorSession::new(config),
            editor_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            link_dialog_ref: NodeRef::default(),
            image_dialog_ref: NodeRef::default(),
            color_dialog_ref: NodeRef::default(),
            font_size_dialog_ref: NodeRef::default(),
            bookmark: None,
            loaded: false,
            original_md5: None,
        }
    }

    /// The editable surface, carrying the saved bookmark if any.
    pub fn surface(&self) -> Option<DomSurface> {
        self.editor_ref
            .cast::<HtmlElement>()
            .map(|element| DomSurface::new(element, self.bookmark.clone()))
    }

    pub fn dialog_ref(&self, kind: DialogKind) -> NodeRef {
        match kind {
            DialogKind::Link => self.link_dialog_ref.clone(),
            DialogKind::Image => self.image_dialog_ref.clone(),
            DialogKind::Color => self.color_dialog_ref.clone(),
            DialogKind::FontSize => self.font_size_dialog_ref.clone(),
        }
    }

    /// Records `value` as the clean baseline.
    pub fn mark_clean(&mut self, value: &str) {
        self.original_md5 = Some(compute_md5(value));
    }

    pub fn is_dirty(&self) -> bool {
        self.original_md5
            .as_ref()
            .is_some_and(|orig| orig != &compute_md5(self.session.canonical()))
    }
}
