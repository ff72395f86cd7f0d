//! Properties for the `RichTextEditor`.
//!
//! The editor is a controlled component: the owning form holds the HTML and
//! receives every change through `on_change`. Handing the editor back the
//! value it just reported is harmless and does not move the caret.

use editor_core::EditorConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RichTextProps {
    /// Canonical HTML owned by the parent form.
    ///
    /// The first value is loaded once on mount. Later values replace the
    /// document only when they differ from what the editor last reported.
    #[prop_or_default]
    pub value: String,

    /// Receives the canonical HTML after every change made in the editor.
    #[prop_or_default]
    pub on_change: Callback<String>,

    /// Read once when the component is created.
    #[prop_or_default]
    pub config: EditorConfig,
}
