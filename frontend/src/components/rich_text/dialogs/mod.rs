//! Insertion dialogs. Each renders inside its own top sheet and only shows a
//! form while the matching core dialog is open.

pub mod color;
pub mod font_size;
pub mod image;
pub mod link;

use editor_core::DialogKind;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RichTextEditor;

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn submit_callback(link: &Scope<RichTextEditor>, kind: DialogKind) -> Callback<SubmitEvent> {
    link.callback(move |e: SubmitEvent| {
        e.prevent_default();
        Msg::CommitDialog(kind)
    })
}

/// Validation or upload message of an open dialog.
pub fn dialog_message(message: Option<&str>) -> Html {
    match message {
        Some(text) => html! { <p class="dialog-error" role="alert">{ text.to_string() }</p> },
        None => html! {},
    }
}

pub fn dialog_actions(
    link: &Scope<RichTextEditor>,
    kind: DialogKind,
    commit_label: &str,
    commit_disabled: bool,
) -> Html {
    html! {
        <div class="dialog-actions">
            <button type="button" class="btn-secondary" onclick={link.callback(move |_| Msg::CancelDialog(kind))}>
                { "Cancel" }
            </button>
            <button type="submit" class="btn-primary" disabled={commit_disabled}>
                { commit_label.to_string() }
            </button>
        </div>
    }
}
