use editor_core::{DialogKind, UploadState};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::rich_text::dialogs::{
    dialog_actions, dialog_message, input_value, submit_callback,
};
use crate::components::rich_text::{Msg, RichTextEditor};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn image_dialog(component: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let dialog = &component.session.image;
    let Some(draft) = dialog.draft() else {
        return html! {
            <TopSheet node_ref={component.image_dialog_ref.clone()} title="Insert image" />
        };
    };

    let uploading = draft.upload == UploadState::InFlight;
    let pick_file = {
        let input_ref = component.file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };
    let on_file = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files()?.get(0)?;
        // Selecting the same file again must fire `change` again.
        input.set_value("");
        Some(Msg::ImageFileSelected(file))
    });

    let status = match &draft.upload {
        UploadState::Idle => html! {},
        UploadState::InFlight => html! { <span class="upload-status">{ "Uploading…" }</span> },
        UploadState::Done => html! { <span class="upload-status done">{ "Uploaded" }</span> },
        // The reason is shown by `dialog_message`.
        UploadState::Failed(_) => html! { <span class="upload-status failed">{ "Upload failed" }</span> },
    };
    let preview = draft
        .preview
        .clone()
        .or_else(|| (!draft.url.trim().is_empty()).then(|| draft.url.clone()));

    html! {
        <TopSheet node_ref={component.image_dialog_ref.clone()} title="Insert image">
            <form class="dialog-form" onsubmit={submit_callback(link, DialogKind::Image)}>
                <div class="upload-row">
                    <input
                        type="file"
                        accept="image/*"
                        style="display:none"
                        ref={component.file_input_ref.clone()}
                        onchange={on_file}
                    />
                    <button type="button" class="btn-secondary" disabled={uploading} onclick={pick_file}>
                        <i class="material-icons">{ "upload" }</i>
                        { "Upload file" }
                    </button>
                    { status }
                </div>
                {
                    match preview {
                        Some(src) => html! { <img class="dialog-preview" src={src} alt="" /> },
                        None => html! {},
                    }
                }
                <label>
                    { "Image URL" }
                    <input
                        type="url"
                        placeholder="https://"
                        value={draft.url.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::ImageUrl(input_value(&e)))}
                    />
                </label>
                <label>
                    { "Alternative text" }
                    <input
                        type="text"
                        value={draft.alt_text.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::ImageAlt(input_value(&e)))}
                    />
                </label>
                { dialog_message(dialog.message()) }
                { dialog_actions(link, DialogKind::Image, "Insert", uploading) }
            </form>
        </TopSheet>
    }
}
