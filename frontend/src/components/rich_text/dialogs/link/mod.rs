use editor_core::DialogKind;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::rich_text::dialogs::{
    dialog_actions, dialog_message, input_value, submit_callback,
};
use crate::components::rich_text::{Msg, RichTextEditor};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn link_dialog(component: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let dialog = &component.session.link;
    html! {
        <TopSheet node_ref={component.link_dialog_ref.clone()} title="Insert link">
            {
                if let Some(draft) = dialog.draft() {
                    html! {
                        <form class="dialog-form" onsubmit={submit_callback(link, DialogKind::Link)}>
                            <label>
                                { "URL" }
                                <input
                                    type="url"
                                    placeholder="https://"
                                    value={draft.url.clone()}
                                    oninput={link.callback(|e: InputEvent| Msg::LinkUrl(input_value(&e)))}
                                />
                            </label>
                            <label>
                                { "Text" }
                                <input
                                    type="text"
                                    value={draft.text.clone()}
                                    oninput={link.callback(|e: InputEvent| Msg::LinkText(input_value(&e)))}
                                />
                            </label>
                            { dialog_message(dialog.message()) }
                            { dialog_actions(link, DialogKind::Link, "Insert", false) }
                        </form>
                    }
                } else {
                    html! {}
                }
            }
        </TopSheet>
    }
}
