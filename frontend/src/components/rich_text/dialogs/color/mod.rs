use editor_core::DialogKind;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::rich_text::dialogs::{
    dialog_actions, dialog_message, input_value, submit_callback,
};
use crate::components::rich_text::{Msg, RichTextEditor};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn color_dialog(component: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let dialog = &component.session.color;
    let palette = &component.session.config().palette;

    html! {
        <TopSheet node_ref={component.color_dialog_ref.clone()} title="Text color">
            {
                if let Some(draft) = dialog.draft() {
                    let swatches = palette
                        .iter()
                        .map(|hex| {
                            let selected = hex.eq_ignore_ascii_case(draft.hex.trim());
                            let value = hex.clone();
                            html! {
                                <button
                                    type="button"
                                    class={classes!("swatch", selected.then_some("selected"))}
                                    title={hex.clone()}
                                    style={format!("background:{hex}")}
                                    onclick={link.callback(move |_| Msg::ColorHex(value.clone()))}
                                />
                            }
                        })
                        .collect::<Html>();

                    html! {
                        <form class="dialog-form" onsubmit={submit_callback(link, DialogKind::Color)}>
                            <div class="swatches">{ swatches }</div>
                            <label>
                                { "Hex" }
                                <input
                                    type="text"
                                    placeholder="#1976d2"
                                    value={draft.hex.clone()}
                                    oninput={link.callback(|e: InputEvent| Msg::ColorHex(input_value(&e)))}
                                />
                            </label>
                            { dialog_message(dialog.message()) }
                            { dialog_actions(link, DialogKind::Color, "Apply", false) }
                        </form>
                    }
                } else {
                    html! {}
                }
            }
        </TopSheet>
    }
}
