use editor_core::DialogKind;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::rich_text::dialogs::{
    dialog_actions, dialog_message, input_value, submit_callback,
};
use crate::components::rich_text::{Msg, RichTextEditor};
use crate::tops_sheet::top_sheet::TopSheet;

pub fn font_size_dialog(component: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let dialog = &component.session.font_size;
    let sizes = &component.session.config().font_sizes;

    html! {
        <TopSheet node_ref={component.font_size_dialog_ref.clone()} title="Font size">
            {
                if let Some(draft) = dialog.draft() {
                    let presets = sizes
                        .iter()
                        .map(|&px| html! {
                            <button
                                type="button"
                                class={classes!("size-preset", (draft.px == px).then_some("selected"))}
                                onclick={link.callback(move |_| Msg::FontSizePx(px))}
                            >
                                { format!("{px}px") }
                            </button>
                        })
                        .collect::<Html>();
                    let current = if draft.px == 0 { String::new() } else { draft.px.to_string() };

                    html! {
                        <form class="dialog-form" onsubmit={submit_callback(link, DialogKind::FontSize)}>
                            <div class="size-presets">{ presets }</div>
                            <label>
                                { "Pixels" }
                                <input
                                    type="number"
                                    min="1"
                                    value={current}
                                    oninput={link.callback(|e: InputEvent| {
                                        Msg::FontSizePx(input_value(&e).trim().parse().unwrap_or(0))
                                    })}
                                />
                            </label>
                            { dialog_message(dialog.message()) }
                            { dialog_actions(link, DialogKind::FontSize, "Apply", false) }
                        </form>
                    }
                } else {
                    html! {}
                }
            }
        </TopSheet>
    }
}
