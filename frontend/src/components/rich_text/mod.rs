//! Rich-text editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `RichTextProps`, `RichTextEditor`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Load the owner's value into the surface on first render, and route later
//!   owner values through the session so echoes of our own changes are ignored.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod surface;
mod update;
mod view;

use helpers::set_window_dirty_flag;
pub use messages::Msg;
pub use props::RichTextProps;
pub use state::RichTextEditor;

impl Component for RichTextEditor {
    type Message = Msg;
    type Properties = RichTextProps;

    fn create(ctx: &Context<Self>) -> Self {
        RichTextEditor::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.config != old_props.config {
            gloo_console::warn!("editor configuration is read once; ignoring the new one");
        }
        if props.value == old_props.value {
            return false;
        }
        let Some(mut surface) = self.surface() else {
            return false;
        };
        if !self.session.external_value(&mut surface, &props.value) {
            return false;
        }
        self.mark_clean(&props.value);
        set_window_dirty_flag(false);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let value = ctx.props().value.clone();
            match self.surface() {
                Some(mut surface) => {
                    self.session.initialize(&mut surface, &value);
                    self.mark_clean(&value);
                    // Counters and toolbar state depend on the loaded document.
                    ctx.link().send_message(Msg::SelectionChanged);
                }
                None => gloo_console::error!("editor surface is not mounted"),
            }
        }
    }
}
