//! View rendering for the rich-text editor component.
//!
//! Two panes share one document: the `contenteditable` surface ("Editor") and
//! a raw HTML `<textarea>` ("HTML"). Both stay mounted and the inactive one is
//! hidden, so the surface keeps its DOM, caret and undo stack across switches.
//!
//! Notes
//! - The surface `<div>` is declared without children. Its content is owned
//!   by the browser and the core session; Yew must never diff into it.
//! - Toolbar toggle states are queried from the live selection on every render.

use editor_core::{shortcut_for, ClipboardPayload, Command, DialogKind, ViewMode};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::color::color_dialog;
use super::dialogs::font_size::font_size_dialog;
use super::dialogs::image::image_dialog;
use super::dialogs::link::link_dialog;
use super::helpers::format_count;
use super::messages::Msg;
use super::state::RichTextEditor;

/// Toolbar layout: groups of (command id, material icon, label).
const TOOLBAR: &[&[(&str, &str, &str)]] = &[
    &[("undo", "undo", "Undo"), ("redo", "redo", "Redo")],
    &[
        ("bold", "format_bold", "Bold"),
        ("italic", "format_italic", "Italic"),
        ("underline", "format_underlined", "Underline"),
        ("strikethrough", "strikethrough_s", "Strikethrough"),
        ("subscript", "subscript", "Subscript"),
        ("superscript", "superscript", "Superscript"),
    ],
    &[
        ("paragraph", "notes", "Paragraph"),
        ("h1", "looks_one", "Heading 1"),
        ("h2", "looks_two", "Heading 2"),
        ("h3", "looks_3", "Heading 3"),
        ("blockquote", "format_quote", "Quote"),
        ("code", "code", "Code block"),
    ],
    &[
        ("unordered_list", "format_list_bulleted", "Bullets"),
        ("ordered_list", "format_list_numbered", "Numbering"),
        ("align_left", "format_align_left", "Left"),
        ("align_center", "format_align_center", "Center"),
        ("align_right", "format_align_right", "Right"),
        ("align_justify", "format_align_justify", "Justify"),
    ],
    &[
        ("link", "link", "Link"),
        ("unlink", "link_off", "Unlink"),
        ("image", "image", "Image"),
        ("horizontal_rule", "horizontal_rule", "Divider"),
        ("remove_format", "format_clear", "Clear"),
    ],
];

/// Main view function for the rich-text editor component.
pub fn view(component: &RichTextEditor, ctx: &Context<RichTextEditor>) -> Html {
    let link = ctx.link();
    let mode = component.session.mode();

    html! {
        <div class="rich-text-root">
            { build_toolbar(component, link) }
            { build_tab_bar(component, link) }
            { build_editor_pane(component, link, mode == ViewMode::Editor) }
            { build_source_pane(component, link, mode == ViewMode::Source) }
            { build_status_bar(component) }
            { link_dialog(component, link) }
            { image_dialog(component, link) }
            { color_dialog(component, link) }
            { font_size_dialog(component, link) }
        </div>
    }
}

fn build_toolbar(component: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let disabled = component.session.mode() != ViewMode::Editor;
    let surface = component.surface();
    let is_active = |command: &Command| {
        surface
            .as_ref()
            .is_some_and(|s| component.session.is_active(s, command))
    };

    let groups = TOOLBAR
        .iter()
        .map(|group| {
            let buttons = group
                .iter()
                .filter_map(|(id, icon, label)| match id.parse::<Command>() {
                    Ok(command) => Some(icon_button(
                        icon,
                        label,
                        is_active(&command),
                        disabled,
                        link.callback(move |_| Msg::Execute(command.clone())),
                    )),
                    Err(err) => {
                        gloo_console::error!(err.to_string());
                        None
                    }
                })
                .collect::<Html>();
            html! { <div class="toolbar-group">{ buttons }</div> }
        })
        .collect::<Html>();

    html! {
        <div class="icon-toolbar" role="toolbar">
            { groups }
            <div class="toolbar-group">
                { icon_button("format_color_text", "Color", false, disabled,
                    link.callback(|_| Msg::OpenDialog(DialogKind::Color))) }
                { icon_button("format_size", "Size", false, disabled,
                    link.callback(|_| Msg::OpenDialog(DialogKind::FontSize))) }
            </div>
        </div>
    }
}

/// Tab bar switching between the surface and the HTML source.
/// Shows a red dot while the document differs from the value it was loaded with.
fn build_tab_bar(component: &RichTextEditor, link: &Scope<RichTextEditor>) -> Html {
    let mode = component.session.mode();
    let locked = component.session.any_dialog_open();
    let tab = |target: ViewMode, label: &str, dirty: bool| {
        html! {
            <button
                type="button"
                class={classes!("tab-btn", (mode == target).then_some("active"))}
                disabled={locked}
                onclick={link.callback(move |_| Msg::SetView(target))}
            >
                { label.to_string() }
                if dirty {
                    <span class="dirty-dot" title="Unsaved changes" />
                }
            </button>
        }
    };

    html! {
        <div class="tab-bar">
            { tab(ViewMode::Editor, "Editor", component.is_dirty()) }
            { tab(ViewMode::Source, "HTML", false) }
        </div>
    }
}

fn build_editor_pane(
    component: &RichTextEditor,
    link: &Scope<RichTextEditor>,
    visible: bool,
) -> Html {
    let on_keydown = link.batch_callback(|e: KeyboardEvent| {
        let command = shortcut_for(&e.key(), e.ctrl_key() || e.meta_key(), e.shift_key())?;
        e.prevent_default();
        Some(Msg::Execute(command))
    });
    let on_paste = link.batch_callback(|e: Event| {
        let data = e.dyn_ref::<ClipboardEvent>()?.clipboard_data()?;
        e.prevent_default();
        let read = |format: &str| data.get_data(format).ok().filter(|s| !s.is_empty());
        Some(Msg::Paste(ClipboardPayload {
            html: read("text/html"),
            text: read("text/plain"),
        }))
    });

    html! {
        <div
            class="rich-text-surface"
            ref={component.editor_ref.clone()}
            contenteditable="true"
            spellcheck="true"
            hidden={!visible}
            oninput={link.callback(|_: InputEvent| Msg::SurfaceInput)}
            onpaste={on_paste}
            onkeydown={on_keydown}
            onkeyup={link.callback(|_: KeyboardEvent| Msg::SelectionChanged)}
            onmouseup={link.callback(|_: MouseEvent| Msg::SelectionChanged)}
        />
    }
}

fn build_source_pane(
    component: &RichTextEditor,
    link: &Scope<RichTextEditor>,
    visible: bool,
) -> Html {
    html! {
        <textarea
            class="rich-text-source"
            spellcheck="false"
            hidden={!visible}
            value={component.session.source_text().to_string()}
            oninput={link.callback(|e: InputEvent| {
                Msg::SourceInput(e.target_unchecked_into::<HtmlTextAreaElement>().value())
            })}
        />
    }
}

fn build_status_bar(component: &RichTextEditor) -> Html {
    let stats = component.session.stats();
    html! {
        <div class="status-bar">
            <span>{ format!("{} words", format_count(stats.words)) }</span>
            <span>{ format!("{} characters", format_count(stats.characters)) }</span>
        </div>
    }
}

/// Renders a toolbar button with a Material icon and a label.
///
/// `mousedown` is cancelled so the click doesn't take the selection away
/// from the surface.
fn icon_button(
    icon_name: &str,
    label: &str,
    active: bool,
    disabled: bool,
    on_click: Callback<MouseEvent>,
) -> Html {
    html! {
        <button
            type="button"
            class={classes!("icon-btn", active.then_some("active"))}
            title={label.to_string()}
            aria-pressed={active.to_string()}
            disabled={disabled}
            onmousedown={Callback::from(|e: MouseEvent| e.prevent_default())}
            onclick={on_click}
        >
            <i class="material-icons">{ icon_name.to_string() }</i>
            <span class="icon-label">{ label.to_string() }</span>
        </button>
    }
}
