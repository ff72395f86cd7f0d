//! Update function for the rich-text editor component.
//!
//! Elm-style: receives the current `RichTextEditor` state, the `Context`, and
//! a `Msg`, mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Every document mutation goes through the core session, which decides
//!   whether the owner hears about it; `notify` forwards that to `on_change`.
//! - Dialogs save the editor selection when they open and restore it when
//!   their fragment is inserted.
//! - Image upload: local preview -> multipart POST -> result applied to the
//!   dialog that started it, or dropped if that dialog is gone.

use base64::{engine::general_purpose, Engine as _};
use editor_core::{DialogKind, EditorError, UploadTicket};
use gloo_file::futures::read_as_bytes;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};
use crate::upload::upload_image;

use super::helpers::{set_window_dirty_flag, show_toast};
use super::messages::Msg;
use super::state::RichTextEditor;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - Emits `on_change` whenever the session reports a new canonical string.
/// - Returns `true` to re-render the view, `false` when nothing visible changed.
pub fn update(component: &mut RichTextEditor, ctx: &Context<RichTextEditor>, msg: Msg) -> bool {
    match msg {
        Msg::SetView(mode) => {
            let Some(mut surface) = component.surface() else {
                return false;
            };
            let was_open: Vec<DialogKind> = DialogKind::ALL
                .into_iter()
                .filter(|kind| component.session.is_dialog_open(*kind))
                .collect();
            let published = component.session.switch_view(&mut surface, mode);
            for kind in was_open {
                if !component.session.is_dialog_open(kind) {
                    close_dialog(component, kind);
                }
            }
            notify(component, ctx, published);
            true
        }
        Msg::SurfaceInput => {
            let Some(surface) = component.surface() else {
                return false;
            };
            let published = component.session.surface_input(&surface);
            notify(component, ctx, published);
            true
        }
        Msg::SourceInput(text) => {
            let published = component.session.source_input(&text);
            notify(component, ctx, published);
            true
        }
        Msg::Execute(command) => {
            if let Some(kind) = command.dialog() {
                return update(component, ctx, Msg::OpenDialog(kind));
            }
            let Some(mut surface) = component.surface() else {
                return false;
            };
            let published = component.session.execute(&mut surface, &command);
            notify(component, ctx, published);
            true
        }
        Msg::Paste(payload) => {
            let Some(mut surface) = component.surface() else {
                return false;
            };
            let published = component.session.paste(&mut surface, &payload);
            notify(component, ctx, published);
            true
        }
        Msg::SelectionChanged => true,

        Msg::OpenDialog(kind) => {
            let Some(surface) = component.surface() else {
                return false;
            };
            if !component.session.open_dialog(kind, &surface) {
                return false;
            }
            component.bookmark = surface.bookmark();
            open_top_sheet(component.dialog_ref(kind));
            true
        }
        Msg::CancelDialog(kind) => {
            component.session.cancel_dialog(kind);
            close_dialog(component, kind);
            true
        }
        Msg::CommitDialog(kind) => {
            let Some(mut surface) = component.surface() else {
                return false;
            };
            let session = &mut component.session;
            let result = match kind {
                DialogKind::Link => session.commit_link(&mut surface),
                DialogKind::Image => session.commit_image(&mut surface),
                DialogKind::Color => session.commit_color(&mut surface),
                DialogKind::FontSize => session.commit_font_size(&mut surface),
            };
            match result {
                Ok(published) => {
                    close_dialog(component, kind);
                    notify(component, ctx, published);
                }
                // Shown inside the dialog, which stays open.
                Err(EditorError::Validation(_)) => {}
                Err(err) => {
                    gloo_console::warn!(format!("could not commit {kind:?} dialog: {err}"));
                    show_toast(&err.to_string());
                }
            }
            true
        }

        Msg::LinkUrl(url) => {
            if let Some(draft) = component.session.link.draft_mut() {
                draft.url = url;
            }
            true
        }
        Msg::LinkText(text) => {
            if let Some(draft) = component.session.link.draft_mut() {
                draft.text = text;
            }
            true
        }
        Msg::ImageUrl(url) => {
            if let Some(draft) = component.session.image.draft_mut() {
                draft.set_url(url);
            }
            true
        }
        Msg::ImageAlt(alt) => {
            if let Some(draft) = component.session.image.draft_mut() {
                draft.alt_text = alt;
            }
            true
        }
        Msg::ImageFileSelected(file) => {
            let ticket = match component.session.begin_upload() {
                Ok(ticket) => ticket,
                Err(err) => {
                    show_toast(&err.to_string());
                    return false;
                }
            };
            let endpoint = component.session.config().upload_endpoint.clone();
            start_upload(ctx, ticket, endpoint, file);
            true
        }
        Msg::ImagePreview { ticket, data_url } => {
            component.session.set_image_preview(ticket, data_url)
        }
        Msg::ImageUploaded { ticket, result } => {
            if let Err(reason) = &result {
                gloo_console::error!(format!("image upload failed: {reason}"));
            }
            let applied = component.session.finish_upload(ticket, result);
            if !applied {
                gloo_console::warn!("image upload finished after its dialog closed; ignoring");
            }
            applied
        }
        Msg::ColorHex(hex) => {
            if let Some(draft) = component.session.color.draft_mut() {
                draft.hex = hex;
            }
            true
        }
        Msg::FontSizePx(px) => {
            if let Some(draft) = component.session.font_size.draft_mut() {
                draft.px = px;
            }
            true
        }
    }
}

/// Forwards a newly published canonical string to the owner.
fn notify(component: &RichTextEditor, ctx: &Context<RichTextEditor>, published: Option<String>) {
    if let Some(html) = published {
        set_window_dirty_flag(component.is_dirty());
        ctx.props().on_change.emit(html);
    }
}

fn close_dialog(component: &mut RichTextEditor, kind: DialogKind) {
    component.bookmark = None;
    close_top_sheet(component.dialog_ref(kind));
}

/// Reads the file for a local preview, then posts it to the upload service.
/// Both results are tagged with `ticket` so a closed dialog ignores them.
fn start_upload(
    ctx: &Context<RichTextEditor>,
    ticket: UploadTicket,
    endpoint: String,
    file: web_sys::File,
) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let local = gloo_file::File::from(file.clone());
        match read_as_bytes(&local).await {
            Ok(bytes) => {
                let data_url = format!(
                    "data:{};base64,{}",
                    local.raw_mime_type(),
                    general_purpose::STANDARD.encode(&bytes)
                );
                link.send_message(Msg::ImagePreview { ticket, data_url });
            }
            Err(err) => gloo_console::warn!(format!("could not preview {}: {err}", file.name())),
        }

        let result = upload_image(&endpoint, &file).await;
        link.send_message(Msg::ImageUploaded { ticket, result });
    });
}
