//! One editor instance: synchronizer, command executor and insertion dialogs
//! behind a single façade.
//!
//! Every mutating entry point returns `Option<String>`: `Some` carries a new
//! canonical string for the owner's change callback, `None` means the owner
//! has nothing new to hear.

use common::model::image::UploadedImage;

use crate::command::{Command, DialogKind};
use crate::config::EditorConfig;
use crate::dialog::{
    ColorDraft, Dialog, FontSizeDraft, ImageDraft, LinkDraft, UploadTicket,
};
use crate::error::EditorError;
use crate::executor;
use crate::markup::{image_markup, link_markup, text_stats, TextStats};
use crate::sanitize::{transform_paste, ClipboardPayload, Fragment};
use crate::surface::EditableSurface;
use crate::sync::{DualViewSynchronizer, ViewMode};

#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    sync: DualViewSynchronizer,
    pub link: Dialog<LinkDraft>,
    pub image: Dialog<ImageDraft>,
    pub color: Dialog<ColorDraft>,
    pub font_size: Dialog<FontSizeDraft>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            sync: DualViewSynchronizer::new(config.source_policy),
            config,
            link: Dialog::default(),
            image: Dialog::default(),
            color: Dialog::default(),
            font_size: Dialog::default(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> ViewMode {
        self.sync.mode()
    }

    pub fn source_text(&self) -> &str {
        self.sync.source_text()
    }

    pub fn canonical(&self) -> &str {
        self.sync.canonical()
    }

    /// Word and character counts of the active view.
    pub fn stats(&self) -> TextStats {
        match self.mode() {
            ViewMode::Editor => text_stats(self.sync.canonical()),
            ViewMode::Source => text_stats(self.sync.source_text()),
        }
    }

    pub fn initialize<S: EditableSurface>(&mut self, surface: &mut S, value: &str) -> bool {
        self.sync.initialize(surface, value)
    }

    pub fn external_value<S: EditableSurface>(&mut self, surface: &mut S, value: &str) -> bool {
        self.sync.on_external_value_change(surface, value)
    }

    /// Switches the authoritative view. Leaving the editor view cancels any
    /// open dialog.
    pub fn switch_view<S: EditableSurface>(
        &mut self,
        surface: &mut S,
        target: ViewMode,
    ) -> Option<String> {
        if target == ViewMode::Source {
            for kind in DialogKind::ALL {
                if self.cancel_dialog(kind) {
                    log::debug!("cancelled {kind:?} dialog on switch to the source view");
                }
            }
        }
        self.sync.switch_view(surface, target)
    }

    pub fn surface_input<S: EditableSurface>(&mut self, surface: &S) -> Option<String> {
        self.sync.on_surface_input(surface)
    }

    pub fn source_input(&mut self, text: &str) -> Option<String> {
        self.sync.on_source_text_change(text)
    }

    /// Runs a toolbar or shortcut command. Dialog commands open their dialog.
    pub fn execute<S: EditableSurface>(
        &mut self,
        surface: &mut S,
        command: &Command,
    ) -> Option<String> {
        if self.mode() != ViewMode::Editor {
            log::debug!("ignoring `{command}` while the source view is active");
            return None;
        }
        if let Some(kind) = command.dialog() {
            self.open_dialog(kind, surface);
            return None;
        }
        executor::execute(surface, command);
        self.sync.on_surface_input(surface)
    }

    pub fn is_active<S: EditableSurface>(&self, surface: &S, command: &Command) -> bool {
        self.mode() == ViewMode::Editor && executor::is_active(surface, command)
    }

    /// Inserts sanitized clipboard content at the caret.
    pub fn paste<S: EditableSurface>(
        &mut self,
        surface: &mut S,
        payload: &ClipboardPayload,
    ) -> Option<String> {
        if self.mode() != ViewMode::Editor {
            return None;
        }
        let fragment = transform_paste(payload)?;
        executor::insert_fragment(surface, &fragment);
        self.sync.on_surface_input(surface)
    }

    /// Opens the dialog for `kind`. The link dialog starts from the selected text.
    pub fn open_dialog<S: EditableSurface>(&mut self, kind: DialogKind, surface: &S) -> bool {
        if self.mode() != ViewMode::Editor {
            log::debug!("dialogs are unavailable in the source view");
            return false;
        }
        match kind {
            DialogKind::Link => self.link.open(LinkDraft {
                url: String::new(),
                text: surface
                    .selected_text()
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or_default(),
            }),
            DialogKind::Image => self.image.open(ImageDraft::default()),
            DialogKind::Color => self.color.open(ColorDraft::default()),
            DialogKind::FontSize => self.font_size.open(FontSizeDraft::default()),
        }
        true
    }

    pub fn is_dialog_open(&self, kind: DialogKind) -> bool {
        match kind {
            DialogKind::Link => self.link.is_open(),
            DialogKind::Image => self.image.is_open(),
            DialogKind::Color => self.color.is_open(),
            DialogKind::FontSize => self.font_size.is_open(),
        }
    }

    pub fn any_dialog_open(&self) -> bool {
        DialogKind::ALL.into_iter().any(|kind| self.is_dialog_open(kind))
    }

    pub fn cancel_dialog(&mut self, kind: DialogKind) -> bool {
        match kind {
            DialogKind::Link => self.link.cancel(),
            DialogKind::Image => self.image.cancel(),
            DialogKind::Color => self.color.cancel(),
            DialogKind::FontSize => self.font_size.cancel(),
        }
    }

    pub fn commit_link<S: EditableSurface>(
        &mut self,
        surface: &mut S,
    ) -> Result<Option<String>, EditorError> {
        self.ensure_editor_view()?;
        let draft = self.link.commit()?;
        let markup = link_markup(&draft.url, &draft.text);
        Ok(self.insert(surface, markup))
    }

    pub fn commit_image<S: EditableSurface>(
        &mut self,
        surface: &mut S,
    ) -> Result<Option<String>, EditorError> {
        self.ensure_editor_view()?;
        let draft = self.image.commit()?;
        let markup = image_markup(
            &draft.url,
            &draft.alt_text,
            draft.image_id.as_deref(),
            self.config.image_cdn.as_ref(),
        );
        Ok(self.insert(surface, markup))
    }

    pub fn commit_color<S: EditableSurface>(
        &mut self,
        surface: &mut S,
    ) -> Result<Option<String>, EditorError> {
        self.ensure_editor_view()?;
        let draft = self.color.commit()?;
        Ok(self.apply(surface, &Command::Color(draft.hex.trim().to_string())))
    }

    pub fn commit_font_size<S: EditableSurface>(
        &mut self,
        surface: &mut S,
    ) -> Result<Option<String>, EditorError> {
        self.ensure_editor_view()?;
        let draft = self.font_size.commit()?;
        Ok(self.apply(surface, &Command::FontSize(draft.px)))
    }

    pub fn begin_upload(&mut self) -> Result<UploadTicket, EditorError> {
        self.image.begin_upload()
    }

    pub fn set_image_preview(&mut self, ticket: UploadTicket, data_url: String) -> bool {
        self.image.set_preview(ticket, data_url)
    }

    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<UploadedImage, String>,
    ) -> bool {
        self.image.finish_upload(ticket, result)
    }

    /// Dialog results only land in the editor view; the dialog stays open otherwise.
    fn ensure_editor_view(&self) -> Result<(), EditorError> {
        match self.mode() {
            ViewMode::Editor => Ok(()),
            ViewMode::Source => Err(EditorError::SourceViewActive),
        }
    }

    fn insert<S: EditableSurface>(&mut self, surface: &mut S, markup: String) -> Option<String> {
        executor::insert_fragment(surface, &Fragment::Html(markup));
        self.sync.on_surface_input(surface)
    }

    fn apply<S: EditableSurface>(&mut self, surface: &mut S, command: &Command) -> Option<String> {
        executor::execute(surface, command);
        self.sync.on_surface_input(surface)
    }
}
