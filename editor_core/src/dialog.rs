//! Dialog-driven insertion flows.
//!
//! A [`Dialog`] is either closed or open with a draft. `commit` validates the
//! draft; on failure the dialog stays open with a message, on success it
//! closes and hands the draft back for insertion. Every opening starts a new
//! generation so late async results can be matched against the dialog that
//! asked for them.

use std::sync::LazyLock;

use common::model::image::UploadedImage;
use regex::Regex;

use crate::error::{EditorError, ValidationError};

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("HEX_COLOR: hardcoded regex is valid")
});

pub trait Draft {
    fn validate(&self) -> Result<(), ValidationError>;
}

#[derive(Debug, Clone)]
pub struct Dialog<D> {
    draft: Option<D>,
    generation: u64,
    message: Option<String>,
}

impl<D> Default for Dialog<D> {
    fn default() -> Self {
        Self {
            draft: None,
            generation: 0,
            message: None,
        }
    }
}

impl<D: Draft> Dialog<D> {
    /// Opens the dialog with `draft`, replacing any draft already open.
    pub fn open(&mut self, draft: D) {
        self.generation += 1;
        self.draft = Some(draft);
        self.message = None;
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&D> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        self.draft.as_mut()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Validation or upload message shown inside the dialog.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Validates and closes. On a validation error the dialog stays open.
    pub fn commit(&mut self) -> Result<D, EditorError> {
        let draft = self.draft.as_ref().ok_or(EditorError::DialogClosed)?;
        if let Err(err) = draft.validate() {
            self.message = Some(err.to_string());
            return Err(err.into());
        }
        self.message = None;
        self.draft.take().ok_or(EditorError::DialogClosed)
    }

    /// Discards the draft. Returns false when nothing was open.
    pub fn cancel(&mut self) -> bool {
        self.message = None;
        self.draft.take().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub url: String,
    pub text: String,
}

impl Draft for LinkDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError::MissingLinkText);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    InFlight,
    Done,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageDraft {
    pub url: String,
    pub alt_text: String,
    /// CDN identifier, known after an upload.
    pub image_id: Option<String>,
    pub upload: UploadState,
    /// Local data URL of the file being uploaded.
    pub preview: Option<String>,
}

impl ImageDraft {
    /// Manual URL entry. A different URL no longer refers to the uploaded image.
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if url != self.url {
            self.image_id = None;
            self.preview = None;
        }
        self.url = url;
    }
}

impl Draft for ImageDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        if self.alt_text.trim().is_empty() {
            return Err(ValidationError::MissingAltText);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDraft {
    pub hex: String,
}

impl Draft for ColorDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if HEX_COLOR.is_match(self.hex.trim()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidColor(self.hex.clone()))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSizeDraft {
    pub px: u32,
}

impl Draft for FontSizeDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.px == 0 {
            Err(ValidationError::InvalidFontSize)
        } else {
            Ok(())
        }
    }
}

/// Identifies the dialog opening an upload was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
}

impl Dialog<ImageDraft> {
    /// Marks an upload as in flight. Only one upload may run per opening.
    pub fn begin_upload(&mut self) -> Result<UploadTicket, EditorError> {
        let generation = self.generation;
        let draft = self.draft.as_mut().ok_or(EditorError::DialogClosed)?;
        if draft.upload == UploadState::InFlight {
            return Err(EditorError::UploadInFlight);
        }
        draft.upload = UploadState::InFlight;
        self.message = None;
        Ok(UploadTicket { generation })
    }

    fn draft_for(&mut self, ticket: UploadTicket) -> Option<&mut ImageDraft> {
        if ticket.generation != self.generation {
            return None;
        }
        self.draft.as_mut()
    }

    /// Shows a local preview of the file being uploaded.
    pub fn set_preview(&mut self, ticket: UploadTicket, data_url: String) -> bool {
        match self.draft_for(ticket) {
            Some(draft) => {
                draft.preview = Some(data_url);
                true
            }
            None => false,
        }
    }

    /// Applies an upload result. Results for a closed or reopened dialog are dropped.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<UploadedImage, String>,
    ) -> bool {
        let Some(draft) = self.draft_for(ticket) else {
            log::warn!("dropping upload result for a dialog that is no longer open");
            return false;
        };
        match result {
            Ok(image) => {
                draft.url = image.url;
                draft.image_id = Some(image.image_id);
                draft.upload = UploadState::Done;
                self.message = None;
            }
            Err(reason) => {
                draft.upload = UploadState::Failed(reason.clone());
                self.message = Some(EditorError::Upload(reason).to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded(id: &str) -> UploadedImage {
        UploadedImage {
            url: format!("https://cdn.test/{id}/public"),
            image_id: id.to_string(),
        }
    }

    #[test]
    fn link_requires_url_and_text() {
        let mut dialog = Dialog::default();
        dialog.open(LinkDraft {
            url: String::new(),
            text: "hello".into(),
        });
        assert_eq!(
            dialog.commit(),
            Err(EditorError::Validation(ValidationError::MissingUrl))
        );
        assert!(dialog.is_open());
        assert_eq!(dialog.message(), Some("a URL is required"));

        dialog.draft_mut().unwrap().url = "https://example.com".into();
        dialog.draft_mut().unwrap().text = "  ".into();
        assert_eq!(
            dialog.commit(),
            Err(EditorError::Validation(ValidationError::MissingLinkText))
        );

        dialog.draft_mut().unwrap().text = "hello".into();
        let draft = dialog.commit().unwrap();
        assert_eq!(draft.text, "hello");
        assert!(!dialog.is_open());
        assert_eq!(dialog.message(), None);
    }

    #[test]
    fn closed_dialog_cannot_commit() {
        let mut dialog: Dialog<LinkDraft> = Dialog::default();
        assert_eq!(dialog.commit(), Err(EditorError::DialogClosed));
        assert!(!dialog.cancel());
    }

    #[test]
    fn image_requires_alt_text() {
        let mut dialog = Dialog::default();
        dialog.open(ImageDraft::default());
        dialog.draft_mut().unwrap().set_url("https://example.com/a.png");
        assert_eq!(
            dialog.commit(),
            Err(EditorError::Validation(ValidationError::MissingAltText))
        );
        assert!(dialog.is_open());
    }

    #[test]
    fn upload_fills_draft_and_keeps_dialog_open() {
        let mut dialog = Dialog::default();
        dialog.open(ImageDraft::default());
        let ticket = dialog.begin_upload().unwrap();
        assert_eq!(dialog.begin_upload(), Err(EditorError::UploadInFlight));

        assert!(dialog.finish_upload(ticket, Ok(uploaded("abc"))));
        let draft = dialog.draft().unwrap();
        assert_eq!(draft.url, "https://cdn.test/abc/public");
        assert_eq!(draft.image_id.as_deref(), Some("abc"));
        assert_eq!(draft.upload, UploadState::Done);
        assert!(dialog.is_open());
    }

    #[test]
    fn failed_upload_reports_and_allows_retry() {
        let mut dialog = Dialog::default();
        dialog.open(ImageDraft::default());
        let ticket = dialog.begin_upload().unwrap();
        assert!(dialog.finish_upload(ticket, Err("413 Payload Too Large".into())));
        assert!(dialog.is_open());
        assert_eq!(
            dialog.message(),
            Some("image upload failed: 413 Payload Too Large")
        );
        assert!(dialog.begin_upload().is_ok());
        assert_eq!(dialog.message(), None);
    }

    #[test]
    fn stale_upload_results_are_ignored() {
        let mut dialog = Dialog::default();
        dialog.open(ImageDraft::default());
        let ticket = dialog.begin_upload().unwrap();
        dialog.cancel();
        assert!(!dialog.finish_upload(ticket, Ok(uploaded("late"))));

        dialog.open(ImageDraft::default());
        assert!(!dialog.finish_upload(ticket, Ok(uploaded("late"))));
        assert!(!dialog.set_preview(ticket, "data:image/png;base64,AA==".into()));
        assert_eq!(dialog.draft().unwrap().url, "");
    }

    #[test]
    fn manual_url_forgets_uploaded_id() {
        let mut draft = ImageDraft {
            url: "https://cdn.test/abc/public".into(),
            image_id: Some("abc".into()),
            ..ImageDraft::default()
        };
        draft.set_url("https://cdn.test/abc/public");
        assert_eq!(draft.image_id.as_deref(), Some("abc"));
        draft.set_url("https://example.com/b.png");
        assert_eq!(draft.image_id, None);
    }

    #[test]
    fn color_and_font_size_validation() {
        assert!(ColorDraft { hex: "#1a2B3c".into() }.validate().is_ok());
        assert!(ColorDraft { hex: "#abc".into() }.validate().is_ok());
        assert_eq!(
            ColorDraft { hex: "red".into() }.validate(),
            Err(ValidationError::InvalidColor("red".into()))
        );
        assert!(ColorDraft::default().validate().is_err());
        assert!(FontSizeDraft { px: 18 }.validate().is_ok());
        assert_eq!(
            FontSizeDraft { px: 0 }.validate(),
            Err(ValidationError::InvalidFontSize)
        );
    }
}
