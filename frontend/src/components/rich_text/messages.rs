use common::model::image::UploadedImage;
use editor_core::{ClipboardPayload, Command, DialogKind, UploadTicket, ViewMode};

#[derive(Clone)]
pub enum Msg {
    SetView(ViewMode),
    SurfaceInput,
    SourceInput(String),
    Execute(Command),
    Paste(ClipboardPayload),
    /// Caret moved or the selection changed; refreshes toolbar toggles.
    SelectionChanged,

    OpenDialog(DialogKind),
    CancelDialog(DialogKind),
    CommitDialog(DialogKind),

    LinkUrl(String),
    LinkText(String),
    ImageUrl(String),
    ImageAlt(String),
    ImageFileSelected(web_sys::File),
    ImagePreview {
        ticket: UploadTicket,
        data_url: String,
    },
    ImageUploaded {
        ticket: UploadTicket,
        result: Result<UploadedImage, String>,
    },
    ColorHex(String),
    FontSizePx(u32),
}
