//! Formatting commands.
//!
//! `Command` is the tagged variant the toolbar, keyboard shortcuts and dialogs
//! speak. Each variant maps to one platform handler in [`Command::platform`];
//! link and image insertion have no direct handler and go through a dialog.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::surface::PlatformCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ordered,
    Unordered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Which insertion dialog a command opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Link,
    Image,
    Color,
    FontSize,
}

impl DialogKind {
    pub const ALL: [DialogKind; 4] = [
        DialogKind::Link,
        DialogKind::Image,
        DialogKind::Color,
        DialogKind::FontSize,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
    Heading(HeadingLevel),
    Paragraph,
    Quote,
    Code,
    List(ListKind),
    Align(Alignment),
    Link,
    Image,
    /// Foreground color as a `#rrggbb` / `#rgb` string.
    Color(String),
    /// Font size in pixels.
    FontSize(u32),
    Unlink,
    RemoveFormat,
    HorizontalRule,
    Undo,
    Redo,
}

impl Command {
    /// The platform handler for this command, `None` for dialog-driven insertions.
    pub fn platform(&self) -> Option<PlatformCommand> {
        let command = match self {
            Command::Bold => PlatformCommand::new("bold"),
            Command::Italic => PlatformCommand::new("italic"),
            Command::Underline => PlatformCommand::new("underline"),
            Command::Strikethrough => PlatformCommand::new("strikeThrough"),
            Command::Subscript => PlatformCommand::new("subscript"),
            Command::Superscript => PlatformCommand::new("superscript"),
            Command::Heading(level) => PlatformCommand::with_value("formatBlock", level.tag()),
            Command::Paragraph => PlatformCommand::with_value("formatBlock", "p"),
            Command::Quote => PlatformCommand::with_value("formatBlock", "blockquote"),
            Command::Code => PlatformCommand::with_value("formatBlock", "pre"),
            Command::List(ListKind::Ordered) => PlatformCommand::new("insertOrderedList"),
            Command::List(ListKind::Unordered) => PlatformCommand::new("insertUnorderedList"),
            Command::Align(Alignment::Left) => PlatformCommand::new("justifyLeft"),
            Command::Align(Alignment::Center) => PlatformCommand::new("justifyCenter"),
            Command::Align(Alignment::Right) => PlatformCommand::new("justifyRight"),
            Command::Align(Alignment::Justify) => PlatformCommand::new("justifyFull"),
            Command::Color(hex) => PlatformCommand::with_value("foreColor", hex.clone()),
            Command::FontSize(px) => PlatformCommand::with_value("fontSize", format!("{px}px")),
            Command::Unlink => PlatformCommand::new("unlink"),
            Command::RemoveFormat => PlatformCommand::new("removeFormat"),
            Command::HorizontalRule => PlatformCommand::new("insertHorizontalRule"),
            Command::Undo => PlatformCommand::new("undo"),
            Command::Redo => PlatformCommand::new("redo"),
            Command::Link | Command::Image => return None,
        };
        Some(command)
    }

    /// Dialog that must collect input before this command can be applied.
    pub fn dialog(&self) -> Option<DialogKind> {
        match self {
            Command::Link => Some(DialogKind::Link),
            Command::Image => Some(DialogKind::Image),
            _ => None,
        }
    }

    /// Whether the toolbar shows this command as a pressed toggle.
    pub fn is_toggle(&self) -> bool {
        !matches!(
            self,
            Command::Link
                | Command::Image
                | Command::Color(_)
                | Command::FontSize(_)
                | Command::Unlink
                | Command::RemoveFormat
                | Command::HorizontalRule
                | Command::Undo
                | Command::Redo
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Bold => "bold",
            Command::Italic => "italic",
            Command::Underline => "underline",
            Command::Strikethrough => "strikethrough",
            Command::Subscript => "subscript",
            Command::Superscript => "superscript",
            Command::Heading(level) => level.tag(),
            Command::Paragraph => "paragraph",
            Command::Quote => "blockquote",
            Command::Code => "code",
            Command::List(ListKind::Ordered) => "ordered_list",
            Command::List(ListKind::Unordered) => "unordered_list",
            Command::Align(Alignment::Left) => "align_left",
            Command::Align(Alignment::Center) => "align_center",
            Command::Align(Alignment::Right) => "align_right",
            Command::Align(Alignment::Justify) => "align_justify",
            Command::Link => "link",
            Command::Image => "image",
            Command::Color(hex) => return write!(f, "color:{hex}"),
            Command::FontSize(px) => return write!(f, "font_size:{px}"),
            Command::Unlink => "unlink",
            Command::RemoveFormat => "remove_format",
            Command::HorizontalRule => "horizontal_rule",
            Command::Undo => "undo",
            Command::Redo => "redo",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown editor command `{0}`")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParseCommandError(s.to_string());

        if let Some(hex) = s.strip_prefix("color:") {
            return Ok(Command::Color(hex.to_string()));
        }
        if let Some(px) = s.strip_prefix("font_size:") {
            return px.parse().map(Command::FontSize).map_err(|_| unknown());
        }

        let command = match s {
            "bold" => Command::Bold,
            "italic" => Command::Italic,
            "underline" => Command::Underline,
            "strikethrough" => Command::Strikethrough,
            "subscript" => Command::Subscript,
            "superscript" => Command::Superscript,
            "h1" => Command::Heading(HeadingLevel::H1),
            "h2" => Command::Heading(HeadingLevel::H2),
            "h3" => Command::Heading(HeadingLevel::H3),
            "paragraph" => Command::Paragraph,
            "blockquote" => Command::Quote,
            "code" => Command::Code,
            "ordered_list" => Command::List(ListKind::Ordered),
            "unordered_list" => Command::List(ListKind::Unordered),
            "align_left" => Command::Align(Alignment::Left),
            "align_center" => Command::Align(Alignment::Center),
            "align_right" => Command::Align(Alignment::Right),
            "align_justify" => Command::Align(Alignment::Justify),
            "link" => Command::Link,
            "image" => Command::Image,
            "unlink" => Command::Unlink,
            "remove_format" => Command::RemoveFormat,
            "horizontal_rule" => Command::HorizontalRule,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}

/// Keyboard shortcut lookup. `primary` is Ctrl, or Cmd on macOS.
pub fn shortcut_for(key: &str, primary: bool, shift: bool) -> Option<Command> {
    if !primary {
        return None;
    }
    let command = match (key.to_ascii_lowercase().as_str(), shift) {
        ("b", false) => Command::Bold,
        ("i", false) => Command::Italic,
        ("u", false) => Command::Underline,
        ("k", false) => Command::Link,
        ("z", false) => Command::Undo,
        ("z", true) | ("y", false) => Command::Redo,
        _ => return None,
    };
    Some(command)
}
