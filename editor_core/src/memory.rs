//! In-memory editable surface.
//!
//! Behaves like a tiny `contenteditable`: the selection is a byte range into
//! the markup and commands wrap or unwrap that range with tags. It exists to
//! drive the core without a browser and keeps a counter of wholesale markup
//! replacements, which is what resets a real caret.

use std::ops::Range;

use crate::markup::{escape_attr, escape_text};
use crate::surface::{EditableSurface, PlatformCommand};

#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    html: String,
    selection: Option<Range<usize>>,
    focused: bool,
    replacements: usize,
}

impl MemorySurface {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Self::default()
        }
    }

    /// Selects the first occurrence of `needle` in the markup.
    pub fn select(&mut self, needle: &str) -> bool {
        match self.html.find(needle) {
            Some(start) => {
                self.selection = Some(start..start + needle.len());
                true
            }
            None => false,
        }
    }

    /// Collapses the selection to a caret at byte `offset`, clamped to the markup.
    pub fn place_caret(&mut self, offset: usize) {
        let mut offset = offset.min(self.html.len());
        while !self.html.is_char_boundary(offset) {
            offset -= 1;
        }
        self.selection = Some(offset..offset);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// How many times the whole markup was replaced from outside.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    /// Simulates keystrokes at the caret; the caller reports the input event.
    pub fn type_text(&mut self, text: &str) {
        self.focused = true;
        self.insert_text(text);
    }

    fn splice(&mut self, range: Range<usize>, replacement: &str) {
        self.html.replace_range(range.clone(), replacement);
        let caret = range.start + replacement.len();
        self.selection = Some(caret..caret);
    }

    fn is_wrapped(&self, range: &Range<usize>, open: &str, close: &str) -> bool {
        self.html[..range.start].ends_with(open) && self.html[range.end..].starts_with(close)
    }

    fn wrap(&mut self, range: Range<usize>, open: &str, close: &str) -> bool {
        if range.is_empty() {
            return false;
        }
        self.html.insert_str(range.end, close);
        self.html.insert_str(range.start, open);
        self.selection = Some(range.start + open.len()..range.end + open.len());
        true
    }

    fn toggle(&mut self, range: Range<usize>, tag: &str) -> bool {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        if range.is_empty() {
            return false;
        }
        if self.is_wrapped(&range, &open, &close) {
            self.html.replace_range(range.end..range.end + close.len(), "");
            self.html.replace_range(range.start - open.len()..range.start, "");
            self.selection = Some(range.start - open.len()..range.end - open.len());
            true
        } else {
            self.wrap(range, &open, &close)
        }
    }

    fn strip_markup(&mut self, range: Range<usize>) -> bool {
        let inner = strip_tags(&self.html[range.clone()]);
        if inner == self.html[range.clone()] {
            return false;
        }
        let start = range.start;
        self.html.replace_range(range, &inner);
        self.selection = Some(start..start + inner.len());
        true
    }
}

fn inline_tag(command: &str) -> Option<&'static str> {
    Some(match command {
        "bold" => "b",
        "italic" => "i",
        "underline" => "u",
        "strikeThrough" => "s",
        "subscript" => "sub",
        "superscript" => "sup",
        _ => return None,
    })
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

impl EditableSurface for MemorySurface {
    fn inner_html(&self) -> String {
        self.html.clone()
    }

    fn set_inner_html(&mut self, html: &str) {
        self.html = html.to_string();
        self.selection = None;
        self.replacements += 1;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn selected_text(&self) -> Option<String> {
        self.selection
            .as_ref()
            .map(|range| strip_tags(&self.html[range.clone()]))
    }

    fn exec(&mut self, command: &PlatformCommand) -> bool {
        let Some(range) = self.selection.clone() else {
            return false;
        };
        if let Some(tag) = inline_tag(command.name) {
            return self.toggle(range, tag);
        }
        match (command.name, command.value.as_deref()) {
            ("formatBlock", Some(tag)) => self.toggle(range, tag),
            ("insertOrderedList", _) => self.wrap(range, "<ol><li>", "</li></ol>"),
            ("insertUnorderedList", _) => self.wrap(range, "<ul><li>", "</li></ul>"),
            ("justifyLeft", _) => self.wrap(range, r#"<div style="text-align: left">"#, "</div>"),
            ("justifyCenter", _) => {
                self.wrap(range, r#"<div style="text-align: center">"#, "</div>")
            }
            ("justifyRight", _) => self.wrap(range, r#"<div style="text-align: right">"#, "</div>"),
            ("justifyFull", _) => {
                self.wrap(range, r#"<div style="text-align: justify">"#, "</div>")
            }
            ("foreColor", Some(color)) => {
                let open = format!(r#"<font color="{}">"#, escape_attr(color));
                self.wrap(range, &open, "</font>")
            }
            ("fontSize", Some(size)) => {
                let open = format!(r#"<span style="font-size: {}">"#, escape_attr(size));
                self.wrap(range, &open, "</span>")
            }
            ("insertHorizontalRule", _) => {
                self.splice(range, "<hr>");
                true
            }
            ("unlink" | "removeFormat", _) => self.strip_markup(range),
            _ => false,
        }
    }

    fn query_state(&self, command: &PlatformCommand) -> bool {
        let Some(range) = self.selection.as_ref() else {
            return false;
        };
        let tag = match (inline_tag(command.name), command.value.as_deref()) {
            (Some(tag), _) => tag,
            (None, Some(tag)) if command.name == "formatBlock" => tag,
            _ => return false,
        };
        self.is_wrapped(range, &format!("<{tag}>"), &format!("</{tag}>"))
    }

    fn insert_html(&mut self, html: &str) {
        let end = self.html.len();
        let range = self.selection.clone().unwrap_or(end..end);
        self.splice(range, html);
    }

    fn insert_text(&mut self, text: &str) {
        self.insert_html(&escape_text(text).replace('\n', "<br>"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_toggles_around_selection() {
        let mut surface = MemorySurface::new("<p>hello world</p>");
        surface.select("world");
        let bold = PlatformCommand::new("bold");
        assert!(surface.exec(&bold));
        assert_eq!(surface.inner_html(), "<p>hello <b>world</b></p>");
        assert!(surface.query_state(&bold));
        assert!(surface.exec(&bold));
        assert_eq!(surface.inner_html(), "<p>hello world</p>");
        assert!(!surface.query_state(&bold));
    }

    #[test]
    fn commands_without_selection_do_nothing() {
        let mut surface = MemorySurface::new("<p>x</p>");
        assert!(!surface.exec(&PlatformCommand::new("bold")));
        surface.place_caret(4);
        assert!(!surface.exec(&PlatformCommand::new("italic")));
        assert_eq!(surface.inner_html(), "<p>x</p>");
    }

    #[test]
    fn insert_replaces_selection_and_moves_caret() {
        let mut surface = MemorySurface::new("<p>abc</p>");
        surface.select("b");
        surface.insert_html("<em>B</em>");
        assert_eq!(surface.inner_html(), "<p>a<em>B</em>c</p>");
        assert_eq!(surface.selection(), Some(14..14));
    }

    #[test]
    fn text_insertion_is_literal() {
        let mut surface = MemorySurface::new("");
        surface.insert_text("<b>x</b>\ny");
        assert_eq!(surface.inner_html(), "&lt;b&gt;x&lt;/b&gt;<br>y");
    }

    #[test]
    fn replacing_markup_drops_selection() {
        let mut surface = MemorySurface::new("<p>a</p>");
        surface.place_caret(4);
        surface.set_inner_html("<p>b</p>");
        assert_eq!(surface.selection(), None);
        assert_eq!(surface.replacements(), 1);
    }
}
