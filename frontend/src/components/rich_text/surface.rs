//! `EditableSurface` over a `contenteditable` element.
//!
//! Commands go through `document.execCommand` so the browser keeps its own
//! undo stack. Markup fragments are inserted through the `Range` API instead,
//! since `insertHTML` re-styles inserted nodes to match their surroundings.
//! A surface is built per event from the component's `NodeRef`;
//! the optional bookmark is the selection saved when a dialog took focus,
//! restored before the dialog's fragment is inserted.

use editor_core::markup::escape_text;
use editor_core::{EditableSurface, PlatformCommand};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument, HtmlElement, Range};

pub struct DomSurface {
    element: HtmlElement,
    bookmark: Option<Range>,
}

impl DomSurface {
    pub fn new(element: HtmlElement, bookmark: Option<Range>) -> Self {
        Self { element, bookmark }
    }

    /// Copy of the current selection, if it lies inside this surface.
    pub fn bookmark(&self) -> Option<Range> {
        self.current_range().map(|range| range.clone_range())
    }

    fn document(&self) -> Option<HtmlDocument> {
        self.element.owner_document()?.dyn_into::<HtmlDocument>().ok()
    }

    fn current_range(&self) -> Option<Range> {
        let selection = web_sys::window()?.get_selection().ok()??;
        if selection.range_count() == 0 {
            return None;
        }
        let range = selection.get_range_at(0).ok()?;
        let container = range.common_ancestor_container().ok()?;
        self.element.contains(Some(&container)).then_some(range)
    }

    fn restore_bookmark(&mut self) {
        let Some(range) = self.bookmark.take() else {
            return;
        };
        if let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten()) {
            selection.remove_all_ranges().ok();
            selection.add_range(&range).ok();
        }
    }

    /// Replaces the range's content with the parsed `html` and leaves the
    /// caret after it.
    fn insert_parsed(&self, range: &Range, html: &str) -> bool {
        let Ok(fragment) = range.create_contextual_fragment(html) else {
            return false;
        };
        let last = fragment.last_child();
        if range.delete_contents().is_err() || range.insert_node(&fragment).is_err() {
            return false;
        }
        if let Some(last) = last {
            if range.set_start_after(&last).is_ok() {
                range.collapse_with_to_start(true);
            }
        }
        if let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten()) {
            selection.remove_all_ranges().ok();
            selection.add_range(range).ok();
        }
        true
    }

    fn exec_with_value(&self, name: &str, value: &str) -> bool {
        self.document()
            .is_some_and(|d| d.exec_command_with_show_ui_and_value(name, false, value).unwrap_or(false))
    }

    /// `fontSize` only takes the legacy 1-7 scale; mark the selection with
    /// size 7 and rewrite those `<font>` elements into pixel-sized spans.
    fn apply_font_size(&self, size: &str) -> bool {
        let Some(document) = self.document() else {
            return false;
        };
        if !self.exec_with_value("fontSize", "7") {
            return false;
        }
        let Ok(fonts) = self.element.query_selector_all(r#"font[size="7"]"#) else {
            return false;
        };
        for index in 0..fonts.length() {
            let Some(font) = fonts.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_attribute("style", &format!("font-size: {size}")).ok();
            while let Some(child) = font.first_child() {
                if span.append_child(&child).is_err() {
                    break;
                }
            }
            font.replace_with_with_node_1(&span).ok();
        }
        true
    }
}

impl EditableSurface for DomSurface {
    fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    fn set_inner_html(&mut self, html: &str) {
        self.bookmark = None;
        self.element.set_inner_html(html);
    }

    fn focus(&mut self) {
        self.element.focus().ok();
        self.restore_bookmark();
    }

    fn has_focus(&self) -> bool {
        self.document()
            .and_then(|d| d.active_element())
            .is_some_and(|active| active.is_same_node(Some(self.element.as_ref())))
    }

    fn selected_text(&self) -> Option<String> {
        self.current_range()
            .or_else(|| self.bookmark.clone())
            .map(|range| String::from(range.to_string()))
    }

    fn exec(&mut self, command: &PlatformCommand) -> bool {
        if self.current_range().is_none() {
            return false;
        }
        match (command.name, command.value.as_deref()) {
            ("fontSize", Some(size)) => self.apply_font_size(size),
            (name, Some(value)) => self.exec_with_value(name, value),
            (name, None) => self
                .document()
                .is_some_and(|d| d.exec_command(name).unwrap_or(false)),
        }
    }

    fn query_state(&self, command: &PlatformCommand) -> bool {
        if self.current_range().is_none() {
            return false;
        }
        let Some(document) = self.document() else {
            return false;
        };
        match (command.name, command.value.as_deref()) {
            ("formatBlock", Some(tag)) => document
                .query_command_value("formatBlock")
                .is_ok_and(|value| value.eq_ignore_ascii_case(tag)),
            (name, _) => document.query_command_state(name).unwrap_or(false),
        }
    }

    fn insert_html(&mut self, html: &str) {
        self.restore_bookmark();
        let inserted = self
            .current_range()
            .is_some_and(|range| self.insert_parsed(&range, html));
        if !inserted {
            self.element.insert_adjacent_html("beforeend", html).ok();
        }
    }

    fn insert_text(&mut self, text: &str) {
        self.restore_bookmark();
        let inserted = self.current_range().is_some() && self.exec_with_value("insertText", text);
        if !inserted {
            let html = escape_text(text).replace('\n', "<br>");
            self.element.insert_adjacent_html("beforeend", &html).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted(html: &str) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        element.set_attribute("contenteditable", "true").unwrap();
        element.set_inner_html(html);
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    fn select_contents(element: &HtmlElement, selector: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        let target = element.query_selector(selector).unwrap().unwrap();
        let range = document.create_range().unwrap();
        range.select_node_contents(&target).unwrap();
        let selection = web_sys::window().unwrap().get_selection().unwrap().unwrap();
        selection.remove_all_ranges().unwrap();
        selection.add_range(&range).unwrap();
    }

    #[wasm_bindgen_test]
    fn inserted_markup_is_not_restyled() {
        let element = mounted(r#"<p style="color: red">hello <b>world</b></p>"#);
        select_contents(&element, "b");

        let mut surface = DomSurface::new(element.clone(), None);
        surface.insert_html("<em>X</em>");

        assert_eq!(element.inner_html(), r#"<p style="color: red">hello <b><em>X</em></b></p>"#);
        assert!(element.query_selector("span").unwrap().is_none());
        element.remove();
    }

    #[wasm_bindgen_test]
    fn saved_bookmark_is_used_after_focus_moved() {
        let element = mounted("<p>hello <i>world</i></p>");
        select_contents(&element, "i");
        let bookmark = DomSurface::new(element.clone(), None).bookmark();
        assert!(bookmark.is_some());
        web_sys::window()
            .unwrap()
            .get_selection()
            .unwrap()
            .unwrap()
            .remove_all_ranges()
            .unwrap();

        let mut surface = DomSurface::new(element.clone(), bookmark);
        surface.insert_html(r#"<a href="https://example.com">world</a>"#);

        assert_eq!(
            element.inner_html(),
            r#"<p>hello <i><a href="https://example.com">world</a></i></p>"#
        );
        element.remove();
    }

    #[wasm_bindgen_test]
    fn markup_without_a_caret_is_appended() {
        let element = mounted("<p>a</p>");
        web_sys::window()
            .unwrap()
            .get_selection()
            .unwrap()
            .unwrap()
            .remove_all_ranges()
            .unwrap();

        let mut surface = DomSurface::new(element.clone(), None);
        surface.insert_html("<p>b</p>");

        assert_eq!(element.inner_html(), "<p>a</p><p>b</p>");
        element.remove();
    }
}
