//! Markup sanitizing for pasted content and source-view edits.
//!
//! Parsing goes through `scraper` (html5ever), which repairs broken markup the
//! same way a browser would. The cleaned tree is then written back out
//! element by element, applying a [`SanitizeRules`] set.

use scraper::{ElementRef, Html, Node};

use crate::markup::{escape_attr, escape_text};

/// Elements removed together with their content under every rule set.
const ACTIVE_CONTENT: &[&str] = &[
    "script", "style", "iframe", "frame", "frameset", "object", "embed", "applet", "noscript",
    "template", "meta", "link", "title", "base",
];

/// Block containers without meaning of their own.
const GENERIC_BLOCKS: &[&str] = &[
    "div", "section", "article", "header", "footer", "main", "aside", "nav", "center",
];

/// Elements whose content model is phrasing only; a generic block inside one
/// is unwrapped rather than turned into a paragraph.
const PHRASING_HOSTS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "dt", "dd", "pre",
];

/// Form controls, removed with their content from pasted markup.
const FORM_CONTROLS: &[&str] = &[
    "input", "button", "select", "option", "optgroup", "textarea", "datalist", "output",
];

/// Form structure, unwrapped so that surrounding text survives.
const FORM_CONTAINERS: &[&str] = &["form", "fieldset", "legend", "label"];

/// Inline wrappers that only carry styling.
const INLINE_WRAPPERS: &[&str] = &["span", "font", "o:p"];

/// Elements that may not end up nested inside a `<p>`.
const BLOCK_LEVEL: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "main", "aside", "nav", "center",
    "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "table", "blockquote", "pre", "hr",
    "figure", "dl", "picture",
];

const VOID: &[&str] = &[
    "area", "br", "col", "embed", "hr", "img", "input", "source", "track", "wbr",
];

const URL_ATTRIBUTES: &[&str] = &["href", "src", "srcset", "action", "formaction", "xlink:href"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeRules {
    /// Rewrite generic block containers to `<p>` (or unwrap them when they hold blocks).
    pub blocks_to_paragraphs: bool,
    /// Drop styling-only inline wrappers, keeping their children.
    pub unwrap_wrappers: bool,
    /// Strip `style`, `class` and `id` attributes.
    pub strip_presentation: bool,
    /// Drop form controls and unwrap form containers.
    pub strip_forms: bool,
}

impl SanitizeRules {
    /// Restrictive rules applied to clipboard HTML.
    pub const PASTE: SanitizeRules = SanitizeRules {
        blocks_to_paragraphs: true,
        unwrap_wrappers: true,
        strip_presentation: true,
        strip_forms: true,
    };

    /// Only removes scripts, frames, event handlers and script URLs.
    pub const ACTIVE_CONTENT: SanitizeRules = SanitizeRules {
        blocks_to_paragraphs: false,
        unwrap_wrappers: false,
        strip_presentation: false,
        strip_forms: false,
    };
}

pub fn sanitize_html(html: &str, rules: &SanitizeRules) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    write_children(fragment.root_element(), rules, &mut out);
    out
}

/// Whether `html` holds anything [`SanitizeRules::ACTIVE_CONTENT`] would remove.
pub fn contains_active_content(html: &str) -> bool {
    let fragment = Html::parse_fragment(html);
    let root = fragment.root_element();
    root.descendants().skip(1).any(|node| {
        node.value().as_element().is_some_and(|element| {
            ACTIVE_CONTENT.contains(&element.name())
                || element
                    .attrs()
                    .any(|(attr, value)| !keep_attribute(attr, value, &SanitizeRules::ACTIVE_CONTENT))
        })
    })
}

/// The representations offered by a clipboard event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub html: Option<String>,
    pub text: Option<String>,
}

/// Content ready to be inserted at the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Sanitized markup.
    Html(String),
    /// Literal text, never interpreted as markup.
    Text(String),
}

/// Turns clipboard content into an insertable fragment.
///
/// HTML wins when present and non-empty after cleaning; otherwise the plain
/// text is used verbatim. Returns `None` for an empty clipboard.
pub fn transform_paste(payload: &ClipboardPayload) -> Option<Fragment> {
    if let Some(html) = payload.html.as_deref().filter(|h| !h.trim().is_empty()) {
        let cleaned = sanitize_html(html, &SanitizeRules::PASTE);
        if !cleaned.trim().is_empty() {
            return Some(Fragment::Html(cleaned));
        }
        log::debug!("pasted html was empty after sanitizing, falling back to text");
    }

    payload
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| Fragment::Text(t.replace("\r\n", "\n")))
}

fn write_children(parent: ElementRef<'_>, rules: &SanitizeRules, out: &mut String) {
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    write_element(element, rules, out);
                }
            }
            // comments, doctypes and processing instructions
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, rules: &SanitizeRules, out: &mut String) {
    let mut name = element.value().name();

    if ACTIVE_CONTENT.contains(&name) {
        return;
    }
    if rules.strip_forms && FORM_CONTROLS.contains(&name) {
        return;
    }
    if (rules.unwrap_wrappers && INLINE_WRAPPERS.contains(&name))
        || (rules.strip_forms && FORM_CONTAINERS.contains(&name))
    {
        write_children(element, rules, out);
        return;
    }
    if rules.blocks_to_paragraphs && GENERIC_BLOCKS.contains(&name) {
        if contains_block(element) || inside_phrasing_host(element) {
            write_children(element, rules, out);
            return;
        }
        if is_blank(element) {
            return;
        }
        name = "p";
    }

    // Attribute storage order is not guaranteed by the parser; sort for stable output.
    let mut attrs: Vec<(&str, &str)> = element
        .value()
        .attrs()
        .filter(|(attr, value)| keep_attribute(attr, value, rules))
        .collect();
    attrs.sort_unstable_by_key(|(attr, _)| *attr);

    out.push('<');
    out.push_str(name);
    for (attr, value) in attrs {
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if VOID.contains(&name) {
        return;
    }
    write_children(element, rules, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn keep_attribute(name: &str, value: &str, rules: &SanitizeRules) -> bool {
    let name = name.to_ascii_lowercase();
    if name.starts_with("on") {
        return false;
    }
    if URL_ATTRIBUTES.contains(&name.as_str()) {
        let scheme: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .take(11)
            .collect::<String>()
            .to_ascii_lowercase();
        if scheme.starts_with("javascript:") || scheme.starts_with("vbscript:") {
            return false;
        }
    }
    !(rules.strip_presentation && matches!(name.as_str(), "style" | "class" | "id"))
}

fn contains_block(element: ElementRef<'_>) -> bool {
    element.descendants().skip(1).any(|node| {
        node.value()
            .as_element()
            .is_some_and(|e| BLOCK_LEVEL.contains(&e.name()))
    })
}

fn inside_phrasing_host(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| PHRASING_HOSTS.contains(&ancestor.value().name()))
}

fn is_blank(element: ElementRef<'_>) -> bool {
    element.text().all(|t| t.trim().is_empty())
        && !element
            .descendants()
            .skip(1)
            .any(|node| node.value().is_element())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paste(html: &str) -> String {
        sanitize_html(html, &SanitizeRules::PASTE)
    }

    #[test]
    fn styled_div_becomes_plain_paragraph() {
        let out = paste(r#"<div style="color:red" class="foo">X</div>"#);
        assert_eq!(out, "<p>X</p>");
    }

    #[test]
    fn div_holding_blocks_is_unwrapped() {
        let out = paste(r#"<div id="wrap"><h2 class="t">Title</h2><div>body</div></div>"#);
        assert_eq!(out, "<h2>Title</h2><p>body</p>");
    }

    #[test]
    fn generic_blocks_inside_headings_and_items_are_unwrapped() {
        assert_eq!(paste("<h1><div>x</div></h1>"), "<h1>x</h1>");
        assert_eq!(
            paste(r#"<ul><li><div class="c">a</div></li><li><section>b</section></li></ul>"#),
            "<ul><li>a</li><li>b</li></ul>"
        );
        assert_eq!(paste("<div>top</div>"), "<p>top</p>");
    }

    #[test]
    fn form_controls_are_dropped_from_pastes() {
        let out = paste(concat!(
            r#"<form action="/login"><label>Name <input name="n" value="v"></label>"#,
            "<select><option>a</option></select><button>Send</button>",
            "<textarea>notes</textarea></form><p>kept</p>",
        ));
        assert_eq!(out, "Name <p>kept</p>");
        for banned in ["<form", "<input", "<select", "<button", "<textarea", "<label"] {
            assert!(!out.contains(banned));
        }
    }

    #[test]
    fn spans_and_fonts_are_unwrapped() {
        let out = paste(r#"<p>a <span style="font-weight:bold"><font face="x">b</font></span> c</p>"#);
        assert_eq!(out, "<p>a b c</p>");
    }

    #[test]
    fn semantic_inline_markup_survives_without_presentation() {
        let out = paste(r#"<p><strong class="s">bold</strong> <a href="https://x.dev" id="l">x</a></p>"#);
        assert_eq!(out, r#"<p><strong>bold</strong> <a href="https://x.dev">x</a></p>"#);
    }

    #[test]
    fn active_content_is_removed() {
        let out = paste(
            r#"<p onclick="steal()">hi<script>alert(1)</script></p><a href=" javascript:alert(1)">x</a><iframe src="https://evil"></iframe>"#,
        );
        assert_eq!(out, "<p>hi</p><a>x</a>");
    }

    #[test]
    fn office_clipboard_noise_is_dropped() {
        let out = paste(
            "<html><body><!--StartFragment--><p class=MsoNormal>Hi<o:p></o:p></p><!--EndFragment--></body></html>",
        );
        assert_eq!(out, "<p>Hi</p>");
    }

    #[test]
    fn empty_generic_blocks_vanish_but_images_stay() {
        assert_eq!(paste("<div>  </div><p>x</p>"), "<p>x</p>");
        assert_eq!(paste(r#"<div><img src="a.png" alt="a"></div>"#), r#"<p><img alt="a" src="a.png"></p>"#);
    }

    #[test]
    fn text_and_attributes_are_reescaped() {
        let out = paste(r#"<p title="a &quot;b&quot;">1 &lt; 2</p>"#);
        assert_eq!(out, r#"<p title="a &quot;b&quot;">1 &lt; 2</p>"#);
    }

    #[test]
    fn active_content_rules_keep_presentation() {
        let out = sanitize_html(
            r#"<div class="note" style="color:red"><span>x</span><script>y()</script></div>"#,
            &SanitizeRules::ACTIVE_CONTENT,
        );
        assert_eq!(out, r#"<div class="note" style="color:red"><span>x</span></div>"#);
    }

    #[test]
    fn detects_active_content() {
        assert!(contains_active_content("<p>x<script>y()</script></p>"));
        assert!(contains_active_content(r#"<img src="a.png" onerror="y()">"#));
        assert!(contains_active_content(r#"<a href="javascript:y()">x</a>"#));
        assert!(!contains_active_content(r#"<p class="a" style="color:red">x&nbsp;y</p>"#));
    }

    #[test]
    fn non_breaking_spaces_stay_entities() {
        assert_eq!(paste("<p>a&nbsp;b</p>"), "<p>a&nbsp;b</p>");
    }

    #[test]
    fn paste_prefers_html() {
        let payload = ClipboardPayload {
            html: Some("<div class=\"a\">X</div>".into()),
            text: Some("X".into()),
        };
        assert_eq!(transform_paste(&payload), Some(Fragment::Html("<p>X</p>".into())));
    }

    #[test]
    fn paste_falls_back_to_literal_text() {
        let payload = ClipboardPayload {
            html: Some("<script>x()</script>".into()),
            text: Some("<b>not bold</b>\r\nline".into()),
        };
        assert_eq!(
            transform_paste(&payload),
            Some(Fragment::Text("<b>not bold</b>\nline".into()))
        );
        assert_eq!(transform_paste(&ClipboardPayload::default()), None);
    }
}
