//! Markup builders for fragments the editor inserts, plus escaping helpers.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::ImageCdnConfig;

/// Escapes text content so it renders literally.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a value placed inside a double-quoted attribute.
pub fn escape_attr(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Anchor opening in a new tab without leaking the opener.
pub fn link_markup(url: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape_attr(url.trim()),
        escape_text(text)
    )
}

/// Image markup for a committed image draft.
///
/// CDN-hosted images with a known identifier become a `<picture>` with one
/// `<source>` per breakpoint (smallest first); everything else is a plain `<img>`.
pub fn image_markup(
    url: &str,
    alt: &str,
    image_id: Option<&str>,
    cdn: Option<&ImageCdnConfig>,
) -> String {
    let url = url.trim();
    let img = format!(
        r#"<img src="{}" alt="{}">"#,
        escape_attr(url),
        escape_attr(alt.trim())
    );

    let Some(cdn) = cdn.filter(|cdn| cdn.owns(url)) else {
        return img;
    };
    let Some(image_id) = image_id
        .map(str::to_string)
        .or_else(|| cdn.image_id_of(url))
    else {
        return img;
    };

    let mut breakpoints = cdn.breakpoints.clone();
    breakpoints.sort_unstable();
    breakpoints.dedup();

    let mut out = String::from("<picture>");
    for width in breakpoints {
        out.push_str(&format!(
            r#"<source media="(max-width: {width}px)" srcset="{}">"#,
            escape_attr(&cdn.variant_url(&image_id, width))
        ));
    }
    out.push_str(&img);
    out.push_str("</picture>");
    out
}

/// Word and character counts of the visible text of an HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
}

// Block ends and line breaks separate words even without whitespace in the source.
static WORD_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(p|div|h[1-6]|li|blockquote|pre|td|th)>|<br\s*/?>")
        .expect("WORD_BREAK: hardcoded regex is valid")
});

pub fn text_stats(html: &str) -> TextStats {
    let spaced = WORD_BREAK.replace_all(html, " $0");
    let fragment = Html::parse_fragment(&spaced);
    let text: String = fragment.root_element().text().collect();
    TextStats {
        words: text.split_whitespace().count(),
        characters: text.split_whitespace().map(|w| w.chars().count()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_escaped_and_opens_safely() {
        let html = link_markup(" https://example.com/?a=1&b=\"2\" ", "<hello>");
        assert_eq!(
            html,
            r#"<a href="https://example.com/?a=1&amp;b=&quot;2&quot;" target="_blank" rel="noopener noreferrer">&lt;hello&gt;</a>"#
        );
    }

    #[test]
    fn plain_image_outside_cdn() {
        let cdn = ImageCdnConfig::new("https://imagedelivery.net/acct");
        let html = image_markup("https://example.com/cat.png", "A cat", Some("x"), Some(&cdn));
        assert_eq!(html, r#"<img src="https://example.com/cat.png" alt="A cat">"#);
    }

    #[test]
    fn picture_for_cdn_image_with_id() {
        let mut cdn = ImageCdnConfig::new("https://imagedelivery.net/acct");
        cdn.breakpoints = vec![768, 480];
        let html = image_markup(
            "https://imagedelivery.net/acct/abc/public",
            "Cover",
            Some("abc"),
            Some(&cdn),
        );
        assert_eq!(
            html,
            concat!(
                "<picture>",
                r#"<source media="(max-width: 480px)" srcset="https://imagedelivery.net/acct/abc/w=480">"#,
                r#"<source media="(max-width: 768px)" srcset="https://imagedelivery.net/acct/abc/w=768">"#,
                r#"<img src="https://imagedelivery.net/acct/abc/public" alt="Cover">"#,
                "</picture>"
            )
        );
    }

    #[test]
    fn picture_infers_id_from_cdn_url() {
        let cdn = ImageCdnConfig::new("https://imagedelivery.net/acct");
        let html = image_markup("https://imagedelivery.net/acct/xyz/public", "x", None, Some(&cdn));
        assert!(html.starts_with("<picture>"));
        assert!(html.contains("/xyz/w=1200"));
    }

    #[test]
    fn no_cdn_configured_means_img() {
        let html = image_markup("https://imagedelivery.net/acct/xyz/public", "x", Some("xyz"), None);
        assert!(html.starts_with("<img "));
    }

    #[test]
    fn counts_words_across_blocks() {
        let stats = text_stats("<p>Hello <b>bi</b>g</p><p>world</p>");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, 13);
        assert_eq!(text_stats("one<br>two").words, 2);
        assert_eq!(text_stats(""), TextStats::default());
    }
}
