//! Editor configuration.
//!
//! Every field has a default so a host page can override only what it needs,
//! e.g. `{"image_cdn": {"base_url": "https://imagedelivery.net/acct"}}`.

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// What happens to markup typed into the source view before it replaces the
/// editable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcePolicy {
    /// Push the typed markup into the surface verbatim.
    Trust,
    /// Remove scripts, embedded frames, `on*` handlers and `javascript:` URLs,
    /// keep everything presentational.
    #[default]
    StripActiveContent,
}

/// The CDN that serves uploaded images.
///
/// Images living under `base_url` are addressed as `{base_url}/{image_id}/{variant}`;
/// resized variants use the `w={width}` variant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCdnConfig {
    pub base_url: String,
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<u32>,
}

impl ImageCdnConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            breakpoints: default_breakpoints(),
        }
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Returns true when `url` is served by this CDN.
    pub fn owns(&self, url: &str) -> bool {
        url.strip_prefix(self.base())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Extracts the image identifier from a CDN URL (`{base}/{id}/...`).
    pub fn image_id_of(&self, url: &str) -> Option<String> {
        let rest = url.strip_prefix(self.base())?.strip_prefix('/')?;
        let id = rest.split(['/', '?', '#']).next()?;
        (!id.is_empty()).then(|| id.to_string())
    }

    /// URL of the variant resized to `width` pixels.
    pub fn variant_url(&self, image_id: &str, width: u32) -> String {
        format!("{}/{}/w={}", self.base(), image_id, width)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Endpoint receiving multipart image uploads.
    pub upload_endpoint: String,
    pub image_cdn: Option<ImageCdnConfig>,
    pub source_policy: SourcePolicy,
    /// Pixel sizes offered by the font-size dialog.
    pub font_sizes: Vec<u32>,
    /// Swatches offered by the color dialog.
    pub palette: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            upload_endpoint: "/api/images".to_string(),
            image_cdn: None,
            source_policy: SourcePolicy::default(),
            font_sizes: vec![12, 14, 16, 18, 24, 32],
            palette: [
                "#000000", "#434343", "#d32f2f", "#f57c00", "#fbc02d", "#388e3c", "#1976d2",
                "#7b1fa2",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

impl EditorConfig {
    /// Parses a JSON configuration, filling omitted fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let config: EditorConfig =
            serde_json::from_str(json).map_err(|e| EditorError::Config(e.to_string()))?;
        if config.font_sizes.iter().any(|px| *px == 0) {
            return Err(EditorError::Config("font sizes must be positive".into()));
        }
        Ok(config)
    }
}

fn default_breakpoints() -> Vec<u32> {
    vec![480, 768, 1200]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.source_policy, SourcePolicy::StripActiveContent);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = EditorConfig::from_json(
            r#"{"source_policy":"trust","image_cdn":{"base_url":"https://imagedelivery.net/acct/"}}"#,
        )
        .unwrap();
        assert_eq!(config.source_policy, SourcePolicy::Trust);
        assert_eq!(config.upload_endpoint, "/api/images");
        let cdn = config.image_cdn.unwrap();
        assert_eq!(cdn.breakpoints, vec![480, 768, 1200]);
    }

    #[test]
    fn rejects_malformed_json_and_zero_font_size() {
        assert!(matches!(
            EditorConfig::from_json("{not json"),
            Err(EditorError::Config(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{"font_sizes":[12,0]}"#),
            Err(EditorError::Config(_))
        ));
    }

    #[test]
    fn cdn_recognizes_its_urls() {
        let cdn = ImageCdnConfig::new("https://imagedelivery.net/acct/");
        assert!(cdn.owns("https://imagedelivery.net/acct/abc123/public"));
        assert!(!cdn.owns("https://imagedelivery.net/acctother/abc123/public"));
        assert!(!cdn.owns("https://example.com/a.png"));
        assert_eq!(
            cdn.image_id_of("https://imagedelivery.net/acct/abc123/public?x=1"),
            Some("abc123".to_string())
        );
        assert_eq!(cdn.image_id_of("https://imagedelivery.net/acct/"), None);
        assert_eq!(
            cdn.variant_url("abc123", 480),
            "https://imagedelivery.net/acct/abc123/w=480"
        );
    }
}
