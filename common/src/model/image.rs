use serde::{Deserialize, Serialize};

/// Response body of the image upload endpoint.
///
/// The upload service stores the file wherever it likes (CDN, bucket, ...)
/// and answers with the public URL plus the identifier the CDN knows the
/// image by. The editor only uses the pair to build `<img>`/`<picture>`
/// markup; it never interprets storage details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    /// Public URL of the stored image.
    pub url: String,
    /// Identifier of the image inside the CDN, used to derive resized variants.
    pub image_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_image_id() {
        let body = r#"{"url":"https://cdn.example.com/abc/public","imageId":"abc"}"#;
        let image: UploadedImage = serde_json::from_str(body).unwrap();
        assert_eq!(image.url, "https://cdn.example.com/abc/public");
        assert_eq!(image.image_id, "abc");
    }

    #[test]
    fn rejects_missing_url() {
        let body = r#"{"imageId":"abc"}"#;
        assert!(serde_json::from_str::<UploadedImage>(body).is_err());
    }
}
