//! Client for the image upload service.
//!
//! The file is posted as `multipart/form-data` under the `file` field; the
//! service answers with the JSON shape of [`UploadedImage`]. Every failure
//! (transport, non-2xx status, unexpected body) comes back as a message
//! suitable for showing inside the image dialog.

use common::model::image::UploadedImage;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

pub async fn upload_image(endpoint: &str, file: &File) -> Result<UploadedImage, String> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_error)?;

    let response = Request::post(endpoint)
        .body(form)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if !response.ok() {
        let detail = response.text().await.unwrap_or_default();
        let mut message = format!("{} {}", response.status(), response.status_text());
        if !detail.trim().is_empty() {
            message.push_str(": ");
            message.push_str(detail.trim());
        }
        return Err(message);
    }

    response
        .json::<UploadedImage>()
        .await
        .map_err(|err| format!("unexpected upload response: {err}"))
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
