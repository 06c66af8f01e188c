//! HTTP service for submitting an image to the prediction backend.
//!
//! The exchange is split in two: a [`PredictionTransport`] performs the
//! POST and hands back status + raw body, then [`interpret_reply`]
//! classifies it. Only the transport touches the browser.

use gloo_net::http::Request;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::config::{predict_url, UPLOAD_FIELD};
use crate::error::{AppError, AppResult};
use crate::types::{PredictResponse, SelectedFile};

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends an image to the prediction service.
///
/// Implementations return `Err` only for transport failures; any HTTP
/// status, including 5xx, is a successful [`HttpReply`].
#[allow(async_fn_in_trait)]
pub trait PredictionTransport {
    async fn post_image(&self, file: &SelectedFile) -> AppResult<HttpReply>;
}

/// Browser transport posting `multipart/form-data` with gloo-net.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(predict_url())
    }
}

impl PredictionTransport for HttpTransport {
    async fn post_image(&self, file: &SelectedFile) -> AppResult<HttpReply> {
        let form_data = build_form_data(file)?;

        log::info!("📤 Uploading {} ({} bytes) to {}", file.name, file.size(), self.url);

        let request = Request::post(&self.url)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

        log::debug!("Raw backend response ({}): {}", status, body);

        Ok(HttpReply { status, body })
    }
}

/// Build the form body: a single `file` part with the original name and type.
fn build_form_data(file: &SelectedFile) -> AppResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    let bytes = js_sys::Uint8Array::from(&file.bytes[..]);
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.media_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| AppError::Network(format!("Failed to create Blob: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.name)
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

    Ok(form_data)
}

/// Classify a reply: non-2xx is a server error, then the body must decode
/// into a valid [`PredictResponse`].
pub fn interpret_reply(reply: HttpReply) -> AppResult<PredictResponse> {
    if !reply.is_success() {
        log::error!("Server returned non-OK status: {}", reply.status);
        return Err(AppError::Server {
            status: reply.status,
            body: reply.body,
        });
    }

    let response: PredictResponse = serde_json::from_str(&reply.body)
        .map_err(|e| AppError::MalformedResponse(e.to_string()))?;
    response.validate()?;

    log::debug!("Parsed response: {:?}", response);
    Ok(response)
}

/// Post the image and interpret the reply.
pub async fn request_prediction<T: PredictionTransport>(
    transport: &T,
    file: &SelectedFile,
) -> AppResult<PredictResponse> {
    let reply = transport.post_image(file).await?;
    interpret_reply(reply)
}
