//! Application configuration.
//!
//! Centralized configuration for the Retina Risk frontend.
//! Everything is hardcoded: the prediction service runs next to the
//! page during development and there is no runtime configuration.

/// Prediction service base URL.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Path of the prediction endpoint on the backend.
pub const PREDICT_PATH: &str = "/predict";

/// Multipart field name carrying the uploaded image.
pub const UPLOAD_FIELD: &str = "file";

/// Media type prefix a selected file must carry to be accepted.
pub const ACCEPTED_MEDIA_PREFIX: &str = "image/";

/// Confidence strictly above this value is rendered in the "high" band.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Confidence strictly above this value (and not high) is "medium".
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Maximum toasts displayed at once. Oldest are dropped first.
pub const MAX_TOASTS: usize = 3;

/// Full URL of the prediction endpoint.
pub fn predict_url() -> String {
    format!("{}{}", BACKEND_URL, PREDICT_PATH)
}
