//! Error types for the upload-and-predict workflow.
//!
//! Every variant is recoverable: the workflow converts them into
//! toast notifications and keeps running.

use thiserror::Error;

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// The selected file is not an image.
    #[error("Unsupported file type '{media_type}'. Please select an image file (PNG, JPG, etc.)")]
    InvalidFileType { media_type: String },

    /// Predict was requested before any image was chosen.
    #[error("Please select a retinal image first")]
    NoFileSelected,

    /// The browser could not read the selected file.
    #[error("Could not read file: {0}")]
    FileRead(String),

    /// Transport failure (unreachable host, aborted fetch, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the prediction service.
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The body is not the JSON shape we expect.
    #[error("Invalid response from server: {0}")]
    MalformedResponse(String),
}

impl AppError {
    /// Title used when the error is surfaced as a toast.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::InvalidFileType { .. } => "Invalid file type",
            AppError::NoFileSelected => "No image selected",
            AppError::FileRead(_) => "Could not read file",
            AppError::Network(_) | AppError::Server { .. } | AppError::MalformedResponse(_) => {
                "Prediction failed"
            }
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
