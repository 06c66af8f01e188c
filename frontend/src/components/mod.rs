//! UI Components for the Retina Risk application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Information cards
//!
//! # Feature Components
//! - [`UploadPanel`] - Image selection with drag & drop, predict button
//! - [`ResultsPanel`] - Prediction result, spinner or placeholder
//! - [`ProcessingIndicator`] - Spinner shown while a request is outstanding
//! - [`ToastStack`] - Dismissable notifications

mod hero;
mod upload;
mod result;
mod progress;
mod footer;
mod toasts;

pub use hero::*;
pub use upload::*;
pub use result::*;
pub use progress::*;
pub use footer::*;
pub use toasts::*;
