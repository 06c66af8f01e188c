//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - the selected image and its preview
//! - **Prediction Types** - risk label, confidence bands, parsed result
//! - **API Types** - prediction service response schema
//! - **Notification Types** - toast messages

use std::fmt;
use std::rc::Rc;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::config::{ACCEPTED_MEDIA_PREFIX, HIGH_CONFIDENCE_THRESHOLD, MEDIUM_CONFIDENCE_THRESHOLD};
use crate::error::{AppError, AppResult};

// =============================================================================
// File Types
// =============================================================================

/// An image chosen by the user, through the file picker or a drop.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    /// Original file name, shown under the preview and sent in the form.
    pub name: String,
    /// Declared media type (e.g. `image/png`).
    pub media_type: String,
    /// Raw file content.
    pub bytes: Rc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: impl Into<Rc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Whether the declared media type is in the image category.
    pub fn is_image(&self) -> bool {
        is_image_media_type(&self.media_type)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Accept iff the media type begins with the image category prefix.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(ACCEPTED_MEDIA_PREFIX)
}

/// Data URL rendering of a [`SelectedFile`], usable as an `<img src>`.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewData(String);

impl PreviewData {
    pub fn from_file(file: &SelectedFile) -> Self {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
        Self(format!("data:{};base64,{}", file.media_type, b64))
    }

    pub fn as_data_url(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Prediction Types
// =============================================================================

/// Binary outcome reported by the prediction service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLabel {
    HeartRisk,
    NoHeartRisk,
}

impl RiskLabel {
    pub fn from_flag(is_risk: bool) -> Self {
        if is_risk {
            RiskLabel::HeartRisk
        } else {
            RiskLabel::NoHeartRisk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::HeartRisk => "Heart Risk",
            RiskLabel::NoHeartRisk => "No Heart Risk",
        }
    }

    /// Get CSS class for the result panel tone.
    pub fn tone_class(&self) -> &'static str {
        match self {
            RiskLabel::HeartRisk => "result-warning",
            RiskLabel::NoHeartRisk => "result-ok",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLabel::HeartRisk => "⚠️",
            RiskLabel::NoHeartRisk => "✅",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            RiskLabel::HeartRisk => {
                "The analysis suggests potential heart risk indicators in the retinal image."
            }
            RiskLabel::NoHeartRisk => {
                "No significant heart risk indicators were detected in the retinal image."
            }
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for RiskLabel {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Confidence band, used to color the confidence bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceTier::High
        } else if confidence > MEDIUM_CONFIDENCE_THRESHOLD {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    /// Get CSS class for the bar fill.
    pub fn bar_class(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "bar-high",
            ConfidenceTier::Medium => "bar-medium",
            ConfidenceTier::Low => "bar-low",
        }
    }
}

/// Outcome of one successful round trip to the prediction service.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub prediction: RiskLabel,
    /// Service certainty, in `[0, 1]`.
    pub confidence: f64,
}

impl PredictionResult {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }

    /// Confidence as a percentage with one decimal, e.g. `93.0%`.
    pub fn confidence_label(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    /// Width of the confidence bar fill, in percent.
    pub fn bar_width(&self) -> f64 {
        (self.confidence * 100.0).clamp(0.0, 100.0)
    }
}

impl From<&PredictResponse> for PredictionResult {
    fn from(response: &PredictResponse) -> Self {
        Self {
            prediction: RiskLabel::from_flag(response.is_risk),
            confidence: response.confidence,
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Body returned by `POST /predict` on success.
///
/// Unknown fields are ignored; `isRisk` and `confidence` are required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub is_risk: bool,
    pub confidence: f64,
    /// Human-readable label, surfaced in the completion toast.
    #[serde(default)]
    pub label: Option<String>,
}

impl PredictResponse {
    /// Check the values serde cannot: confidence must lie in `[0, 1]`.
    pub fn validate(&self) -> AppResult<()> {
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(AppError::MalformedResponse(format!(
                "confidence {} is outside [0, 1]",
                self.confidence
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

impl NotificationVariant {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationVariant::Default => "toast-default",
            NotificationVariant::Destructive => "toast-destructive",
        }
    }
}

/// A transient, dismissable message for the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}

impl From<&AppError> for Notification {
    fn from(err: &AppError) -> Self {
        Notification::destructive(err.title(), err.to_string())
    }
}

/// A notification on screen, as held by the toast stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}
