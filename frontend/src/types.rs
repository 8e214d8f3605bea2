//! Common types for the RxGenerator frontend.
//!
//! This module contains the data structures shared across components:
//! the analysis model, the selected file, notices and errors.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Analysis Types
// =============================================================================

/// A single medication found in a prescription.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    /// Drug name
    pub name: String,
    /// Strength per dose (e.g. "500mg")
    pub dosage: String,
    /// How often to take it
    pub frequency: String,
    /// How long to keep taking it
    pub duration: String,
    /// What it treats
    pub purpose: String,
}

/// Plain-language summary of a medical document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// One-paragraph summary
    pub summary: String,
    /// Medications, in document order
    pub medications: Vec<Medication>,
    /// Usage guidelines
    pub instructions: Vec<String>,
    /// Side effects and precautions
    pub warnings: Vec<String>,
}

// =============================================================================
// Upload Types
// =============================================================================

/// The image currently held by the upload zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    /// Original filename
    pub name: String,
    /// MIME type reported by the browser
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Object URL used for the thumbnail, released on clear
    pub preview_url: Option<String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            preview_url: None,
        }
    }

    /// Size formatted in megabytes with two decimals.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

// =============================================================================
// Notice Types
// =============================================================================

/// Notice severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice-info",
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Error => "notice-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "ℹ️",
            NoticeLevel::Success => "✅",
            NoticeLevel::Error => "❌",
        }
    }
}

/// A transient toast shown in the corner of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Identifier used to dismiss the notice
    pub id: u32,
    /// Severity level
    pub level: NoticeLevel,
    /// Short headline
    pub title: String,
    /// Detail line
    pub description: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Selected file is not an image; carries the MIME type received.
    InvalidFileType(String),
    /// Selected file exceeds the size limit.
    FileTooLarge { size: u64, max: u64 },
    /// The upload zone is running an analysis.
    Busy,
    /// Operation not allowed in the current upload state.
    InvalidTransition(&'static str),
    /// Simulated analysis failed.
    Processing(String),
    /// A browser API call failed.
    Browser(String),
}

impl AppError {
    /// Headline shown in the notice for this error.
    pub fn notice_title(&self) -> &'static str {
        match self {
            AppError::InvalidFileType(_) => "Invalid file type",
            AppError::FileTooLarge { .. } => "File too large",
            AppError::Busy => "Analysis in progress",
            AppError::InvalidTransition(_) => "Action unavailable",
            AppError::Processing(_) => "Processing failed",
            AppError::Browser(_) => "Browser error",
        }
    }

    /// Detail line shown in the notice for this error.
    pub fn notice_description(&self) -> String {
        match self {
            AppError::InvalidFileType(_) => "Please upload an image file (JPG, PNG, etc.)".to_string(),
            AppError::FileTooLarge { .. } => "Please upload an image smaller than 10MB".to_string(),
            AppError::Busy => "Please wait for the current analysis to finish".to_string(),
            AppError::InvalidTransition(_) => "This action is not available right now".to_string(),
            AppError::Processing(_) => "There was an error analyzing your document".to_string(),
            AppError::Browser(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidFileType(mime) => write!(f, "Invalid file type: {:?}", mime),
            AppError::FileTooLarge { size, max } => {
                write!(f, "File too large: {} bytes (max {} bytes)", size, max)
            }
            AppError::Busy => write!(f, "Analysis already in progress"),
            AppError::InvalidTransition(msg) => write!(f, "Invalid transition: {}", msg),
            AppError::Processing(msg) => write!(f, "Processing error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label_uses_two_decimals() {
        let file = UploadedFile::new("scan.png", "image/png", 1_572_864);
        assert_eq!(file.size_label(), "1.50 MB");

        let tiny = UploadedFile::new("dot.png", "image/png", 10);
        assert_eq!(tiny.size_label(), "0.00 MB");
    }

    #[test]
    fn test_analysis_json_shape() {
        let result = AnalysisResult {
            summary: "Summary".to_string(),
            medications: vec![Medication {
                name: "Ibuprofen".to_string(),
                dosage: "200mg".to_string(),
                frequency: "Twice daily".to_string(),
                duration: "3 days".to_string(),
                purpose: "Pain relief".to_string(),
            }],
            instructions: vec!["Take with water".to_string()],
            warnings: vec![],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["medications"][0]["name"], "Ibuprofen");
        assert_eq!(json["warnings"].as_array().unwrap().len(), 0);

        let back: AnalysisResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_error_notice_text() {
        let err = AppError::InvalidFileType("application/pdf".to_string());
        assert_eq!(err.notice_title(), "Invalid file type");
        assert_eq!(err.notice_description(), "Please upload an image file (JPG, PNG, etc.)");

        let err = AppError::FileTooLarge { size: 11, max: 10 };
        assert_eq!(err.notice_title(), "File too large");
        assert_eq!(err.to_string(), "File too large: 11 bytes (max 10 bytes)");
    }

    #[test]
    fn test_notice_level_classes() {
        assert_eq!(NoticeLevel::Success.css_class(), "notice-success");
        assert_eq!(NoticeLevel::Error.emoji(), "❌");
    }
}
