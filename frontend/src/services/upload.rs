//! Upload zone state machine.
//!
//! ```text
//! Empty ──select──▶ FileSelected ──start──▶ Processing ──complete──▶ Completed
//!   ▲                    │  ▲                    │
//!   │                    │  └──────start─────────┴──fail──▶ Failed
//!   └────────clear───────┴───────────────────────────────────────┘
//! ```
//!
//! The machine only tracks metadata. The browser `File` and the object URL
//! behind the thumbnail are owned by the component; every transition that
//! drops a file hands its preview URL back so the caller can revoke it.

use crate::config::{ACCEPTED_MIME_PREFIX, MAX_FILE_SIZE};
use crate::types::{AnalysisResult, AppError, AppResult, UploadedFile};

/// Where the upload zone currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Empty,
    FileSelected,
    Processing,
    Completed,
    Failed,
}

/// Message shown when the simulated analysis fails.
pub const PROCESSING_ERROR_MESSAGE: &str = "Failed to process the document. Please try again.";

/// Check a candidate file against the type and size limits.
pub fn validate_file(mime_type: &str, size_bytes: u64) -> AppResult<()> {
    if !mime_type.starts_with(ACCEPTED_MIME_PREFIX) {
        return Err(AppError::InvalidFileType(mime_type.to_string()));
    }

    if size_bytes > MAX_FILE_SIZE {
        return Err(AppError::FileTooLarge {
            size: size_bytes,
            max: MAX_FILE_SIZE,
        });
    }

    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    phase: UploadPhase,
    file: Option<UploadedFile>,
    is_dragging: bool,
    progress: u8,
    result: Option<AnalysisResult>,
    error: Option<String>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.file.as_ref().and_then(|f| f.preview_url.as_deref())
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Highlight the drop zone. Only meaningful while nothing is selected.
    pub fn drag_enter(&mut self) {
        if self.phase == UploadPhase::Empty {
            self.is_dragging = true;
        }
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    /// Take a new file, replacing any previous one and its result.
    ///
    /// Returns the preview URL of the replaced file, if any. Rejected files
    /// leave the state untouched.
    pub fn select(&mut self, file: UploadedFile) -> AppResult<Option<String>> {
        if self.phase == UploadPhase::Processing {
            return Err(AppError::Busy);
        }
        validate_file(&file.mime_type, file.size_bytes)?;

        let released = self.file.take().and_then(|f| f.preview_url);
        self.file = Some(file);
        self.phase = UploadPhase::FileSelected;
        self.is_dragging = false;
        self.progress = 0;
        self.result = None;
        self.error = None;

        Ok(released)
    }

    /// Attach the thumbnail URL to the held file.
    ///
    /// Returns a URL the caller must revoke: the thumbnail it replaced, or
    /// `url` itself when no file is held.
    pub fn attach_preview(&mut self, url: String) -> Option<String> {
        match self.file.as_mut() {
            Some(file) => file.preview_url.replace(url),
            None => Some(url),
        }
    }

    /// Begin the simulated analysis. Retrying after a failure is allowed.
    pub fn start(&mut self) -> AppResult<()> {
        match self.phase {
            UploadPhase::FileSelected | UploadPhase::Failed => {
                self.phase = UploadPhase::Processing;
                self.progress = 0;
                self.error = None;
                Ok(())
            }
            UploadPhase::Processing => Err(AppError::Busy),
            UploadPhase::Empty => Err(AppError::InvalidTransition("no file selected")),
            UploadPhase::Completed => Err(AppError::InvalidTransition("analysis already completed")),
        }
    }

    /// Record a progress tick. Ignored outside of processing.
    pub fn set_progress(&mut self, percent: u8) {
        if self.phase == UploadPhase::Processing {
            self.progress = percent.min(100);
        }
    }

    pub fn complete(&mut self, result: AnalysisResult) -> AppResult<()> {
        if self.phase != UploadPhase::Processing {
            return Err(AppError::InvalidTransition("not processing"));
        }
        self.phase = UploadPhase::Completed;
        self.result = Some(result);
        Ok(())
    }

    pub fn fail(&mut self) -> AppResult<()> {
        if self.phase != UploadPhase::Processing {
            return Err(AppError::InvalidTransition("not processing"));
        }
        self.phase = UploadPhase::Failed;
        self.error = Some(PROCESSING_ERROR_MESSAGE.to_string());
        Ok(())
    }

    /// Drop everything and return to `Empty`.
    ///
    /// Returns the preview URL that must be revoked, if any.
    pub fn clear(&mut self) -> AppResult<Option<String>> {
        if self.phase == UploadPhase::Processing {
            return Err(AppError::Busy);
        }
        let released = self.file.take().and_then(|f| f.preview_url);
        *self = Self::default();
        Ok(released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analysis::{mock_analysis, progress_schedule};

    fn png(size: u64) -> UploadedFile {
        UploadedFile::new("prescription.png", "image/png", size)
    }

    fn selected() -> UploadState {
        let mut state = UploadState::new();
        state.select(png(2048)).unwrap();
        state.attach_preview("blob:preview-1".to_string());
        state
    }

    #[test]
    fn test_validate_file() {
        assert!(validate_file("image/jpeg", 1).is_ok());
        assert!(validate_file("image/png", MAX_FILE_SIZE).is_ok());
        assert_eq!(
            validate_file("application/pdf", 1),
            Err(AppError::InvalidFileType("application/pdf".to_string()))
        );
        assert_eq!(
            validate_file("image/png", MAX_FILE_SIZE + 1),
            Err(AppError::FileTooLarge {
                size: MAX_FILE_SIZE + 1,
                max: MAX_FILE_SIZE
            })
        );
    }

    #[test]
    fn test_non_image_stays_empty() {
        let mut state = UploadState::new();
        for mime in ["application/pdf", "text/plain", ""] {
            let err = state
                .select(UploadedFile::new("doc", mime, 100))
                .unwrap_err();
            assert!(matches!(err, AppError::InvalidFileType(_)));
        }
        assert_eq!(state.phase(), UploadPhase::Empty);
        assert!(state.file().is_none());
    }

    #[test]
    fn test_oversized_image_stays_empty() {
        let mut state = UploadState::new();
        let err = state.select(png(MAX_FILE_SIZE + 1)).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { .. }));
        assert_eq!(state, UploadState::new());
    }

    #[test]
    fn test_valid_image_selects_once() {
        let mut state = UploadState::new();
        state.drag_enter();
        assert!(state.is_dragging());

        let released = state.select(png(2048)).unwrap();
        assert_eq!(released, None);
        assert_eq!(state.phase(), UploadPhase::FileSelected);
        assert_eq!(state.file().map(|f| f.name.as_str()), Some("prescription.png"));
        assert!(!state.is_dragging());

        // Dragging over a populated zone does nothing.
        state.drag_enter();
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let mut state = selected();
        assert!(state.select(UploadedFile::new("a.txt", "text/plain", 1)).is_err());
        assert_eq!(state.phase(), UploadPhase::FileSelected);
        assert_eq!(state.preview_url(), Some("blob:preview-1"));
    }

    #[test]
    fn test_replacing_file_releases_preview_and_result() {
        let mut state = selected();
        state.start().unwrap();
        state.complete(mock_analysis()).unwrap();

        let released = state.select(png(4096)).unwrap();
        assert_eq!(released.as_deref(), Some("blob:preview-1"));
        assert_eq!(state.phase(), UploadPhase::FileSelected);
        assert!(state.result().is_none());
        assert!(state.preview_url().is_none());
    }

    #[test]
    fn test_analysis_reaches_completed() {
        let mut state = selected();
        state.start().unwrap();
        assert_eq!(state.phase(), UploadPhase::Processing);
        assert_eq!(state.progress(), 0);

        for step in progress_schedule() {
            state.set_progress(step.percent);
        }
        assert_eq!(state.progress(), 100);

        state.complete(mock_analysis()).unwrap();
        assert_eq!(state.phase(), UploadPhase::Completed);
        assert_eq!(state.result(), Some(&mock_analysis()));
    }

    #[test]
    fn test_processing_refuses_select_and_clear() {
        let mut state = selected();
        state.start().unwrap();

        assert_eq!(state.select(png(10)), Err(AppError::Busy));
        assert_eq!(state.clear(), Err(AppError::Busy));
        assert_eq!(state.start(), Err(AppError::Busy));
        assert_eq!(state.phase(), UploadPhase::Processing);
    }

    #[test]
    fn test_start_requires_file() {
        let mut state = UploadState::new();
        assert!(matches!(state.start(), Err(AppError::InvalidTransition(_))));
        assert!(state.complete(mock_analysis()).is_err());
        assert!(state.fail().is_err());
    }

    #[test]
    fn test_progress_ignored_outside_processing() {
        let mut state = selected();
        state.set_progress(50);
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut state = selected();
        state.start().unwrap();
        state.set_progress(40);
        state.fail().unwrap();
        assert_eq!(state.phase(), UploadPhase::Failed);
        assert_eq!(state.error(), Some(PROCESSING_ERROR_MESSAGE));

        state.start().unwrap();
        assert_eq!(state.progress(), 0);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_clear_from_completed() {
        let mut state = selected();
        state.start().unwrap();
        state.complete(mock_analysis()).unwrap();

        let released = state.clear().unwrap();
        assert_eq!(released.as_deref(), Some("blob:preview-1"));
        assert_eq!(state.phase(), UploadPhase::Empty);
        assert!(state.preview_url().is_none());
        assert!(state.result().is_none());
        assert_eq!(state, UploadState::new());
    }

    #[test]
    fn test_attach_preview_without_file() {
        let mut state = UploadState::new();
        let orphan = state.attach_preview("blob:orphan".to_string());
        assert_eq!(orphan.as_deref(), Some("blob:orphan"));
    }
}
