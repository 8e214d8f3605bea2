//! Application configuration.
//!
//! Centralized configuration for the RxGenerator frontend.
//! Everything is compiled in; the page has no backend to ask.

/// Product name shown in the header and the document title.
pub const APP_NAME: &str = "RxGenerator";

/// Tagline displayed under the logo.
pub const APP_TAGLINE: &str = "AI Medical Assistant";

/// Maximum file size for upload (in bytes).
///
/// 10 MB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// MIME prefix a selected file must carry to be accepted.
pub const ACCEPTED_MIME_PREFIX: &str = "image/";

/// Maximum notices kept on screen at once.
pub const MAX_NOTICES: usize = 5;

/// Lifetime of a notice before it is dismissed automatically.
pub const NOTICE_TTL_MS: u32 = 5_000;

/// Pause after each OCR progress step.
pub const OCR_STEP_DELAY_MS: u32 = 200;

/// Pause after each AI analysis progress step.
pub const AI_STEP_DELAY_MS: u32 = 300;

/// Pause after progress reaches 100%.
pub const FINALIZE_DELAY_MS: u32 = 500;

/// Delay before scrolling to freshly rendered results.
pub const RESULTS_SCROLL_DELAY_MS: u32 = 100;

/// Element id of the upload section.
pub const UPLOAD_ANCHOR: &str = "upload";

/// Element id of the results section.
pub const RESULTS_ANCHOR: &str = "results";

/// Filename used when the summary is downloaded.
pub const DOWNLOAD_FILENAME: &str = "medical-summary.json";
