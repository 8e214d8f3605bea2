//! UI Components for the RxGenerator landing page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with mobile menu
//! - [`Hero`] - Main title, calls to action and stats
//! - [`Features`] - Feature card grid
//!
//! # Feature Components
//! - [`UploadZone`] - Image upload with drag & drop and simulated analysis
//! - [`ProgressBar`] - Analysis progress indicator
//! - [`ResultsDisplay`] - Analysis summary, medications and warnings
//! - [`NoticeStack`] - Toast notifications

mod header;
mod hero;
mod features;
mod upload;
mod progress;
mod results;
mod notices;

pub use header::*;
pub use hero::*;
pub use features::*;
pub use upload::*;
pub use progress::*;
pub use results::*;
pub use notices::*;
