//! Client-side services.
//!
//! Nothing here talks to a server:
//!
//! # Services
//!
//! - [`analysis`] - Scripted progress schedule and the canned analysis
//! - [`upload`] - Upload zone state machine and file validation
//! - [`browser`] - Object URLs, JSON download and smooth scrolling

pub mod analysis;
pub mod upload;
pub mod browser;

pub use analysis::*;
pub use upload::*;
pub use browser::*;
