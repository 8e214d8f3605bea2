//! RxGenerator - Frontend Rust/Leptos Application
//!
//! A WebAssembly landing page for an AI medical-document assistant, with
//! an upload widget that simulates OCR + AI analysis in the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation, mobile menu)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  IndexPage                                                   │
//! │  ├── Hero (title, calls to action)                          │
//! │  ├── Features (card grid)                                   │
//! │  ├── UploadZone ──on_analysis_complete──┐                   │
//! │  └── ResultsDisplay (when a result is held) ◀┘              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NoticeStack (toasts)                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (AnalysisResult, UploadedFile, Notice, etc.)
//! - [`components`] - UI components (Header, UploadZone, ResultsDisplay, etc.)
//! - [`services`] - Simulated analysis, upload state machine, browser helpers

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Analysis
    AnalysisResult, Medication,
    // Upload
    UploadedFile,
    // Notices
    Notice, NoticeLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the application on `<body>`. Called from `main`.
pub fn mount() {
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Notices::new());

    view! {
        <Title text=format!("{} - {}", APP_NAME, APP_TAGLINE)/>
        <Meta
            name="description"
            content="Turn prescriptions and medical reports into clear, plain-language summaries."
        />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=IndexPage/>
                </Routes>
            </main>
        </Router>
        <NoticeStack/>
    }
}

#[component]
fn IndexPage() -> impl IntoView {
    // The one analysis currently on display
    let analysis = create_rw_signal(None::<AnalysisResult>);
    // Tells the upload zone to clear itself
    let reset_upload = create_trigger();

    let on_analysis_complete = move |result: AnalysisResult| {
        analysis.set(Some(result));
        scroll_to_after(RESULTS_ANCHOR, RESULTS_SCROLL_DELAY_MS);
    };

    let on_upload_reset = move |_: ()| {
        if analysis.with_untracked(Option::is_some) {
            log::debug!("Dropping previous analysis");
            analysis.set(None);
        }
    };

    let analyze_another = move |_: ()| {
        analysis.set(None);
        reset_upload.notify();
        scroll_to(UPLOAD_ANCHOR);
    };

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <Features/>

            <UploadZone
                on_analysis_complete=on_analysis_complete
                on_reset=on_upload_reset
                reset=reset_upload
            />

            // Results appear once an analysis completes
            {move || analysis.get().map(|result| view! {
                <div id=RESULTS_ANCHOR>
                    <ResultsDisplay result=result on_analyze_another=analyze_another/>
                </div>
            })}
        </div>
    }
}
