//! Hero section component

use leptos::*;
use crate::services::scroll_to;
use crate::UPLOAD_ANCHOR;

const STATS: [(&str, &str); 3] = [
    ("10k+", "Documents Analyzed"),
    ("95%", "Accuracy Rate"),
    ("24/7", "Available"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <span class="pill">"🧠 AI-Powered Medical Assistant"</span>
                <h1>
                    "Transform Complex "
                    <span class="highlight">"Medical Documents"</span>
                    " Into Clear Summaries"
                </h1>
                <p class="subtitle">
                    "Upload your prescriptions, medical reports, or handwritten notes. "
                    "Our AI instantly converts complex medical jargon into easy-to-understand language."
                </p>

                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" on:click=move |_| scroll_to(UPLOAD_ANCHOR)>
                        "📤 Start Analyzing Documents"
                    </button>
                    <a href="#features" class="btn btn-outline btn-lg">"Learn More"</a>
                </div>

                <div class="hero-stats">
                    {STATS.iter().map(|(value, label)| view! {
                        <div class="stat">
                            <div class="stat-value">{*value}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="hero-visual">
                <div class="hero-image" role="img" aria-label="Medical document analysis with AI">
                    "📋"
                </div>
                <div class="floating-card floating-left">
                    <span class="floating-icon">"📄"</span>
                    <div>
                        <div class="floating-title">"OCR Processing"</div>
                        <div class="floating-text">"Extract text from images"</div>
                    </div>
                </div>
                <div class="floating-card floating-right">
                    <span class="floating-icon">"✔️"</span>
                    <div>
                        <div class="floating-title">"AI Analysis"</div>
                        <div class="floating-text">"Simplified explanations"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
