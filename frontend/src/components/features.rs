//! Feature grid

use leptos::*;

/// One card of the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent class for the icon tile
    pub accent: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🖼️",
        title: "Smart OCR Technology",
        description: "Advanced text extraction from handwritten prescriptions, typed reports, and medical documents with high accuracy.",
        accent: "accent-blue",
    },
    Feature {
        icon: "🧠",
        title: "AI Medical Assistant",
        description: "GPT-4 powered analysis that understands medical terminology and translates complex jargon into plain language.",
        accent: "accent-green",
    },
    Feature {
        icon: "🛡️",
        title: "HIPAA Compliant",
        description: "Your medical information is processed securely with enterprise-grade encryption and privacy protection.",
        accent: "accent-purple",
    },
    Feature {
        icon: "⏱️",
        title: "Instant Results",
        description: "Get your medical document summary in seconds, not hours. Perfect for urgent medication questions.",
        accent: "accent-orange",
    },
    Feature {
        icon: "💬",
        title: "Clear Explanations",
        description: "Receive easy-to-understand summaries with dosage instructions, side effects, and usage guidelines.",
        accent: "accent-teal",
    },
    Feature {
        icon: "👪",
        title: "Family Friendly",
        description: "Perfect for patients, caregivers, and family members who need to understand medical instructions.",
        accent: "accent-pink",
    },
];

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <div class=format!("feature-icon {}", feature.accent)>{feature.icon}</div>
            <div class="card-title">{feature.title}</div>
            <p class="card-description">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features-section" id="features">
            <div class="section-heading" id="how-it-works">
                <span class="pill">"🩺 How It Works"</span>
                <h2>"Simplifying Healthcare, One Document at a Time"</h2>
                <p class="subtitle">
                    "Our advanced AI technology makes complex medical information accessible to everyone, "
                    "improving health literacy and medication compliance."
                </p>
            </div>

            <div class="feature-grid">
                {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
            </div>

            <div class="card cta-card">
                <div>
                    <h3>"Ready to Get Started?"</h3>
                    <p class="card-description">
                        "Upload your first medical document and see the magic happen"
                    </p>
                </div>
                <div class="cta-icons">
                    <span class="pulse">"📤"</span>
                    <span class="pulse" style="animation-delay: 0.5s">"👁️"</span>
                    <span class="pulse" style="animation-delay: 1s">"🧠"</span>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_feature_titles_unique() {
        let titles: HashSet<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }
}
