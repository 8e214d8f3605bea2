//! Analysis results panel.
//!
//! Read-only rendering of an [`AnalysisResult`]: summary, one card per
//! medication, instructions, warnings, actions and the medical disclaimer.

use leptos::*;

use crate::components::use_notices;
use crate::services::download_json;
use crate::types::{AnalysisResult, Medication};
use crate::DOWNLOAD_FILENAME;

/// Display data for one medication card.
#[derive(Clone, Debug, PartialEq)]
pub struct MedicationCard {
    pub name: String,
    pub dosage: String,
    /// Labelled facts shown under the name, in display order.
    pub details: [(&'static str, String); 3],
}

impl From<&Medication> for MedicationCard {
    fn from(med: &Medication) -> Self {
        Self {
            name: med.name.clone(),
            dosage: med.dosage.clone(),
            details: [
                ("Frequency", med.frequency.clone()),
                ("Duration", med.duration.clone()),
                ("Purpose", med.purpose.clone()),
            ],
        }
    }
}

/// Everything the panel shows, extracted from the analysis up front.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub summary: String,
    pub medications_heading: String,
    pub medications: Vec<MedicationCard>,
    pub instructions: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<&AnalysisResult> for ResultsView {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            summary: result.summary.clone(),
            medications_heading: format!("Medications ({})", result.medications.len()),
            medications: result.medications.iter().map(MedicationCard::from).collect(),
            instructions: result.instructions.clone(),
            warnings: result.warnings.clone(),
        }
    }
}

#[component]
pub fn ResultsDisplay(
    result: AnalysisResult,
    /// Asks the page to drop this result and go back to the upload zone.
    #[prop(into)]
    on_analyze_another: Callback<()>,
) -> impl IntoView {
    let notices = use_notices();
    let results = ResultsView::from(&result);

    let on_download = move |_| {
        if let Err(e) = download_json(DOWNLOAD_FILENAME, &result) {
            log::error!("❌ Download failed: {}", e);
            notices.error(e.notice_title(), e.notice_description());
        }
    };

    view! {
        <section class="results-section">
            <div class="section-heading">
                <span class="pill">"📄 Analysis Results"</span>
                <h2>"Your Medical Document Summary"</h2>
                <p class="subtitle">
                    "Clear, easy-to-understand information about your prescription"
                </p>
            </div>

            <div class="results-grid">
                <div class="results-main">
                    <div class="card">
                        <div class="card-header">
                            <div class="card-title">"❤️ Summary"</div>
                            <div class="card-description">
                                "What this prescription is for and how to take it"
                            </div>
                        </div>
                        <p class="summary-text">{results.summary}</p>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <div class="card-title">"💊 " {results.medications_heading}</div>
                            <div class="card-description">
                                "Detailed information about each medication"
                            </div>
                        </div>
                        <div class="medication-list">
                            {results.medications.into_iter().map(|card| view! {
                                <div class="medication-card">
                                    <div class="medication-header">
                                        <h4 class="medication-name">{card.name}</h4>
                                        <span class="badge">{card.dosage}</span>
                                    </div>
                                    <div class="medication-details">
                                        {card.details.into_iter().map(|(label, value)| view! {
                                            <div>
                                                <div class="detail-label">{label}</div>
                                                <div class="detail-value">{value}</div>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <div class="card-title">"🕒 Instructions"</div>
                            <div class="card-description">
                                "Important guidelines for taking your medication"
                            </div>
                        </div>
                        <ul class="bullet-list">
                            {results.instructions.into_iter().map(|instruction| view! {
                                <li><span class="bullet"></span>{instruction}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="results-sidebar">
                    <div class="card card-warning">
                        <div class="card-header">
                            <div class="card-title">"⚠️ Important Warnings"</div>
                            <div class="card-description">"Please read carefully"</div>
                        </div>
                        <ul class="warning-list">
                            {results.warnings.into_iter().map(|warning| view! {
                                <li>"⚠️ " {warning}</li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <div class="card-title">"🔗 Actions"</div>
                            <div class="card-description">"Save or share your results"</div>
                        </div>
                        <div class="action-list">
                            <button class="btn btn-outline btn-block" on:click=on_download>
                                "⬇️ Download Summary"
                            </button>
                            <button class="btn btn-outline btn-block" disabled=true title="Coming soon">
                                "🔗 Share with Doctor"
                            </button>
                            <button class="btn btn-outline btn-block" disabled=true title="Coming soon">
                                "❤️ Save to Health Records"
                            </button>
                        </div>
                    </div>

                    <div class="card card-info">
                        <div class="card-title">"ℹ️ Medical Disclaimer"</div>
                        <p class="disclaimer">
                            "This analysis is for informational purposes only. Always consult "
                            "your healthcare provider for medical advice and never stop taking "
                            "prescribed medications without professional guidance."
                        </p>
                    </div>
                </div>
            </div>

            <div class="results-footer">
                <button class="btn btn-primary btn-lg" on:click=move |_| on_analyze_another.call(())>
                    "Analyze Another Document"
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_analysis;

    fn medication(name: &str) -> Medication {
        Medication {
            name: name.to_string(),
            dosage: "10mg".to_string(),
            frequency: "Once daily".to_string(),
            duration: "30 days".to_string(),
            purpose: "Testing".to_string(),
        }
    }

    #[test]
    fn test_one_card_per_medication_in_order() {
        let mut result = mock_analysis();
        result.medications = vec![medication("Lisinopril"), medication("Metformin"), medication("Atorvastatin")];

        let view = ResultsView::from(&result);
        let names: Vec<&str> = view.medications.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Lisinopril", "Metformin", "Atorvastatin"]);
        assert_eq!(view.medications_heading, "Medications (3)");
    }

    #[test]
    fn test_empty_medication_list() {
        let mut result = mock_analysis();
        result.medications.clear();

        let view = ResultsView::from(&result);
        assert!(view.medications.is_empty());
        assert_eq!(view.medications_heading, "Medications (0)");
    }

    #[test]
    fn test_card_details_order() {
        let view = ResultsView::from(&mock_analysis());
        let card = &view.medications[0];
        assert_eq!(card.dosage, "500mg");
        assert_eq!(
            card.details,
            [
                ("Frequency", "3 times daily".to_string()),
                ("Duration", "7 days".to_string()),
                ("Purpose", "Antibiotic for bacterial infection".to_string()),
            ]
        );
        assert_eq!(view.instructions, mock_analysis().instructions);
        assert_eq!(view.warnings, mock_analysis().warnings);
    }
}
