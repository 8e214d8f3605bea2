//! Simulated document analysis.
//!
//! No OCR or language model runs here. The "pipeline" walks a fixed
//! progress schedule, sleeping between steps, and then hands back the
//! same canned [`AnalysisResult`] every time.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;

use crate::config::{AI_STEP_DELAY_MS, FINALIZE_DELAY_MS, OCR_STEP_DELAY_MS};
use crate::types::{AnalysisResult, AppResult, Medication};

/// One tick of the progress bar: show `percent`, then wait `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressStep {
    pub percent: u8,
    pub delay_ms: u32,
}

/// Pipeline stage shown next to the spinner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Extracting,
    Analyzing,
    Finalizing,
}

impl Stage {
    pub fn for_progress(percent: u8) -> Self {
        if percent < 30 {
            Stage::Extracting
        } else if percent < 90 {
            Stage::Analyzing
        } else {
            Stage::Finalizing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Extracting => "Extracting text...",
            Stage::Analyzing => "Analyzing with AI...",
            Stage::Finalizing => "Finalizing results...",
        }
    }
}

/// The scripted schedule: OCR from 0 to 30 by fives, AI from 35 to 85 by
/// tens, then 100.
pub fn progress_schedule() -> Vec<ProgressStep> {
    let ocr = (0..=30).step_by(5).map(|percent| ProgressStep {
        percent,
        delay_ms: OCR_STEP_DELAY_MS,
    });
    let ai = (35..=90).step_by(10).map(|percent| ProgressStep {
        percent,
        delay_ms: AI_STEP_DELAY_MS,
    });
    let done = std::iter::once(ProgressStep {
        percent: 100,
        delay_ms: FINALIZE_DELAY_MS,
    });

    ocr.chain(ai).chain(done).collect()
}

/// The canned analysis returned for every document.
pub fn mock_analysis() -> AnalysisResult {
    AnalysisResult {
        summary: "This prescription contains Amoxicillin 500mg to be taken three times daily \
                  for 7 days to treat a bacterial infection."
            .to_string(),
        medications: vec![Medication {
            name: "Amoxicillin".to_string(),
            dosage: "500mg".to_string(),
            frequency: "3 times daily".to_string(),
            duration: "7 days".to_string(),
            purpose: "Antibiotic for bacterial infection".to_string(),
        }],
        instructions: vec![
            "Take with food to reduce stomach upset".to_string(),
            "Complete the full course even if you feel better".to_string(),
            "Do not skip doses".to_string(),
        ],
        warnings: vec![
            "May cause nausea or diarrhea".to_string(),
            "Inform doctor if allergic reactions occur".to_string(),
        ],
    }
}

/// Walk the schedule with the given sleeper, reporting each percentage.
pub async fn run_schedule<S, F>(sleep: S, mut on_progress: impl FnMut(u8)) -> AppResult<AnalysisResult>
where
    S: Fn(u32) -> F,
    F: Future<Output = ()>,
{
    for step in progress_schedule() {
        on_progress(step.percent);
        sleep(step.delay_ms).await;
    }

    Ok(mock_analysis())
}

/// Run the simulated pipeline on browser timers.
pub async fn simulate_analysis(on_progress: impl FnMut(u8)) -> AppResult<AnalysisResult> {
    log::debug!("🧪 Running simulated OCR + AI pipeline");
    run_schedule(TimeoutFuture::new, on_progress).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_schedule_percentages() {
        let percents: Vec<u8> = progress_schedule().iter().map(|s| s.percent).collect();
        assert_eq!(
            percents,
            vec![0, 5, 10, 15, 20, 25, 30, 35, 45, 55, 65, 75, 85, 100]
        );
    }

    #[test]
    fn test_schedule_delays_per_phase() {
        let schedule = progress_schedule();
        assert!(schedule[..7].iter().all(|s| s.delay_ms == OCR_STEP_DELAY_MS));
        assert!(schedule[7..13].iter().all(|s| s.delay_ms == AI_STEP_DELAY_MS));
        assert_eq!(schedule.last().map(|s| s.delay_ms), Some(FINALIZE_DELAY_MS));

        let total: u32 = schedule.iter().map(|s| s.delay_ms).sum();
        assert_eq!(total, 7 * 200 + 6 * 300 + 500);
    }

    #[test]
    fn test_stage_boundaries() {
        assert_eq!(Stage::for_progress(0), Stage::Extracting);
        assert_eq!(Stage::for_progress(29), Stage::Extracting);
        assert_eq!(Stage::for_progress(30), Stage::Analyzing);
        assert_eq!(Stage::for_progress(89), Stage::Analyzing);
        assert_eq!(Stage::for_progress(90), Stage::Finalizing);
        assert_eq!(Stage::for_progress(100).label(), "Finalizing results...");
    }

    #[test]
    fn test_run_schedule_reports_every_step() {
        let mut seen = Vec::new();
        let slept = Cell::new(0u32);

        let result = block_on(run_schedule(
            |ms| {
                slept.set(slept.get() + ms);
                std::future::ready(())
            },
            |percent| seen.push(percent),
        ))
        .unwrap();

        assert_eq!(seen.len(), progress_schedule().len());
        assert_eq!(seen.last(), Some(&100));
        assert_eq!(slept.get(), 3_700);
        assert_eq!(result, mock_analysis());
    }

    #[test]
    fn test_mock_analysis_is_constant() {
        let first = mock_analysis();
        let second = mock_analysis();
        assert_eq!(first, second);
        assert_eq!(first.medications.len(), 1);
        assert_eq!(first.medications[0].name, "Amoxicillin");
        assert_eq!(first.instructions.len(), 3);
        assert_eq!(first.warnings.len(), 2);
    }
}
