//! Image upload zone with drag & drop support.
//!
//! Handles file selection, validation, the simulated analysis run and
//! thumbnail lifetime. State transitions live in [`UploadState`]; this
//! component wires them to DOM events and timers.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::{use_notices, ProgressBar};
use crate::services::{
    create_preview_url, open_file_picker, revoke_preview_url, simulate_analysis, UploadPhase,
    UploadState,
};
use crate::types::{AnalysisResult, AppError, AppResult, UploadedFile};
use crate::UPLOAD_ANCHOR;

const FILE_INPUT_ID: &str = "file-input";

/// Run `op` against the upload state, treating a disposed signal as an error.
fn apply<T>(
    state: RwSignal<UploadState>,
    op: impl FnOnce(&mut UploadState) -> AppResult<T>,
) -> AppResult<T> {
    state
        .try_update(op)
        .unwrap_or(Err(AppError::InvalidTransition("upload zone disposed")))
}

#[component]
pub fn UploadZone(
    /// Receives the analysis once the simulated run completes.
    #[prop(into)]
    on_analysis_complete: Callback<AnalysisResult>,
    /// Called whenever the held result is discarded (new file or clear).
    #[prop(optional, into)]
    on_reset: Option<Callback<()>>,
    /// Clears the zone each time it is notified.
    #[prop(optional)]
    reset: Option<Trigger>,
) -> impl IntoView {
    let notices = use_notices();
    let state = create_rw_signal(UploadState::new());

    let phase = create_memo(move |_| state.with(|s| s.phase()));
    let file = create_memo(move |_| state.with(|s| s.file().cloned()));
    let is_dragging = create_memo(move |_| state.with(|s| s.is_dragging()));
    let progress = Signal::derive(move || state.with(|s| s.progress()));

    let notify_reset = move || {
        if let Some(callback) = on_reset {
            callback.call(());
        }
    };

    let select_file = move |browser_file: File| {
        let candidate = UploadedFile::new(
            browser_file.name(),
            browser_file.type_(),
            browser_file.size() as u64,
        );
        let name = candidate.name.clone();

        match apply(state, |s| s.select(candidate)) {
            Ok(released) => {
                if let Some(url) = released {
                    revoke_preview_url(&url);
                }
                match create_preview_url(&browser_file) {
                    Ok(url) => {
                        if let Some(orphan) = state.try_update(|s| s.attach_preview(url)).flatten() {
                            revoke_preview_url(&orphan);
                        }
                    }
                    Err(e) => log::warn!("No thumbnail for {}: {}", name, e),
                }
                notify_reset();
                notices.success(
                    "File uploaded successfully",
                    format!("{} is ready for analysis", name),
                );
            }
            Err(e) => {
                log::warn!("🚫 Rejected {}: {}", name, e);
                notices.error(e.notice_title(), e.notice_description());
            }
        }
    };

    let clear_zone = move || match apply(state, UploadState::clear) {
        Ok(released) => {
            if let Some(url) = released {
                revoke_preview_url(&url);
            }
            log::info!("🗑️ Upload zone cleared");
        }
        Err(e) => log::warn!("Cannot clear upload zone: {}", e),
    };

    if let Some(reset) = reset {
        create_effect(move |initialized: Option<()>| {
            reset.track();
            if initialized.is_some() {
                clear_zone();
            }
        });
    }

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(browser_file) = input.files().and_then(|files| files.get(0)) {
            select_file(browser_file);
        }
        // Allow picking the same file again.
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !state.with_untracked(|s| s.is_dragging()) {
            state.update(|s| s.drag_enter());
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.drag_leave());
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(browser_file) = dropped {
            select_file(browser_file);
        }
    };

    let start_analysis = move |_| {
        if let Err(e) = apply(state, UploadState::start) {
            log::warn!("Cannot start analysis: {}", e);
            return;
        }
        log::info!("🔬 Starting document analysis");

        spawn_local(async move {
            let outcome = simulate_analysis(move |percent| {
                state.update(|s| s.set_progress(percent));
            })
            .await;

            match outcome {
                Ok(result) => match apply(state, |s| s.complete(result.clone())) {
                    Ok(()) => {
                        log::info!("✅ Analysis complete");
                        on_analysis_complete.call(result);
                        notices.success(
                            "Analysis complete!",
                            "Your medical document has been successfully analyzed",
                        );
                    }
                    Err(e) => log::warn!("Dropping analysis result: {}", e),
                },
                Err(e) => {
                    log::error!("❌ Analysis failed: {}", e);
                    let _ = apply(state, UploadState::fail);
                    notices.error(e.notice_title(), e.notice_description());
                }
            }
        });
    };

    let analyze_another = move |_| {
        clear_zone();
        notify_reset();
    };

    view! {
        <section class="upload-section" id=UPLOAD_ANCHOR>
            <div class="section-heading">
                <h2>"Upload Your Medical Document"</h2>
                <p class="subtitle">
                    "Drag and drop your prescription or medical report, or click to browse"
                </p>
            </div>

            <div class="card upload-card">
                <Show
                    when=move || file.get().is_none()
                    fallback=move || view! {
                        <div class="upload-selected">
                            <div class="file-row">
                                <div class="file-info">
                                    {move || file.get().and_then(|f| f.preview_url).map(|url| view! {
                                        <img src=url alt="Document preview" class="file-thumb"/>
                                    })}
                                    <div>
                                        <div class="file-name">
                                            {move || file.get().map(|f| f.name).unwrap_or_default()}
                                        </div>
                                        <div class="file-size">
                                            {move || file.get().map(|f| f.size_label()).unwrap_or_default()}
                                        </div>
                                    </div>
                                </div>
                                <button
                                    class="btn btn-ghost btn-icon"
                                    aria-label="Remove file"
                                    on:click=move |_| clear_zone()
                                    disabled=move || phase.get() == UploadPhase::Processing
                                >
                                    "✕"
                                </button>
                            </div>

                            <Show when=move || phase.get() == UploadPhase::Processing>
                                <ProgressBar progress=progress/>
                            </Show>

                            <Show when=move || phase.get() == UploadPhase::Failed>
                                <div class="alert alert-error">
                                    "⚠️ "
                                    {move || state.with(|s| s.error().map(str::to_string)).unwrap_or_default()}
                                </div>
                            </Show>

                            <Show when=move || phase.get() == UploadPhase::Completed>
                                <div class="alert alert-success">
                                    "✅ Document analysis completed successfully!"
                                </div>
                            </Show>

                            <div class="upload-actions">
                                <Show when=move || matches!(phase.get(), UploadPhase::FileSelected | UploadPhase::Failed)>
                                    <button class="btn btn-primary btn-lg" on:click=start_analysis>
                                        "👁️ Analyze Document"
                                    </button>
                                </Show>
                                <Show when=move || phase.get() == UploadPhase::Completed>
                                    <button class="btn btn-outline btn-lg" on:click=analyze_another>
                                        "Analyze Another Document"
                                    </button>
                                </Show>
                            </div>
                        </div>
                    }
                >
                    <div
                        class="drop-zone"
                        class:dragging=move || is_dragging.get()
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                    >
                        <div class="upload-icon">"📤"</div>
                        <div class="upload-text">"Drop your medical document here"</div>
                        <div class="upload-hint">
                            "Supports JPG, PNG, PDF, and other image formats up to 10MB"
                        </div>
                        <button
                            class="btn btn-primary btn-lg"
                            on:click=move |_| open_file_picker(FILE_INPUT_ID)
                        >
                            "🖼️ Browse Files"
                        </button>
                        <input
                            type="file"
                            id=FILE_INPUT_ID
                            accept="image/*"
                            style="display:none"
                            on:change=on_file_change
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}
