//! Scan view: upload intake, simulated analysis, and the result panel.

mod processing_card;
mod results_panel;

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use mediscan_core::analysis::{
    Advance, AnalysisPipeline, AnalysisResult, DrugAnalyzer, MockAnalyzer, STAGES,
};
use mediscan_core::upload::{DragTracker, FileCandidate, IntakeOutcome, UploadIntake};

use crate::preview::ImagePreview;
use crate::time::sleep_ms;
use crate::Route;

use processing_card::ProcessingCard;
use results_panel::ResultsPanel;

/// Home view: dropzone while no file is selected, then the selected-file
/// card, the stage checklist during a run, and finally the result panel.
#[component]
pub fn ScanPage() -> Element {
    let mut intake = use_signal(UploadIntake::<ImagePreview>::new);
    let mut pipeline = use_signal(AnalysisPipeline::new);
    let mut result = use_signal(|| None::<AnalysisResult>);
    let mut drag = use_signal(DragTracker::default);
    let mut notice = use_signal(|| None::<String>);

    // Drop release and the file picker funnel into this one path
    let accept_file = move |file: FileData| {
        spawn(async move {
            let name = file.name();
            match file.read_bytes().await {
                Ok(contents) => {
                    let bytes = contents.to_vec();
                    // The extension-based guess only kicks in when the
                    // platform declares no type (see effective_type)
                    let candidate = FileCandidate::new(
                        name.clone(),
                        file.content_type(),
                        bytes.len() as u64,
                    );

                    let outcome =
                        intake
                            .write()
                            .accept(Some(candidate), bytes, |candidate, data| {
                                let mime = candidate
                                    .effective_type()
                                    .unwrap_or_else(|| "image/*".to_string());
                                ImagePreview::from_bytes(data, &mime)
                            });

                    match outcome {
                        IntakeOutcome::Accepted => {
                            info!("📂 Selected image: {name}");
                            result.set(None);
                            notice.set(None);
                        }
                        IntakeOutcome::Rejected(reason) => {
                            info!("Rejected {name}: {reason}");
                            notice.set(Some(reason.to_string()));
                        }
                    }
                }
                Err(e) => {
                    error!("❌ Failed to read {name}: {e}");
                    notice.set(Some(format!("Failed to read {name}: {e}")));
                }
            }
        });
    };

    let mut reset_session = move || {
        intake.write().reset();
        result.set(None);
        notice.set(None);
    };

    let start_analysis = move |_| {
        let Some(bytes) = intake.read().session().map(|s| s.bytes().to_vec()) else {
            return;
        };
        // Re-entrancy guard: a second click while a run is active is a no-op
        if pipeline.write().start().is_err() {
            return;
        }
        result.set(None);

        spawn(async move {
            loop {
                let Some(active) = pipeline.read().active_stage() else {
                    break;
                };
                sleep_ms(STAGES[active].dwell_ms).await;
                if matches!(pipeline.write().advance(), Advance::Finished) {
                    break;
                }
            }

            match MockAnalyzer.analyze(&bytes).await {
                Ok(analysis) => result.set(Some(analysis)),
                Err(e) => {
                    error!("❌ Analysis failed: {e}");
                    notice.set(Some(e.to_string()));
                }
            }
        });
    };

    let has_file = intake.read().has_file();
    let processing = pipeline.read().is_running();
    let analysis = result.read().clone();
    let drag_active = drag.read().is_active();
    let (file_name, file_size_mb) = intake
        .read()
        .session()
        .map(|s| (s.candidate().name.clone(), s.candidate().size_mb()))
        .unwrap_or_default();
    let preview_url = intake
        .read()
        .session()
        .map(|s| s.preview().url().to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "ms-page ms-scan",
            header { class: "ms-hero",
                h1 { class: "ms-hero-title", "Identify Drugs Instantly with AI" }
                Link { class: "ms-hero-link", to: Route::DrugList { search: None },
                    "Browse the drug list →"
                }
            }

            if let Some(message) = notice.read().clone() {
                div { class: "ms-notice", "{message}" }
            }

            if !has_file {
                section {
                    class: if drag_active { "ms-dropzone ms-dropzone--active" } else { "ms-dropzone" },
                    ondragenter: move |evt: DragEvent| {
                        evt.prevent_default();
                        drag.write().enter();
                    },
                    ondragleave: move |evt: DragEvent| {
                        evt.prevent_default();
                        drag.write().leave();
                    },
                    ondragover: move |evt: DragEvent| evt.prevent_default(),
                    ondrop: move |evt: DragEvent| {
                        evt.prevent_default();
                        drag.write().settle();
                        if let Some(file) = evt.files().into_iter().next() {
                            accept_file(file);
                        }
                    },

                    // Invisible input covering the whole zone makes
                    // click-to-browse work without any DOM scripting
                    input {
                        class: "ms-dropzone-input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt: FormEvent| {
                            if let Some(file) = evt.files().into_iter().next() {
                                accept_file(file);
                            }
                        },
                    }

                    div { class: "ms-dropzone-content",
                        div { class: "ms-dropzone-icon", "📷" }
                        p { class: "ms-dropzone-title", "Drag & drop your drug image here" }
                        p { class: "ms-dropzone-subtitle", "or click to browse" }
                        p { class: "ms-dropzone-hint", "Supports JPG, PNG, WEBP formats" }
                    }
                }
            }

            if has_file && !processing && analysis.is_none() {
                div { class: "ms-card ms-file-card",
                    div { class: "ms-file-row",
                        div { class: "ms-file-meta",
                            span { class: "ms-file-icon", "🖼" }
                            div {
                                p { class: "ms-file-name", "{file_name}" }
                                p { class: "ms-file-size", "{file_size_mb:.2} MB" }
                            }
                        }
                        button {
                            class: "ms-link ms-link--danger",
                            onclick: move |_| reset_session(),
                            "Remove"
                        }
                    }
                    button {
                        class: "ms-btn ms-btn--primary ms-btn--block",
                        onclick: start_analysis,
                        "Start Analysis"
                    }
                }
            }

            if processing {
                ProcessingCard { pipeline }
            }

            if let Some(analysis) = analysis {
                ResultsPanel {
                    result: analysis,
                    preview_url,
                    on_reset: move |_| reset_session(),
                }
            }
        }
    }
}
