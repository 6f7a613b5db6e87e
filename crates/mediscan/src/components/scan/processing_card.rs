use dioxus::prelude::*;
use mediscan_core::analysis::{AnalysisPipeline, StageStatus, STAGES};

/// Stage checklist shown while the simulated analysis runs.
#[component]
pub fn ProcessingCard(pipeline: Signal<AnalysisPipeline>) -> Element {
    let stages = STAGES.iter().enumerate().map(|(idx, stage)| {
        let (class, marker) = match pipeline.read().stage_status(idx) {
            StageStatus::Completed => ("ms-stage ms-stage--done", "✓"),
            StageStatus::Active => ("ms-stage ms-stage--active", "●"),
            StageStatus::Pending => ("ms-stage", "○"),
        };
        (idx, stage.label, class, marker)
    });

    rsx! {
        section { class: "ms-card ms-processing",
            div { class: "ms-processing-spinner" }
            h3 { class: "ms-processing-title", "Analyzing Drug Image" }
            ul { class: "ms-stage-list",
                for (idx , label , class , marker) in stages {
                    li { key: "{idx}", class: "{class}",
                        span { class: "ms-stage-marker", "{marker}" }
                        span { class: "ms-stage-label", "{label}" }
                    }
                }
            }
        }
    }
}
