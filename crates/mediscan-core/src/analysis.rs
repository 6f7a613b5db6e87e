//! Staged analysis pipeline and the inference seam behind it.
//!
//! The pipeline is a fixed three-stage sequence that drives the progress
//! UI; stage timing is owned by the caller, which sleeps each stage's dwell
//! and then calls [`AnalysisPipeline::advance`]. The actual inference hides
//! behind [`DrugAnalyzer`], so the shipped [`MockAnalyzer`] can later be
//! swapped for a real backend without touching the state machine.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use crate::config::STAGE_DWELL_MS;
use crate::error::{AnalysisError, PipelineError};

/// One labeled step of the analysis sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSpec {
    pub label: &'static str,
    pub dwell_ms: u64,
}

/// The fixed, ordered analysis stages.
pub const STAGES: [StageSpec; 3] = [
    StageSpec {
        label: "ResNet-50 analyzing form...",
        dwell_ms: STAGE_DWELL_MS,
    },
    StageSpec {
        label: "OCR extracting text...",
        dwell_ms: STAGE_DWELL_MS,
    },
    StageSpec {
        label: "Validating drug information...",
        dwell_ms: STAGE_DWELL_MS,
    },
];

/// Display state of one stage relative to the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Active,
    Pending,
}

/// Outcome of advancing past the active stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The given stage index is now active.
    NextStage(usize),
    /// The last stage finished; the pipeline is idle again.
    Finished,
}

/// Strictly sequential stage progression with a re-entrancy guard.
///
/// Stage `i + 1` never becomes active before `advance` is called with stage
/// `i` active, and exactly one stage is active at any instant of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisPipeline {
    active: Option<usize>,
}

impl AnalysisPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a run at the first stage. Fails while a run is active.
    pub fn start(&mut self) -> Result<(), PipelineError> {
        if self.active.is_some() {
            return Err(PipelineError::AlreadyRunning);
        }
        self.active = Some(0);
        Ok(())
    }

    /// Moves past the active stage once its dwell time has elapsed.
    pub fn advance(&mut self) -> Advance {
        match self.active {
            Some(idx) if idx + 1 < STAGES.len() => {
                self.active = Some(idx + 1);
                Advance::NextStage(idx + 1)
            }
            _ => {
                self.active = None;
                Advance::Finished
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_stage(&self) -> Option<usize> {
        self.active
    }

    /// Status of stage `idx` for progress rendering: stages before the
    /// active index are complete, the active one is in progress, the rest
    /// are pending. While idle every stage reads as pending.
    pub fn stage_status(&self, idx: usize) -> StageStatus {
        match self.active {
            Some(active) if idx < active => StageStatus::Completed,
            Some(active) if idx == active => StageStatus::Active,
            _ => StageStatus::Pending,
        }
    }
}

/// Outcome of a completed analysis run. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub detected_type: String,
    /// Confidence percentage, 0-100.
    pub confidence: u8,
    pub drug_name: String,
    pub active_ingredients: Vec<String>,
    pub manufacturer: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub expiry_date: String,
}

/// Capability of turning a package photo into an [`AnalysisResult`].
///
/// `?Send` because the web build runs futures on a single-threaded
/// executor.
#[async_trait(?Send)]
pub trait DrugAnalyzer {
    async fn analyze(&self, image: &[u8]) -> Result<AnalysisResult, AnalysisError>;
}

/// Deterministic stand-in for the real inference backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalyzer;

impl MockAnalyzer {
    /// The fixed record every run yields.
    pub fn fixed_result() -> AnalysisResult {
        AnalysisResult {
            detected_type: "Blister Pack".to_string(),
            confidence: 98,
            drug_name: "Paracetamol 500mg".to_string(),
            active_ingredients: vec!["Paracetamol".to_string(), "500mg".to_string()],
            manufacturer: "PharmaCorp Industries".to_string(),
            expiry_date: "2024-12-31".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl DrugAnalyzer for MockAnalyzer {
    async fn analyze(&self, _image: &[u8]) -> Result<AnalysisResult, AnalysisError> {
        Ok(Self::fixed_result())
    }
}
