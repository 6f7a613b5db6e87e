//! Error types for mediscan-core.

use thiserror::Error;

/// Errors that can occur when talking to the drug catalog service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The configured base URL could not be parsed or has a bad scheme
    #[error("Invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),
    /// The HTTP request failed or returned a non-success status
    #[error("Catalog request failed: {0}")]
    RequestFailed(String),
    /// The catalog has no record with the requested identifier
    #[error("No drug with id {0} was found")]
    NotFound(String),
    /// The response body could not be decoded as catalog records
    #[error("Failed to decode catalog response: {0}")]
    DecodeFailed(String),
}

impl CatalogError {
    /// True when the failure means "the record does not exist" rather than
    /// "the request could not be completed".
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

/// Errors produced by a [`crate::analysis::DrugAnalyzer`] backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The analyzer rejected the image (unreadable, low confidence, ...)
    #[error("Image rejected by the analyzer: {0}")]
    Rejected(String),
    /// The backend itself failed
    #[error("Analysis backend failed: {0}")]
    Backend(String),
}

/// Errors from the analysis pipeline state machine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// A run is already active; only one run may be in flight at a time
    #[error("An analysis run is already in progress")]
    AlreadyRunning,
}
