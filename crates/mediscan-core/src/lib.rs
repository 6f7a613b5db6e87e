//! MediScan - drug identification front-end core.
//!
//! Platform-agnostic logic behind the MediScan UI: the debounced search
//! state machine, the upload intake controller, the staged analysis
//! pipeline, and the HTTP client for the external drug catalog service.
//!
//! # Architecture
//!
//! - **Search**: trailing-edge debounce with generation tickets, so the UI
//!   layer owns timers and the state machine stays synchronous and testable
//! - **Upload**: MIME validation with a typed accept/reject outcome and a
//!   revocable preview-handle discipline
//! - **Analysis**: fixed stage sequence driving the progress UI, with the
//!   actual inference behind the [`analysis::DrugAnalyzer`] trait
//! - **Catalog**: thin `reqwest` client over the external drug record API
//!
//! The UI crate (`mediscan`) renders these with Dioxus on web and desktop.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod dates;
pub mod error;
pub mod search;
pub mod upload;
