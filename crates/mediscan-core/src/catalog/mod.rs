//! Drug catalog service integration.
//!
//! The catalog itself lives in an external HTTP service; this module holds
//! the record type it serves and a thin client over its two endpoints.

mod client;
mod types;

pub use client::CatalogClient;
pub use types::DrugRecord;
