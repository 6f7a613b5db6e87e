//! Application configuration constants.
//!
//! These values are shared between the core state machines and the UI so
//! that timers, tests, and display logic stay consistent.

/// Quiet interval for the search debounce, in milliseconds.
///
/// A commit is scheduled this long after the most recent keystroke; any
/// earlier pending commit is cancelled.
pub const DEBOUNCE_QUIET_MS: u64 = 500;

/// Dwell time of each analysis stage, in milliseconds.
///
/// The simulated pipeline holds every stage active for exactly this long
/// before advancing to the next one.
pub const STAGE_DWELL_MS: u64 = 1500;

/// Environment variable overriding the catalog service base URL.
pub const API_URL_ENV: &str = "MEDISCAN_API_URL";

/// Default base URL of the drug catalog service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
