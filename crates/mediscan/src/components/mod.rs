//! UI components for the MediScan application.
//!
//! - `navigation`: sticky top bar with route-aware highlighting
//! - `search_bar`: debounced search input shared by the catalog pages
//! - `scan`: upload dropzone, simulated analysis progress, result panel
//! - `drugs`: catalog listing and detail pages

mod drugs;
mod navigation;
mod scan;
mod search_bar;

pub use drugs::{DrugDetailPage, DrugListPage};
pub use navigation::Navigation;
pub use scan::ScanPage;
pub use search_bar::SearchBar;
