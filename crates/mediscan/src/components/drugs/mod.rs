//! Catalog pages: searchable listing and per-drug detail.

mod detail_page;
mod list_page;

pub use detail_page::DrugDetailPage;
pub use list_page::DrugListPage;
