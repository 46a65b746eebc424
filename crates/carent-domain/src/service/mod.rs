//! Domain services

pub mod catalog_filter;
pub mod summary;

pub use catalog_filter::{apply, apply_with_table, compare_names};
pub use summary::{summarize, CatalogSummary};
