//! Infrastructure layer - catalog sources and persistence implementations

pub mod catalog_loader;
pub mod csv_loader;
pub mod persistence;
pub mod sample_catalog;

pub use catalog_loader::CatalogLoader;
pub use sample_catalog::sample_catalog;
