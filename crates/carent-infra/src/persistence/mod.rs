//! Persistence implementations
//!
//! This module provides implementations of the `CatalogRepository` trait.

mod file_catalog_repo;
mod in_memory_catalog_repo;

pub use file_catalog_repo::FileCatalogRepository;
pub use in_memory_catalog_repo::InMemoryCatalogRepository;
