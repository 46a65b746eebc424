//! Domain module containing the rental catalog types and services

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::CatalogRepository;
