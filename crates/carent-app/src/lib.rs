//! Application service layer - config, catalog queries, inquiry links

pub mod app;
pub mod config;
pub mod format;
pub mod repository;
