//! Repository adapters for catalog sources

use std::path::PathBuf;

use carent_domain::repository::CatalogRepository;
use carent_infra::persistence::{FileCatalogRepository, InMemoryCatalogRepository};
use carent_types::Result;
use tracing::debug;

use crate::config::Config;

/// Open the catalog configured in `config`, or the built-in fleet
pub fn open_catalog_repo(config: &Config) -> Result<Box<dyn CatalogRepository>> {
    match config.catalog_path {
        Some(ref path) => Ok(Box::new(open_catalog_repo_at(path.clone())?)),
        None => {
            debug!("using built-in catalog");
            Ok(Box::new(InMemoryCatalogRepository::sample()))
        }
    }
}

/// Open a file-based catalog repository
pub fn open_catalog_repo_at(path: PathBuf) -> Result<FileCatalogRepository> {
    FileCatalogRepository::new(path)
}
