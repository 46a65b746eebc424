//! File-based implementation of CatalogRepository

use std::path::{Path, PathBuf};

use carent_domain::model::{Catalog, Vehicle};
use carent_domain::repository::CatalogRepository;
use carent_types::Error;

use crate::catalog_loader::CatalogLoader;

/// Catalog read from a TOML, JSON or CSV file
pub struct FileCatalogRepository {
    path: PathBuf,
    catalog: Catalog,
}

impl FileCatalogRepository {
    /// Create a new repository from a catalog file path
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let catalog = CatalogLoader::load_from_file(&path)?;
        Ok(Self { path, catalog })
    }

    /// Get the catalog path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload data from disk. The previous snapshot is kept if loading fails.
    pub fn reload(&mut self) -> Result<(), Error> {
        self.catalog = CatalogLoader::load_from_file(&self.path)?;
        Ok(())
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn find_all(&self) -> Result<Catalog, Error> {
        Ok(self.catalog.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, Error> {
        Ok(self.catalog.get(id).cloned())
    }
}
