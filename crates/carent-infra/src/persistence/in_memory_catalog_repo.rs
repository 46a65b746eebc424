//! In-memory implementation of CatalogRepository

use carent_domain::model::{Catalog, Vehicle};
use carent_domain::repository::CatalogRepository;
use carent_types::Error;

use crate::sample_catalog::sample_catalog;

/// Repository over a catalog already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    catalog: Catalog,
}

impl InMemoryCatalogRepository {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Repository over the built-in fleet
    pub fn sample() -> Self {
        Self::new(sample_catalog())
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn find_all(&self) -> Result<Catalog, Error> {
        Ok(self.catalog.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, Error> {
        Ok(self.catalog.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_repository() {
        let repo = InMemoryCatalogRepository::sample();
        assert_eq!(repo.find_all().unwrap().len(), 8);
        let civic = repo.find_by_id("2").unwrap().unwrap();
        assert_eq!(civic.name, "Honda Civic");
        assert!(repo.find_by_id("99").unwrap().is_none());
    }

    #[test]
    fn test_empty_repository() {
        let repo = InMemoryCatalogRepository::default();
        assert!(repo.find_all().unwrap().is_empty());
    }
}
