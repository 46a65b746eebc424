//! Repository trait definitions for catalog sources

use carent_types::Error;

use crate::model::{Catalog, Vehicle};

/// Source of the vehicle catalog
pub trait CatalogRepository {
    /// Snapshot of the whole catalog, in listing order
    fn find_all(&self) -> Result<Catalog, Error>;

    /// Find a vehicle by its id
    fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, Error> {
        Ok(self.find_all()?.get(id).cloned())
    }
}
