//! Query Service - filtered catalog access
//!
//! Takes a snapshot from a `CatalogRepository` and runs the filter/sort
//! engine over it.

use carent_domain::model::{FilterSpec, Vehicle};
use carent_domain::repository::CatalogRepository;
use carent_domain::service::{apply, summarize, CatalogSummary};
use carent_types::{Error, Result};
use serde::Serialize;
use tracing::debug;

/// What the listing page shows: the ordered vehicles plus counts
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub vehicles: Vec<Vehicle>,
    pub summary: CatalogSummary,
}

/// Run the filter/sort engine over the repository's catalog
pub fn browse(repo: &dyn CatalogRepository, spec: &FilterSpec) -> Result<CatalogView> {
    let catalog = repo.find_all()?;
    let vehicles = apply(catalog.vehicles(), spec);
    let summary = summarize(catalog.vehicles(), &vehicles);
    debug!(
        total = summary.total,
        matched = summary.matched,
        available = summary.available,
        "catalog filtered"
    );
    Ok(CatalogView { vehicles, summary })
}

/// Get a vehicle by ID
pub fn find_vehicle(repo: &dyn CatalogRepository, id: &str) -> Result<Vehicle> {
    repo.find_by_id(id)?
        .ok_or_else(|| Error::VehicleNotFound(id.to_string()))
}
