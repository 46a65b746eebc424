//! Read-only vehicle catalog

use std::collections::HashSet;

use carent_types::CatalogError;
use serde::Serialize;

use super::vehicle::Vehicle;

/// Ordered, validated list of vehicles.
///
/// Order is the listing order and is what sort ties fall back to.
/// Once built the catalog is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and malformed records
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if vehicle.id.trim().is_empty() {
                return Err(CatalogError::InvalidVehicle {
                    id: vehicle.name.clone(),
                    reason: "id must not be empty".to_string(),
                });
            }
            if !seen.insert(vehicle.id.as_str()) {
                return Err(CatalogError::DuplicateId(vehicle.id.clone()));
            }
            if vehicle.seats == 0 {
                return Err(CatalogError::InvalidVehicle {
                    id: vehicle.id.clone(),
                    reason: "seat count must be positive".to_string(),
                });
            }
            if vehicle.year == 0 {
                return Err(CatalogError::InvalidVehicle {
                    id: vehicle.id.clone(),
                    reason: "model year must be positive".to_string(),
                });
            }
        }
        Ok(Self { vehicles })
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn into_vehicles(self) -> Vec<Vehicle> {
        self.vehicles
    }
}
