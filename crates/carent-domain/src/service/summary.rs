//! Counts shown next to the listing

use serde::{Deserialize, Serialize};

use crate::model::Vehicle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    /// Size of the unfiltered catalog
    pub total: usize,
    /// Vehicles left after filtering
    pub matched: usize,
    /// Available vehicles among the matched ones
    pub available: usize,
}

pub fn summarize(catalog: &[Vehicle], filtered: &[Vehicle]) -> CatalogSummary {
    CatalogSummary {
        total: catalog.len(),
        matched: filtered.len(),
        available: filtered.iter().filter(|v| v.available).count(),
    }
}
