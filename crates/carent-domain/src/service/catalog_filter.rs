//! Catalog filter/sort engine
//!
//! Stages run in a fixed order: search, category, price, transmission,
//! then a stable sort. Every stage is a no-op when its selector is
//! unconstrained, and nothing here can fail.

use std::cmp::Ordering;

use feruca::Collator;

use crate::model::{ClassificationTable, FilterSpec, SortKey, Vehicle};

/// Filter and order `catalog` using the legacy classification table
pub fn apply(catalog: &[Vehicle], spec: &FilterSpec) -> Vec<Vehicle> {
    apply_with_table(catalog, spec, &ClassificationTable::legacy())
}

pub fn apply_with_table(
    catalog: &[Vehicle],
    spec: &FilterSpec,
    table: &ClassificationTable,
) -> Vec<Vehicle> {
    let needle = spec.search.to_lowercase();

    let mut result: Vec<Vehicle> = catalog
        .iter()
        .filter(|v| matches_search(v, &needle))
        .filter(|v| matches_category(v, spec, table))
        .filter(|v| spec.price_range.contains(v.price_per_day))
        .filter(|v| spec.transmissions.is_empty() || spec.transmissions.contains(&v.transmission))
        .cloned()
        .collect();

    if let Some(key) = spec.sort {
        let mut collator = Collator::default();
        // sort_by is stable: ties keep catalog order
        result.sort_by(|a, b| compare_by(key, a, b, &mut collator));
    }

    result
}

fn matches_search(vehicle: &Vehicle, needle: &str) -> bool {
    needle.is_empty()
        || vehicle.name.to_lowercase().contains(needle)
        || vehicle.brand.to_lowercase().contains(needle)
}

fn matches_category(vehicle: &Vehicle, spec: &FilterSpec, table: &ClassificationTable) -> bool {
    match spec.category.body_type() {
        None => true,
        Some(body) => table.belongs_to(vehicle, body).unwrap_or(true),
    }
}

fn compare_by(key: SortKey, a: &Vehicle, b: &Vehicle, collator: &mut Collator) -> Ordering {
    match key {
        SortKey::PriceAscending => a.price_per_day.cmp(&b.price_per_day),
        SortKey::PriceDescending => b.price_per_day.cmp(&a.price_per_day),
        SortKey::NewestFirst => b.year.cmp(&a.year),
        SortKey::NameAlphabetical => collator.collate(a.name.as_str(), b.name.as_str()),
    }
}

/// Unicode collation (CLDR root order) of two display names.
///
/// Accents and case only break ties between otherwise equal names, and
/// names that differ only by case put the lowercase form first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
