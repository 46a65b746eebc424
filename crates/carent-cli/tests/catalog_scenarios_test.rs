//! Listing scenarios over the built-in fleet
//!
//! Exercises the same path as `carent list`: raw page tags → FilterSpec →
//! repository snapshot → filter/sort engine → summary.

use std::path::PathBuf;

use carent_app::app::{browse, vehicle_inquiry_url};
use carent_app::config::Config;
use carent_app::repository::open_catalog_repo;
use carent_domain::model::{FilterSpec, FilterTags, Vehicle};
use carent_domain::service::apply;
use carent_infra::persistence::InMemoryCatalogRepository;
use carent_infra::sample_catalog;

fn tags(category: &str, price: &str, transmission: &[&str], sort: &str) -> FilterTags {
    FilterTags {
        search: String::new(),
        category: category.to_string(),
        price_range: price.to_string(),
        transmission: transmission.iter().map(|t| t.to_string()).collect(),
        sort_by: sort.to_string(),
    }
}

fn names(vehicles: &[Vehicle]) -> Vec<&str> {
    vehicles.iter().map(|v| v.name.as_str()).collect()
}

fn list(tags: &FilterTags) -> Vec<Vehicle> {
    let repo = InMemoryCatalogRepository::sample();
    browse(&repo, &FilterSpec::from_tags(tags)).unwrap().vehicles
}

#[test]
fn mpv_by_price_keeps_catalog_order_on_ties() {
    let result = list(&tags("mpv", "all", &[], "price-low"));
    assert_eq!(
        names(&result),
        vec!["Daihatsu Xenia", "Toyota Avanza", "Suzuki Ertiga", "Toyota Alphard"]
    );
}

#[test]
fn under_500k() {
    let result = list(&tags("all", "under-500k", &[], "price-low"));
    assert_eq!(names(&result), vec!["Daihatsu Xenia", "Toyota Avanza", "Suzuki Ertiga"]);
    assert!(result.iter().all(|v| v.name != "Honda HR-V"));
}

#[test]
fn manual_only() {
    let result = list(&tags("all", "all", &["Manual"], "unknown-sort"));
    assert_eq!(names(&result), vec!["Toyota Avanza", "Daihatsu Xenia", "Suzuki Ertiga"]);
}

#[test]
fn empty_catalog_lists_nothing() {
    let spec = FilterSpec::from_tags(&tags("suv", "over-1m", &["Automatic"], "newest"));
    assert!(apply(&[], &spec).is_empty());
}

#[test]
fn unknown_category_lists_everything() {
    let result = list(&tags("convertible", "all", &[], "price-low"));
    assert_eq!(result.len(), 8);
}

#[test]
fn uppercase_search_matches_lowercase() {
    let upper = FilterTags {
        search: "TOYOTA".to_string(),
        ..FilterTags::default()
    };
    let lower = FilterTags {
        search: "toyota".to_string(),
        ..FilterTags::default()
    };
    assert_eq!(list(&upper), list(&lower));
}

#[test]
fn summary_counts_available_in_result() {
    let repo = InMemoryCatalogRepository::sample();
    let spec = FilterSpec::from_tags(&tags("all", "over-1m", &[], "price-high"));
    let view = browse(&repo, &spec).unwrap();
    assert_eq!(
        names(&view.vehicles),
        vec!["Toyota Alphard", "Mitsubishi Pajero Sport", "Toyota Fortuner"]
    );
    assert_eq!(view.summary.total, 8);
    assert_eq!(view.summary.matched, 3);
    assert_eq!(view.summary.available, 2);
}

#[test]
fn file_catalog_behaves_like_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("fleet.json");
    let json = serde_json::to_string(&sample_catalog()).unwrap();
    std::fs::write(&path, json).unwrap();

    let config = Config {
        catalog_path: Some(path),
        ..Config::default()
    };
    let repo = open_catalog_repo(&config).unwrap();
    let spec = FilterSpec::from_tags(&tags("mpv", "all", &[], "price-low"));
    let from_file = browse(repo.as_ref(), &spec).unwrap();
    let builtin = browse(&InMemoryCatalogRepository::sample(), &spec).unwrap();
    assert_eq!(from_file.vehicles, builtin.vehicles);
}

#[test]
fn inquiry_link_for_listed_vehicle() {
    let result = list(&tags("sedan", "all", &[], "price-low"));
    assert_eq!(names(&result), vec!["Honda Civic"]);
    let url = vehicle_inquiry_url(&Config::default(), &result[0]).unwrap();
    assert!(url.starts_with("https://wa.me/6282248751765?text="));
    assert!(url.contains("Honda%20Civic%202023"));
}
