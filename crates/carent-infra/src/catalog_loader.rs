//! Catalog loader for TOML and JSON files

use std::fs;
use std::path::Path;

use carent_domain::model::{Catalog, Vehicle};
use carent_types::{CatalogError, Error, Result};
use serde::Deserialize;
use tracing::debug;

use crate::csv_loader;

/// Container for parsing catalog.toml / catalog.json
#[derive(Debug, Deserialize)]
struct CatalogFile {
    vehicles: Vec<Vehicle>,
}

/// JSON catalogs may be a bare array or `{ "vehicles": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<Vehicle>),
    Wrapped(CatalogFile),
}

/// Supported on-disk catalog formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
    Csv,
}

impl CatalogFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(CatalogFormat::Toml),
            "json" => Ok(CatalogFormat::Json),
            "csv" => Ok(CatalogFormat::Csv),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog file, picking the parser from its extension
    pub fn load_from_file(path: &Path) -> Result<Catalog> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let format = CatalogFormat::from_path(path)?;
        debug!(path = %path.display(), ?format, "loading catalog");

        let catalog = match format {
            CatalogFormat::Toml => Self::load_toml_str(&fs::read_to_string(path)?)?,
            CatalogFormat::Json => Self::load_json_str(&fs::read_to_string(path)?)?,
            CatalogFormat::Csv => csv_loader::load_catalog(path)?,
        };

        debug!(vehicles = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog from TOML text (`[[vehicles]]` tables)
    pub fn load_toml_str(toml_content: &str) -> Result<Catalog> {
        let file: CatalogFile = toml::from_str(toml_content).map_err(|e| {
            CatalogError::Parse(format!("Failed to parse catalog TOML: {}", e))
        })?;
        Ok(Catalog::new(file.vehicles)?)
    }

    /// Load a catalog from JSON text
    pub fn load_json_str(json_content: &str) -> Result<Catalog> {
        let parsed: JsonCatalog = serde_json::from_str(json_content).map_err(|e| {
            CatalogError::Parse(format!("Failed to parse catalog JSON: {}", e))
        })?;
        let vehicles = match parsed {
            JsonCatalog::List(vehicles) => vehicles,
            JsonCatalog::Wrapped(file) => file.vehicles,
        };
        Ok(Catalog::new(vehicles)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carent_domain::model::{BodyType, FuelType, Transmission};
    use std::io::Write;

    const TEST_TOML: &str = r#"
[[vehicles]]
id = "1"
name = "Toyota Avanza"
brand = "Toyota"
price_per_day = 350000
seats = 7
transmission = "Manual"
fuel_type = "Bensin"
year = 2022
body_type = "MPV"

[[vehicles]]
id = "4"
name = "Mitsubishi Pajero Sport"
brand = "Mitsubishi"
price_per_day = 1200000
seats = 7
transmission = "Automatic"
fuel_type = "Diesel"
year = 2022
available = false
"#;

    #[test]
    fn test_load_toml_str() {
        let catalog = CatalogLoader::load_toml_str(TEST_TOML).unwrap();
        assert_eq!(catalog.len(), 2);
        let avanza = catalog.get("1").unwrap();
        assert_eq!(avanza.body_type, Some(BodyType::Mpv));
        assert!(avanza.available);
        let pajero = catalog.get("4").unwrap();
        assert_eq!(pajero.fuel_type, FuelType::Diesel);
        assert_eq!(pajero.transmission, Transmission::Automatic);
        assert!(!pajero.available);
    }

    #[test]
    fn test_load_json_array_and_wrapped() {
        let array = r#"[{"id":"2","name":"Honda Civic","brand":"Honda","price_per_day":700000,
            "seats":5,"transmission":"Automatic","fuel_type":"Bensin","year":2023}]"#;
        let wrapped = format!(r#"{{"vehicles": {}}}"#, array);
        assert_eq!(CatalogLoader::load_json_str(array).unwrap().len(), 1);
        assert_eq!(CatalogLoader::load_json_str(&wrapped).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = format!("{}\n{}", TEST_TOML, TEST_TOML);
        let err = CatalogLoader::load_toml_str(&toml).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let err = CatalogLoader::load_toml_str("[[vehicles]]\nid = 1").unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(TEST_TOML.as_bytes()).unwrap();

        let catalog = CatalogLoader::load_from_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, "vehicles: []").unwrap();
        let err = CatalogLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CatalogLoader::load_from_file(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
