//! Error types for carent

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Catalog construction errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate vehicle id: {0}")]
    DuplicateId(String),

    #[error("Invalid vehicle {id}: {reason}")]
    InvalidVehicle { id: String, reason: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("CSV loader error: {0}")]
    Csv(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Vehicle is not available for booking: {0}")]
    VehicleUnavailable(String),

    #[error("Invalid booking request: {0}")]
    InvalidBooking(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_converts() {
        let err: Error = CatalogError::DuplicateId("7".to_string()).into();
        assert_eq!(err.to_string(), "Catalog error: Duplicate vehicle id: 7");
    }

    #[test]
    fn test_invalid_vehicle_message() {
        let err = CatalogError::InvalidVehicle {
            id: "3".to_string(),
            reason: "seat count must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid vehicle 3: seat count must be positive"
        );
    }
}
