//! CSV loader for vehicle catalogs
//!
//! Expected header (the last two columns are optional):
//! id,name,brand,price_per_day,seats,transmission,fuel_type,year,available,body_type,image

use std::path::Path;

use carent_domain::model::{BodyType, Catalog, FuelType, Transmission, Vehicle};
use thiserror::Error;
use tracing::warn;

const REQUIRED_COLUMNS: [&str; 9] = [
    "id",
    "name",
    "brand",
    "price_per_day",
    "seats",
    "transmission",
    "fuel_type",
    "year",
    "available",
];

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid number in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid value in row {row}, column {column}: {value}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl From<CsvLoaderError> for carent_types::Error {
    fn from(err: CsvLoaderError) -> Self {
        carent_types::Error::Csv(err.to_string())
    }
}

/// Load a catalog from a CSV file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> carent_types::Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(CsvLoaderError::from)?;
    let vehicles = parse_vehicles(&content)?;
    Ok(Catalog::new(vehicles)?)
}

/// Parse vehicle rows from CSV text
pub fn parse_vehicles(content: &str) -> Result<Vec<Vehicle>, CsvLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers)?;

    let mut vehicles = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        if record.iter().all(|field| field.is_empty()) {
            warn!(row = row_num, "skipping blank catalog row");
            continue;
        }
        vehicles.push(parse_record(&record, &columns, row_num)?);
    }

    Ok(vehicles)
}

/// Column positions resolved from the header row
struct Columns {
    required: [usize; 9],
    body_type: Option<usize>,
    image: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CsvLoaderError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
        };

        let mut required = [0usize; 9];
        for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = position(name).ok_or_else(|| CsvLoaderError::MissingColumn(name.to_string()))?;
        }

        Ok(Self {
            required,
            body_type: position("body_type"),
            image: position("image"),
        })
    }
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &Columns,
    row: usize,
) -> Result<Vehicle, CsvLoaderError> {
    let field = |idx: usize| record.get(columns.required[idx]).unwrap_or("");
    let optional = |idx: Option<usize>| {
        idx.and_then(|i| record.get(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let body_type = match optional(columns.body_type) {
        Some(tag) => Some(BodyType::from_tag(&tag).ok_or_else(|| invalid_value(row, "body_type", &tag))?),
        None => None,
    };

    Ok(Vehicle {
        id: field(0).to_string(),
        name: field(1).to_string(),
        brand: field(2).to_string(),
        price_per_day: parse_number(field(3), row, "price_per_day")?,
        seats: parse_number(field(4), row, "seats")?,
        transmission: Transmission::from_tag(field(5))
            .ok_or_else(|| invalid_value(row, "transmission", field(5)))?,
        fuel_type: FuelType::from_tag(field(6))
            .ok_or_else(|| invalid_value(row, "fuel_type", field(6)))?,
        year: parse_number(field(7), row, "year")?,
        available: parse_bool(field(8)).ok_or_else(|| invalid_value(row, "available", field(8)))?,
        body_type,
        image: optional(columns.image),
    })
}

fn parse_number<T: std::str::FromStr>(value: &str, row: usize, column: &str) -> Result<T, CsvLoaderError> {
    strip_thousands(value)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| CsvLoaderError::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}

/// Remove thousands separators such as "350.000" or "1,200,000".
///
/// One separator kind per value, every group after the first exactly
/// three digits. Anything else (e.g. "350000.50") is not a whole number.
fn strip_thousands(value: &str) -> Option<String> {
    let Some(sep) = value.chars().find(|c| matches!(c, '.' | ',' | '_')) else {
        return Some(value.to_string());
    };

    let mut groups = value.split(sep);
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 {
        return None;
    }

    let mut digits = head.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "ya" | "1" => Some(true),
        "false" | "no" | "tidak" | "0" => Some(false),
        _ => None,
    }
}

fn invalid_value(row: usize, column: &str, value: &str) -> CsvLoaderError {
    CsvLoaderError::InvalidValue {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}
