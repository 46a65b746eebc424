//! Domain model types

pub mod catalog;
pub mod classification;
pub mod filter;
pub mod vehicle;

pub use catalog::Catalog;
pub use classification::ClassificationTable;
pub use filter::{
    Category, FilterSpec, FilterTags, PriceRange, SortKey, LOWER_PRICE_THRESHOLD,
    UPPER_PRICE_THRESHOLD,
};
pub use vehicle::{BodyType, FuelType, Transmission, Vehicle};
