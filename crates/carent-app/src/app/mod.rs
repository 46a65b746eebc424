//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers:
//! - `query_service`: filtered catalog listing and vehicle lookup
//! - `inquiry_service`: WhatsApp messages and deep links

pub mod inquiry_service;
pub mod query_service;

pub use inquiry_service::{
    booking_request_url, general_inquiry_url, quick_search_url, vehicle_inquiry_url,
    BookingRequest, QuickSearch,
};
pub use query_service::{browse, find_vehicle, CatalogView};
