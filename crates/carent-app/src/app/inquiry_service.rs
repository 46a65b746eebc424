//! Inquiry Service - WhatsApp messages and deep links
//!
//! A "booking" is never stored anywhere: it is a pre-filled chat message
//! the customer sends to the business number.

use carent_domain::model::Vehicle;
use carent_types::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::format::{format_date_short, format_price};

const NOT_SELECTED: &str = "Belum dipilih";

pub const GENERAL_INQUIRY: &str = "Halo! Saya tertarik dengan layanan rental mobil Anda.";

/// Booking form contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub car_id: Option<String>,
    pub pickup_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub pickup_location: Option<String>,
    pub return_location: Option<String>,
    /// Return at the pickup location; `return_location` is ignored
    pub same_location: bool,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            car_id: None,
            pickup_date: None,
            return_date: None,
            pickup_location: None,
            return_location: None,
            same_location: true,
        }
    }
}

impl BookingRequest {
    pub fn validate(&self) -> Result<()> {
        if let (Some(pickup), Some(ret)) = (self.pickup_date, self.return_date) {
            if ret < pickup {
                return Err(Error::InvalidBooking(format!(
                    "return date {} is before pickup date {}",
                    ret, pickup
                )));
            }
        }
        Ok(())
    }

    fn effective_return_location(&self) -> Option<&str> {
        if self.same_location {
            non_blank(&self.pickup_location)
        } else {
            non_blank(&self.return_location)
        }
    }
}

/// Hero search bar contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuickSearch {
    pub location: Option<String>,
    pub pickup_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
}

/// `{base_url}{number}?text={percent-encoded message}`
pub fn whatsapp_url(config: &Config, message: &str) -> String {
    format!(
        "{}{}?text={}",
        config.whatsapp_base_url,
        config.whatsapp_number,
        urlencoding::encode(message)
    )
}

/// Message sent from a car card. Unavailable cars cannot be inquired about.
pub fn vehicle_inquiry_message(vehicle: &Vehicle) -> Result<String> {
    if !vehicle.available {
        return Err(Error::VehicleUnavailable(vehicle.name.clone()));
    }
    Ok(format!(
        "Halo! Saya tertarik dengan mobil {name} {year}.\n\
         \n\
         Mobil: {name} ({brand})\n\
         Harga: {price}/hari\n\
         Kapasitas: {seats} orang\n\
         Transmisi: {transmission}\n\
         Bahan Bakar: {fuel}\n\
         \n\
         Mohon informasi ketersediaan dan proses bookingnya. Terima kasih!",
        name = vehicle.name,
        year = vehicle.year,
        brand = vehicle.brand,
        price = format_price(vehicle.price_per_day),
        seats = vehicle.seats,
        transmission = vehicle.transmission,
        fuel = vehicle.fuel_type,
    ))
}

pub fn booking_request_message(request: &BookingRequest) -> Result<String> {
    request.validate()?;
    let car_line = request
        .car_id
        .as_deref()
        .map(|id| format!("ID Mobil: {}", id))
        .unwrap_or_default();

    Ok(format!(
        "Halo! Saya ingin melakukan booking mobil dengan detail sebagai berikut:\n\
         \n\
         Tanggal Pengambilan: {}\n\
         Tanggal Pengembalian: {}\n\
         Lokasi Pengambilan: {}\n\
         Lokasi Pengembalian: {}\n\
         \n\
         {}\n\
         \n\
         Mohon konfirmasi ketersediaan dan proses selanjutnya. Terima kasih!",
        date_or_placeholder(request.pickup_date),
        date_or_placeholder(request.return_date),
        non_blank(&request.pickup_location).unwrap_or(NOT_SELECTED),
        request.effective_return_location().unwrap_or(NOT_SELECTED),
        car_line,
    ))
}

pub fn quick_search_message(search: &QuickSearch) -> String {
    format!(
        "Halo! Saya ingin menyewa mobil dengan detail berikut:\n\
         \n\
         Lokasi: {}\n\
         Tanggal Ambil: {}\n\
         Tanggal Kembali: {}\n\
         \n\
         Mohon informasi ketersediaan dan harga. Terima kasih!",
        non_blank(&search.location).unwrap_or(NOT_SELECTED),
        date_or_placeholder(search.pickup_date),
        date_or_placeholder(search.return_date),
    )
}

pub fn vehicle_inquiry_url(config: &Config, vehicle: &Vehicle) -> Result<String> {
    let message = vehicle_inquiry_message(vehicle)?;
    debug!(vehicle = %vehicle.id, "vehicle inquiry link");
    Ok(whatsapp_url(config, &message))
}

pub fn booking_request_url(config: &Config, request: &BookingRequest) -> Result<String> {
    let message = booking_request_message(request)?;
    Ok(whatsapp_url(config, &message))
}

pub fn quick_search_url(config: &Config, search: &QuickSearch) -> String {
    whatsapp_url(config, &quick_search_message(search))
}

pub fn general_inquiry_url(config: &Config) -> String {
    whatsapp_url(config, GENERAL_INQUIRY)
}

fn date_or_placeholder(date: Option<NaiveDate>) -> String {
    date.map(format_date_short)
        .unwrap_or_else(|| NOT_SELECTED.to_string())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
