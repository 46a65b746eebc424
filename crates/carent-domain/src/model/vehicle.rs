//! Rental vehicle type definitions

use serde::{Deserialize, Serialize};

/// Gearbox type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    /// Parse a transmission tag, ignoring case and surrounding whitespace
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "manual" => Some(Transmission::Manual),
            "automatic" | "auto" | "matic" => Some(Transmission::Automatic),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Fuel type. Gasoline is shown to customers as "Bensin".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "Bensin", alias = "Gasoline", alias = "Petrol")]
    Gasoline,
    Diesel,
    #[serde(alias = "Listrik")]
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "bensin" | "gasoline" | "petrol" => Some(FuelType::Gasoline),
            "diesel" | "solar" => Some(FuelType::Diesel),
            "electric" | "listrik" => Some(FuelType::Electric),
            "hybrid" => Some(FuelType::Hybrid),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Bensin",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Body type used for category bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    #[serde(rename = "SUV", alias = "suv")]
    Suv,
    #[serde(rename = "MPV", alias = "mpv")]
    Mpv,
    #[serde(alias = "sedan")]
    Sedan,
    #[serde(alias = "hatchback")]
    Hatchback,
}

impl BodyType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "suv" => Some(BodyType::Suv),
            "mpv" => Some(BodyType::Mpv),
            "sedan" => Some(BodyType::Sedan),
            "hatchback" => Some(BodyType::Hatchback),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyType::Suv => "SUV",
            BodyType::Mpv => "MPV",
            BodyType::Sedan => "Sedan",
            BodyType::Hatchback => "Hatchback",
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// A rental vehicle as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier within the catalog
    pub id: String,
    /// Display name (e.g., "Toyota Avanza")
    pub name: String,
    pub brand: String,
    /// Daily rate in whole Rupiah
    pub price_per_day: u64,
    pub seats: u32,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    /// Model year
    pub year: u32,
    #[serde(default = "default_available")]
    pub available: bool,
    /// Explicit body type. Records without one are classified by name.
    #[serde(default)]
    pub body_type: Option<BodyType>,
    /// Image path for presentation
    #[serde(default)]
    pub image: Option<String>,
}

fn default_available() -> bool {
    true
}
