//! Output formatting module

use carent_app::app::CatalogView;
use carent_app::config::BusinessInfo;
use carent_app::format::{format_date, format_price};
use carent_domain::model::{ClassificationTable, Vehicle};
use carent_types::{OutputFormat, Result};
use chrono::NaiveDate;
use serde::Serialize;

pub fn output_listing(output_format: OutputFormat, view: &CatalogView) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    if view.vehicles.is_empty() {
        println!("Tidak ada mobil yang sesuai dengan filter.");
    } else {
        println!(
            "{:<4} {:<26} {:<10} {:>18} {:>5} {:<10} {:<8} {:>5} {:<9}",
            "ID", "Mobil", "Kategori", "Harga/hari", "Kursi", "Transmisi", "BBM", "Tahun", "Status"
        );
        println!("{}", "-".repeat(104));
        let table = ClassificationTable::legacy();
        for v in &view.vehicles {
            println!(
                "{:<4} {:<26} {:<10} {:>18} {:>5} {:<10} {:<8} {:>5} {:<9}",
                truncate_str(&v.id, 4),
                truncate_str(&v.name, 26),
                table.body_type_of(v).map(|b| b.label()).unwrap_or("-"),
                format_price(v.price_per_day),
                v.seats,
                v.transmission,
                v.fuel_type,
                v.year,
                availability_label(v),
            );
        }
    }

    println!();
    println!(
        "{} mobil ditemukan, {} tersedia (total {})",
        view.summary.matched, view.summary.available, view.summary.total
    );
    Ok(())
}

pub fn output_vehicle(output_format: OutputFormat, vehicle: &Vehicle) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicle)?);
        return Ok(());
    }

    let body = ClassificationTable::legacy()
        .body_type_of(vehicle)
        .map(|b| b.label())
        .unwrap_or("-");

    println!("\n{}", vehicle.name);
    println!("{}", "=".repeat(vehicle.name.chars().count()));
    println!("ID:           {}", vehicle.id);
    println!("Merek:        {}", vehicle.brand);
    println!("Kategori:     {}", body);
    println!("Harga:        {} / hari", format_price(vehicle.price_per_day));
    println!("Kapasitas:    {} orang", vehicle.seats);
    println!("Transmisi:    {}", vehicle.transmission);
    println!("Bahan bakar:  {}", vehicle.fuel_type);
    println!("Tahun:        {}", vehicle.year);
    println!("Status:       {}", availability_label(vehicle));
    Ok(())
}

#[derive(Serialize)]
struct LinkOutput<'a> {
    url: &'a str,
}

pub fn output_link(output_format: OutputFormat, url: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&LinkOutput { url })?);
    } else {
        println!("{}", url);
    }
    Ok(())
}

/// Booking or search link, preceded by the chosen dates in table mode
pub fn output_trip(
    output_format: OutputFormat,
    pickup_date: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
    url: &str,
) -> Result<()> {
    if output_format == OutputFormat::Table {
        for line in trip_lines(pickup_date, return_date) {
            println!("{}", line);
        }
    }
    output_link(output_format, url)
}

fn trip_lines(pickup_date: Option<NaiveDate>, return_date: Option<NaiveDate>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(date) = pickup_date {
        lines.push(format!("Tanggal ambil:    {}", format_date(date)));
    }
    if let Some(date) = return_date {
        lines.push(format!("Tanggal kembali:  {}", format_date(date)));
    }
    lines
}

#[derive(Serialize)]
struct ContactOutput<'a> {
    #[serde(flatten)]
    business: &'a BusinessInfo,
    whatsapp: &'a str,
}

pub fn output_contact(output_format: OutputFormat, business: &BusinessInfo, url: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        let contact = ContactOutput {
            business,
            whatsapp: url,
        };
        println!("{}", serde_json::to_string_pretty(&contact)?);
    } else {
        println!("{}", business.name);
        println!("Email:     {}", business.email);
        println!("Telepon:   {}", business.phone);
        println!("WhatsApp:  {}", url);
    }
    Ok(())
}

fn availability_label(vehicle: &Vehicle) -> &'static str {
    if vehicle.available {
        "Tersedia"
    } else {
        "Disewa"
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
