//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use carent_types::OutputFormat;

#[derive(Parser)]
#[command(name = "carent")]
#[command(version)]
#[command(about = "Browse the rental fleet and build WhatsApp booking inquiries")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog file (TOML, JSON or CSV). Uses config value if not specified.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List vehicles, filtered and sorted
    List {
        /// Match against name or brand (case-insensitive)
        #[arg(long, short = 's', default_value = "")]
        search: String,

        /// all, suv, mpv, sedan, hatchback
        #[arg(long, short = 'c', default_value = "all")]
        category: String,

        /// all, under-500k, 500k-1m, over-1m
        #[arg(long, short = 'p', default_value = "all")]
        price: String,

        /// Manual or Automatic; repeat to allow both
        #[arg(long, short = 't')]
        transmission: Vec<String>,

        /// price-low, price-high, newest, name
        #[arg(long, default_value = "price-low")]
        sort: String,
    },

    /// Show a single vehicle
    Show {
        /// Vehicle id
        id: String,
    },

    /// Print the WhatsApp link asking about a vehicle
    Inquire {
        /// Vehicle id
        id: String,
    },

    /// Print the WhatsApp link for a booking request
    Book {
        /// Vehicle id to mention in the request
        #[arg(long)]
        car_id: Option<String>,

        /// Pickup date (YYYY-MM-DD)
        #[arg(long)]
        pickup_date: Option<NaiveDate>,

        /// Return date (YYYY-MM-DD)
        #[arg(long)]
        return_date: Option<NaiveDate>,

        /// Pickup location
        #[arg(long)]
        pickup_location: Option<String>,

        /// Return location; defaults to the pickup location
        #[arg(long)]
        return_location: Option<String>,
    },

    /// Print the WhatsApp link for a quick availability search
    Search {
        /// Rental location
        #[arg(long, short = 'l')]
        location: Option<String>,

        /// Pickup date (YYYY-MM-DD)
        #[arg(long)]
        pickup_date: Option<NaiveDate>,

        /// Return date (YYYY-MM-DD)
        #[arg(long)]
        return_date: Option<NaiveDate>,
    },

    /// Show business contact details
    Contact,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set WhatsApp business number (digits, international form)
        #[arg(long)]
        set_whatsapp_number: Option<String>,

        /// Set catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Go back to the built-in catalog
        #[arg(long)]
        clear_catalog: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
