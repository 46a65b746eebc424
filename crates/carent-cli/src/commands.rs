//! Command handlers

use std::path::{Path, PathBuf};

use carent_app::app::{self, BookingRequest, QuickSearch};
use carent_app::config::Config;
use carent_app::repository::{open_catalog_repo, open_catalog_repo_at};
use carent_domain::model::{FilterSpec, FilterTags};
use carent_types::{OutputFormat, Result};
use tracing::{debug, warn};

use crate::cli::{Cli, Commands};
use crate::output::{output_contact, output_link, output_listing, output_trip, output_vehicle};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Everything but `config` runs against the saved config; `config`
    // reads the file itself so `--reset` works on a broken one
    let load = || -> Result<(Config, OutputFormat)> {
        let mut config = Config::load()?;

        // Override from CLI args
        if let Some(ref catalog) = cli.catalog {
            config.catalog_path = Some(catalog.clone());
        }
        let output_format = cli.format.unwrap_or(config.output_format);
        Ok((config, output_format))
    };

    match cli.command {
        Commands::List {
            search,
            category,
            price,
            transmission,
            sort,
        } => {
            let (config, output_format) = load()?;
            let tags = FilterTags {
                search,
                category,
                price_range: price,
                transmission,
                sort_by: sort,
            };
            cmd_list(&config, &tags, output_format)
        }

        Commands::Show { id } => {
            let (config, output_format) = load()?;
            cmd_show(&config, &id, output_format)
        }

        Commands::Inquire { id } => {
            let (config, output_format) = load()?;
            cmd_inquire(&config, &id, output_format)
        }

        Commands::Book {
            car_id,
            pickup_date,
            return_date,
            pickup_location,
            return_location,
        } => {
            let (config, output_format) = load()?;
            let request = BookingRequest {
                car_id,
                pickup_date,
                return_date,
                pickup_location,
                same_location: return_location.is_none(),
                return_location,
            };
            let url = app::booking_request_url(&config, &request)?;
            output_trip(output_format, pickup_date, return_date, &url)
        }

        Commands::Search {
            location,
            pickup_date,
            return_date,
        } => {
            let (config, output_format) = load()?;
            let search = QuickSearch {
                location,
                pickup_date,
                return_date,
            };
            let url = app::quick_search_url(&config, &search);
            output_trip(output_format, pickup_date, return_date, &url)
        }

        Commands::Contact => {
            let (config, output_format) = load()?;
            let url = app::general_inquiry_url(&config);
            output_contact(output_format, &config.business, &url)
        }

        Commands::Config {
            show,
            set_whatsapp_number,
            set_catalog,
            clear_catalog,
            set_output,
            reset,
        } => {
            let changes = ConfigChanges {
                show,
                set_whatsapp_number,
                set_catalog,
                clear_catalog,
                set_output,
                reset,
            };
            cmd_config(&Config::config_path()?, changes)
        }
    }
}

fn cmd_list(config: &Config, tags: &FilterTags, output_format: OutputFormat) -> Result<()> {
    for tag in tags.unrecognized() {
        warn!(%tag, "unrecognized filter value ignored");
    }
    let spec = FilterSpec::from_tags(tags);
    debug!(?spec, "listing catalog");

    let repo = open_catalog_repo(config)?;
    let view = app::browse(repo.as_ref(), &spec)?;
    output_listing(output_format, &view)
}

fn cmd_show(config: &Config, id: &str, output_format: OutputFormat) -> Result<()> {
    let repo = open_catalog_repo(config)?;
    let vehicle = app::find_vehicle(repo.as_ref(), id)?;
    output_vehicle(output_format, &vehicle)
}

fn cmd_inquire(config: &Config, id: &str, output_format: OutputFormat) -> Result<()> {
    let repo = open_catalog_repo(config)?;
    let vehicle = app::find_vehicle(repo.as_ref(), id)?;
    let url = app::vehicle_inquiry_url(config, &vehicle)?;
    output_link(output_format, &url)
}

/// Requested `config` edits
#[derive(Debug, Default)]
struct ConfigChanges {
    show: bool,
    set_whatsapp_number: Option<String>,
    set_catalog: Option<PathBuf>,
    clear_catalog: bool,
    set_output: Option<OutputFormat>,
    reset: bool,
}

fn cmd_config(path: &Path, changes: ConfigChanges) -> Result<()> {
    let mut config = if changes.reset {
        println!("Configuration reset to defaults");
        Config::default()
    } else {
        Config::load_from(path)?
    };

    let mut modified = changes.reset;

    if let Some(number) = changes.set_whatsapp_number {
        let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        println!("WhatsApp number set to: {}", digits);
        config.whatsapp_number = digits;
        modified = true;
    }

    if let Some(catalog) = changes.set_catalog {
        // Fail early on a catalog that cannot be read
        open_catalog_repo_at(catalog.clone())?;
        println!("Catalog set to: {}", catalog.display());
        config.catalog_path = Some(catalog);
        modified = true;
    }

    if changes.clear_catalog {
        println!("Using built-in catalog");
        config.catalog_path = None;
        modified = true;
    }

    if let Some(format) = changes.set_output {
        config.output_format = format;
        println!("Output format set to: {}", format);
        modified = true;
    }

    if modified {
        config.save_to(path)?;
        println!("Configuration saved");
    }

    if changes.show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken_config() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        (dir, path)
    }

    #[test]
    fn test_reset_recovers_unreadable_config() {
        let (_dir, path) = broken_config();
        let changes = ConfigChanges {
            reset: true,
            ..ConfigChanges::default()
        };
        cmd_config(&path, changes).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.whatsapp_number, Config::default().whatsapp_number);
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_reset_applies_other_changes() {
        let (_dir, path) = broken_config();
        let changes = ConfigChanges {
            reset: true,
            set_whatsapp_number: Some("+62 811-0000-111".to_string()),
            set_output: Some(OutputFormat::Json),
            ..ConfigChanges::default()
        };
        cmd_config(&path, changes).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.whatsapp_number, "628110000111");
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_show_still_reports_unreadable_config() {
        let (_dir, path) = broken_config();
        let changes = ConfigChanges {
            show: true,
            ..ConfigChanges::default()
        };
        assert!(cmd_config(&path, changes).is_err());
    }
}
