//! Configuration management for carent
//!
//! Config stored at: ~/.config/carent/config.json

use std::path::{Path, PathBuf};

use carent_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Business contact details shown on the contact page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    #[serde(default = "default_business_name")]
    pub name: String,
    #[serde(default = "default_business_email")]
    pub email: String,
    #[serde(default = "default_business_phone")]
    pub phone: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: default_business_name(),
            email: default_business_email(),
            phone: default_business_phone(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// WhatsApp business number in international form, digits only
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Deep link prefix
    #[serde(default = "default_whatsapp_base_url")]
    pub whatsapp_base_url: String,

    #[serde(default)]
    pub business: BusinessInfo,

    /// Catalog file (TOML, JSON or CSV). Built-in fleet when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_whatsapp_number() -> String {
    "6282248751765".to_string()
}

fn default_whatsapp_base_url() -> String {
    "https://wa.me/".to_string()
}

fn default_business_name() -> String {
    "Car Rental Service".to_string()
}

fn default_business_email() -> String {
    "info@carrental.com".to_string()
}

fn default_business_phone() -> String {
    "+62 822-4875-1765".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            whatsapp_base_url: default_whatsapp_base_url(),
            business: BusinessInfo::default(),
            catalog_path: None,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("carent");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Carent Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "WhatsApp number: {}", self.whatsapp_number)?;
        writeln!(f, "WhatsApp link:   {}", self.whatsapp_base_url)?;
        writeln!(f, "Business:        {}", self.business.name)?;
        writeln!(f, "Email:           {}", self.business.email)?;
        writeln!(f, "Phone:           {}", self.business.phone)?;
        writeln!(
            f,
            "Catalog:         {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Output format:   {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
