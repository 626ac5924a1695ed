use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR_PREFIX: &str = "infaq-tracker";

const ZOHO_ACCOUNTS_URL: &str = "https://accounts.zoho.com";
const ZOHO_SHEET_API_URL: &str = "https://sheet.zoho.com/api/v2";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub zoho: ZohoConfig,
    #[serde(default)]
    pub entry: EntryConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ZohoConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub workbook_id: String,
    /// Worksheet holding the precomputed lookup rows (e.g. "CARI DATA").
    pub lookup_worksheet: String,
    /// Destination worksheet for submitted payment rows.
    #[serde(default)]
    pub entry_worksheet: String,
    /// Overrides for tests and regional Zoho deployments.
    #[serde(default)]
    pub accounts_url: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
}

impl ZohoConfig {
    pub fn token_endpoint(&self) -> String {
        format!(
            "{}/oauth/v2/token",
            self.accounts_url.as_deref().unwrap_or(ZOHO_ACCOUNTS_URL)
        )
    }

    pub fn api_base(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| ZOHO_SHEET_API_URL.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EntryConfig {
    /// Row submission stays off until the destination sheet schema is confirmed.
    #[serde(default)]
    pub enabled: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file()?;

        if !config_path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found at {:?}. Please create one.",
                config_path
            )));
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Fail fast when any credential or sheet address needed by the vendor
    /// API is absent.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("zoho.client_id", &self.zoho.client_id),
            ("zoho.client_secret", &self.zoho.client_secret),
            ("zoho.refresh_token", &self.zoho.refresh_token),
            ("zoho.workbook_id", &self.zoho.workbook_id),
            ("zoho.lookup_worksheet", &self.zoho.lookup_worksheet),
        ];

        for (name, value) in required {
            if value.is_empty() {
                return Err(AppError::Config(format!(
                    "{} must be set in config file",
                    name
                )));
            }
        }

        Ok(())
    }

    fn xdg_dirs() -> xdg::BaseDirectories {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        let xdg_dirs = Self::xdg_dirs();
        xdg_dirs
            .place_config_file("config.toml")
            .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))
    }
}
