//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MERCADITO_WHATSAPP_PHONE` - WhatsApp number for checkout links (digits only)
//!
//! ## Optional
//! - `MERCADITO_HOST` - Bind address (default: 127.0.0.1)
//! - `MERCADITO_PORT` - Listen port (default: 3000)
//! - `MERCADITO_BASE_URL` - Public URL for the storefront (default: http://localhost:3000)
//! - `MERCADITO_CATALOG_BACKEND` - `static` (default) or `sheet`
//! - `MERCADITO_SHEET_URL` - Published CSV export URL (required when backend is `sheet`)
//! - `MERCADITO_FETCH_TIMEOUT_SECS` - Timeout for the sheet fetch (default: 10)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_FETCH_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront (QR codes point here)
    pub base_url: String,
    /// WhatsApp number receiving checkout messages, digits only
    pub whatsapp_phone: String,
    /// Catalog data source selection
    pub catalog: CatalogConfig,
}

/// Catalog backend selection.
///
/// Both backends produce the same ordered product list; the choice only
/// affects where the data comes from.
#[derive(Debug, Clone)]
pub enum CatalogConfig {
    /// Fixed, hand-authored product table.
    Static,
    /// Published spreadsheet CSV export fetched over HTTP.
    Sheet {
        url: Url,
        fetch_timeout: Duration,
    },
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MERCADITO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCADITO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MERCADITO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCADITO_PORT".to_string(), e.to_string()))?;

        let base_url = get_env_or_default("MERCADITO_BASE_URL", "http://localhost:3000");
        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("MERCADITO_BASE_URL".to_string(), e.to_string())
        })?;

        let whatsapp_phone = get_required_env("MERCADITO_WHATSAPP_PHONE")?;
        validate_phone(&whatsapp_phone, "MERCADITO_WHATSAPP_PHONE")?;

        let catalog = CatalogConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            whatsapp_phone,
            catalog,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let kind = get_env_or_default("MERCADITO_CATALOG_BACKEND", "static");
        let sheet_url = get_optional_env("MERCADITO_SHEET_URL");
        let timeout_secs =
            get_env_or_default("MERCADITO_FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)
                .parse::<u64>()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "MERCADITO_FETCH_TIMEOUT_SECS".to_string(),
                        e.to_string(),
                    )
                })?;

        Self::parse(&kind, sheet_url.as_deref(), timeout_secs)
    }

    fn parse(
        kind: &str,
        sheet_url: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        match kind {
            "static" => Ok(Self::Static),
            "sheet" => {
                let raw = sheet_url.ok_or_else(|| {
                    ConfigError::MissingEnvVar("MERCADITO_SHEET_URL".to_string())
                })?;
                let url = Url::parse(raw).map_err(|e| {
                    ConfigError::InvalidEnvVar("MERCADITO_SHEET_URL".to_string(), e.to_string())
                })?;
                Ok(Self::Sheet {
                    url,
                    fetch_timeout: Duration::from_secs(timeout_secs),
                })
            }
            other => Err(ConfigError::InvalidEnvVar(
                "MERCADITO_CATALOG_BACKEND".to_string(),
                format!("unknown backend `{other}` (expected `static` or `sheet`)"),
            )),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a WhatsApp phone number is non-empty digits.
///
/// `wa.me` links take the number in international format without `+`,
/// spaces, or dashes.
fn validate_phone(phone: &str, var_name: &str) -> Result<(), ConfigError> {
    if phone.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must contain digits only (international format, no `+`)".to_string(),
        ));
    }
    Ok(())
}
