use std::path::PathBuf;
use std::time::Duration;

use crate::error::ExportError;

pub const DEFAULT_API_URL: &str = "https://ssapi.shipstation.com";

/// Number of orders requested per page.
pub const PAGE_SIZE: u32 = 500;

pub const API_KEY_VAR: &str = "SHIPSTATION_API_KEY";
pub const API_SECRET_VAR: &str = "SHIPSTATION_API_SECRETKEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub page_size: u32,
    pub output_dir: PathBuf,
    /// Per-request timeout. `None` waits on the API indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_url: lookup("SHIPSTATION_API_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            page_size: PAGE_SIZE,
            output_dir: lookup("ORDERS_EXPORT_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            request_timeout: lookup("SHIPSTATION_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// ShipStation API key pair used for Basic authentication.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ExportError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(ExportError::Configuration(format!(
                "Missing {} or {}",
                API_KEY_VAR, API_SECRET_VAR
            )));
        }
        Ok(Self { api_key, api_secret })
    }

    pub fn from_env() -> Result<Self, ExportError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(
            lookup(API_KEY_VAR).unwrap_or_default(),
            lookup(API_SECRET_VAR).unwrap_or_default(),
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
