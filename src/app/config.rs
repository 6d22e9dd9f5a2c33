//! Application configuration for rocketcart.

use std::path::PathBuf;

use url::Url;

use crate::domain::CartError;

const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Application-wide configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the shop API serving `/stock/{id}` and `/products/{id}`.
    pub api_url: Url,
    /// Directory holding the key-value storage file.
    pub storage_path: PathBuf,
}

impl Config {
    /// Create a configuration with explicit values.
    pub fn new(api_url: Url, storage_path: PathBuf) -> Self {
        Self { api_url, storage_path }
    }

    /// Create configuration from the environment.
    ///
    /// `ROCKETCART_API_URL` overrides the API base URL (default
    /// `http://localhost:3333`); `ROCKETCART_STORAGE_PATH` overrides the
    /// storage directory (default `$HOME/.config/rocketcart`).
    pub fn new_default() -> Result<Self, CartError> {
        let raw_url =
            std::env::var("ROCKETCART_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url)
            .map_err(|e| CartError::Configuration(format!("invalid API URL '{raw_url}': {e}")))?;

        let storage_path = match std::env::var("ROCKETCART_STORAGE_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                let home = std::env::var("HOME").map_err(|_| {
                    CartError::Configuration("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config").join("rocketcart")
            }
        };

        Ok(Self { api_url, storage_path })
    }
}
