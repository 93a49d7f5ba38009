use std::env;
use std::path::PathBuf;

use crate::fetcher::API_URL;

/// Overrides the exchange rate endpoint base.
pub const API_URL_VAR: &str = "PRIVATBANK_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(API_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| API_URL.to_string());

        Self { api_url }
    }
}

/// Loads a `.env` file if there is one, returning its path.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
