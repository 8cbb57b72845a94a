use std::env::vars;

use log::info;
use serde::Deserialize;
use ustr::Ustr;

/// Public endpoint serving the user collection.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

// Intermediate struct for the process environment, every field optional.
#[derive(Debug, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    /// Reads `ROSTER_API_BASE_URL` from the environment, falling back to
    /// [`DEFAULT_API_BASE_URL`] when it is unset or blank.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");

        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw_config))
    }

    fn from_raw(raw_config: RawConfig) -> Self {
        match raw_config.roster_api_base_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided ROSTER_API_BASE_URL: {url}");
                Self::new(url.trim().trim_end_matches('/').to_string())
            }
            _ => Self::default(),
        }
    }

    /// URL of the user collection endpoint.
    pub fn users_url(&self) -> Ustr {
        Ustr::from(format!("{}/users", self.api_base_url).as_str())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL.to_string())
    }
}
