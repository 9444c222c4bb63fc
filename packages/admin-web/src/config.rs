use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Application configuration
///
/// `API_BASE_URL` is read from the runtime environment (native builds, with
/// `.env` support) and otherwise from the build environment, which is the
/// only source a wasm bundle has.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let raw = env::var("API_BASE_URL")
            .ok()
            .or_else(|| option_env!("API_BASE_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self::from_base_url(&raw)
    }

    /// Build a config around an explicit base URL, validating it.
    pub fn from_base_url(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let url = reqwest::Url::parse(trimmed)
            .with_context(|| format!("API_BASE_URL is not a valid URL: {trimmed:?}"))?;

        if !matches!(url.scheme(), "http" | "https") {
            bail!("API_BASE_URL must use http or https, got {}", url.scheme());
        }

        Ok(Self {
            api_base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// [`Config::from_env`], falling back to defaults on error.
    pub fn load() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Invalid configuration, using defaults");
            Self::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
