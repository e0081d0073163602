//! # Client Configuration
//!
//! Configuration loaded from environment variables. Every value has a
//! development default, so `from_env` only fails on malformed input;
//! [`ClientConfig::validate`] enforces the remaining rules.
//!
//! | Variable                  | Default                   |
//! |---------------------------|---------------------------|
//! | `ONE_BUCKET_API_URL`      | `http://127.0.0.1:8080`   |
//! | `ONE_BUCKET_STORAGE_URL`  | same as the API URL       |
//! | `ONE_BUCKET_TIMEOUT_SECS` | `10`                      |
//! | `ONE_BUCKET_TOKEN_FILE`   | `data/tokens.json`        |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TOKEN_FILE: &str = "data/tokens.json";

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for JSON API calls
    pub api_base_url: String,

    /// Base URL for binary downloads (profile images)
    pub storage_base_url: String,

    /// Per-request timeout
    ///
    /// Valid range: 1-120 seconds
    pub request_timeout: Duration,

    /// Where the token pair is persisted
    pub token_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            storage_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("ONE_BUCKET_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let storage_base_url = env::var("ONE_BUCKET_STORAGE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| api_base_url.clone());

        let timeout_secs: u64 = env::var("ONE_BUCKET_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|e| {
                AppError::Config(format!("ONE_BUCKET_TIMEOUT_SECS must be a valid number: {}", e))
            })?;

        let token_file = env::var("ONE_BUCKET_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE));

        Ok(Self {
            api_base_url,
            storage_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            token_file,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("ONE_BUCKET_API_URL", &self.api_base_url),
            ("ONE_BUCKET_STORAGE_URL", &self.storage_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        let secs = self.request_timeout.as_secs();
        if !(1..=120).contains(&secs) {
            return Err(AppError::Config(
                "ONE_BUCKET_TIMEOUT_SECS must be between 1 and 120".to_string(),
            ));
        }

        Ok(())
    }
}
