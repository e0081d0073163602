//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "one_bucket=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Directory for rotated log files
    pub log_dir: PathBuf,
    /// File name prefix; the date is appended on rotation
    pub log_file_name: String,
    /// Log level filter (e.g., "one_bucket=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
    /// Write JSON lines instead of plain text to the file
    pub json: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "one-bucket.log".to_string(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_to_stderr: false,
            json: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_dir: std::env::var("ONE_BUCKET_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file_name: defaults.log_file_name,
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: flag("ONE_BUCKET_LOG_STDERR"),
            json: flag("ONE_BUCKET_LOG_JSON"),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }
}

fn flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
