//! # Logging Infrastructure
//!
//! Structured logging for the One Bucket client core.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/one-bucket.log.<date>` with daily rotation
//! - **Filtering**: `EnvFilter` directives from `RUST_LOG`
//! - **Optional stderr mirror** for running the binary interactively
//! - **Panic logging** before the default panic handler runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup and hold the guard until exit
//! let _guard = one_bucket::debug::init().expect("logging");
//!
//! tracing::info!(endpoint = "/member/info", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: `one_bucket=info,warn`)
//! - `ONE_BUCKET_LOG_DIR`: Log directory (default: `logs`)
//! - `ONE_BUCKET_LOG_STDERR`: Also log to stderr (1=on)
//! - `ONE_BUCKET_LOG_JSON`: JSON lines in the log file (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::{init, init_with};
