//! # Core Abstractions
//!
//! Error types, configuration and the service traits the rest of the crate is
//! written against.
//!
//! ## Modules
//!
//! - **[`error`]**: `ApiError`, `TokenStoreError`, `AppError`, `Result<T>`
//! - **[`config`]**: `ClientConfig` loaded from the environment
//! - **[`service`]**: `ApiService` and `TokenStore` traits
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use one_bucket::core::service::{ApiService, TokenStore};
//!
//! // In production: reqwest client + file-backed tokens
//! let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&config.token_file));
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, tokens.clone()));
//!
//! // In tests: in-memory doubles
//! let api: Arc<dyn ApiService> = Arc::new(MockApiService::new());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{ApiError, AppError, Result, TokenStoreError};
pub use service::{ApiService, TokenStore};
