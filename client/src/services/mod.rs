//! # Services Module
//!
//! The two external collaborators of the client core.
//!
//! ```text
//! services/
//! ├── api/            - Backend HTTP API client (reqwest)
//! ├── token_store.rs  - Access/refresh token persistence
//! └── jwt.rs          - Unverified access-token claims
//! ```
//!
//! ## Error Handling
//!
//! - `ApiClient` returns `Result<T, ApiError>`. 401/403 become
//!   `ApiError::Auth`, which the app layer treats as "logged out".
//! - Token stores return `Result<T, TokenStoreError>`; an absent token is
//!   `Ok(None)`.
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps `reqwest::Client` and can be shared behind an `Arc`.
//! Both token stores are internally synchronized.

pub mod api;
pub mod jwt;
pub mod token_store;

pub use api::ApiClient;
pub use token_store::{FileTokenStore, MemoryTokenStore};
