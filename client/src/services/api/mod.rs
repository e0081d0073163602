//! # Backend API Client Module
//!
//! HTTP client for the One Bucket backend. Every function here is a thin
//! request/response wrapper; session consequences of failures are decided by
//! the app layer.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, auth header, status mapping
//! ├── auth.rs     - Login
//! ├── member.rs   - Member info, profile, profile image, university
//! └── board.rs    - Board list, board post list
//! ```

pub mod auth;
pub mod board;
pub mod client;
pub mod member;

pub use client::ApiClient;
