//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the backend over the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login request/response and error bodies
//! - [`member`] - Member info, profile and university DTOs
//! - [`board`] - Board list, single posts, post pages and sort parameters
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! {
//!   "username": "student01",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "refreshToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

pub mod auth;
pub mod board;
pub mod member;

pub use auth::*;
pub use board::*;
pub use member::*;
