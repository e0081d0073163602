//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the One Bucket client and the
//! campus community backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login request/response and error bodies
//!   - **[`dto::member`]**: Member info and profile DTOs
//!   - **[`dto::board`]**: Board list, board post and post page DTOs
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON:
//! - Rust fields are snake_case and renamed with `#[serde(rename_all = "camelCase")]`
//! - Optional fields are omitted from JSON when `None`
//! - Fields the backend may leave out deserialize with `#[serde(default)]`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::member::MemberInfo;
//!
//! let member: MemberInfo = serde_json::from_str(r#"{"id":1,"nickname":"abc"}"#).unwrap();
//! assert_eq!(member.id, 1);
//! assert_eq!(member.nickname, "abc");
//! assert!(member.university.is_none());
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
