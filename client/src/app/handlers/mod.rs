//! # Event Handlers
//!
//! User actions and result handlers, organized by domain.

pub mod auth;
pub mod board;
pub mod navigation;
pub mod profile;
