//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation utilities (login form, email, phone number)

pub mod validation;
