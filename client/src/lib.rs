//! # One Bucket Client Core - Library Root
//!
//! Session, state, navigation and theme core of the One Bucket campus
//! community app. Screens are out of scope; they sit on top of the [`App`]
//! orchestrator and read the [`app::Store`].
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              one-bucket (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  parking_lot   - State lock                            │
//! │  async-channel - Task results back to the UI thread    │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP (JSON)                  │ HTTP (bytes)
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Backend API    │          │   Storage server        │
//! │  /auth /member  │          │   /profile/image        │
//! │  /board         │          │                         │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, store, router, theme and session bootstrap
//! - **core**: Error types, configuration and service traits
//! - **services**: Backend API client, token stores and JWT claim decoding
//! - **debug**: Logging setup
//! - **utils**: Input validation
//!
//! ```text
//! main.rs
//!   │
//!   ├── debug (logging)
//!   ├── core::config (environment)
//!   └── app::App
//!       ├── app::store / app::router / app::theme
//!       ├── services::api (HTTP requests)
//!       └── services::token_store (persisted tokens)
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Updates
//!
//! Background tasks never touch the store. They send an [`AppEvent`] through
//! an unbounded channel and the UI thread applies it in [`App::on_tick`] or
//! [`App::process_next_event`].
//!
//! ### Two Navigation Graphs
//!
//! The login flag selects the graph. Every change of the flag tears down the
//! route stack and starts over at the new graph's root.

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types for convenience
pub use crate::app::{App, AppEvent, AppState, Route, Store};
pub use crate::core::{AppError, Result};
