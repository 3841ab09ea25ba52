//! Shared configuration library for Roster.
//!
//! Centralizes client defaults, `.env` loading and validation so the binary
//! and the tests agree on a single source of truth.

pub mod constants;
pub mod loader;
pub mod models;

pub use loader::{ConfigLoader, error::ConfigError};
pub use models::ClientConfig;
