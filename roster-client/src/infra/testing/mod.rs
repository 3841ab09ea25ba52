//! In-process stand-ins for the backend.
//!
//! Used by the integration tests and by the binary's `--demo` mode.

pub mod stubs;

pub use stubs::users::{InMemoryUserService, ServiceCall};
