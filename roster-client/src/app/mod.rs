//! Application wiring: configuration to backend, reducer to runtime.

pub mod bootstrap;
pub mod runtime;

pub use bootstrap::{AppConfig, runtime_boot};
pub use runtime::{Runtime, RuntimeError};
