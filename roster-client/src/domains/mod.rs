//! Domain modules.
//!
//! Each domain owns its state, its messages and a pure `update` function;
//! side effects are returned as [`crate::common::effects::Effect`] values.

pub mod user_management;
