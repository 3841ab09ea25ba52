//! Roster client library
//!
//! This crate contains the library surfaces used by the `roster` executable
//! in `src/main.rs`: the REST client for the user backend, the form
//! validator, the reducer-driven view state and the terminal front end.
//!
//! Notes
//! - Public items are subject to change while the front end stabilizes.
//! - The library is exposed mainly to enable testing and alternative front
//!   ends driving the same [`app::Runtime`].

pub mod app;
pub mod cli;
pub mod common;
pub mod domains;
pub mod infra;
pub mod view;
