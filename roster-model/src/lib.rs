//! Wire data model definitions shared across Roster crates.
#![allow(missing_docs)]

pub mod envelope;
pub mod ids;
pub mod routes;
pub mod user;

pub use envelope::{ApiResponse, PaginationInfo};
pub use ids::UserId;
pub use user::{CreateUserData, UpdateUserData, User};
