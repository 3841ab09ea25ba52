//! Infrastructure module containing the HTTP client and service seams
//!
//! Everything that talks to the outside world lives here; domains only see
//! the traits re-exported below.

pub mod api_client;
pub mod confirm;
pub mod services;
pub mod testing;

pub use api_client::{ApiClient, ApiError};
pub use confirm::{AutoConfirm, Confirmer};
pub use services::user_management::{UserAdminApiAdapter, UserAdminService};
