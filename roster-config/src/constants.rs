//! Environment keys and defaults.

use std::time::Duration;

pub const ENV_API_URL: &str = "ROSTER_API_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "ROSTER_REQUEST_TIMEOUT";
pub const ENV_PER_PAGE: &str = "ROSTER_PER_PAGE";
pub const ENV_NOTIFICATION_TTL: &str = "ROSTER_NOTIFICATION_TTL";

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PER_PAGE: u32 = 50;
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// The backend refuses page sizes above this.
pub const MAX_PER_PAGE: u32 = 100;
