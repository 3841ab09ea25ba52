use std::sync::Arc;

use log::info;
use roster_config::ClientConfig;

use crate::{
    domains::user_management::State,
    infra::{
        ApiClient, ApiError, Confirmer, UserAdminApiAdapter, UserAdminService,
        testing::InMemoryUserService,
    },
};

use super::Runtime;

/// Number of users the demo backend starts with.
pub const OFFLINE_SAMPLE_USERS: usize = 12;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub use_test_stubs: bool,
}

impl AppConfig {
    pub fn new(client: ClientConfig) -> Self {
        Self {
            client,
            use_test_stubs: false,
        }
    }

    pub fn with_test_stubs(mut self, enabled: bool) -> Self {
        self.use_test_stubs = enabled;
        self
    }

    /// Backend selected by this configuration.
    pub fn service(&self) -> Result<Arc<dyn UserAdminService>, ApiError> {
        if self.use_test_stubs {
            info!(
                "Using in-memory user backend with {} sample users",
                OFFLINE_SAMPLE_USERS
            );
            return Ok(Arc::new(InMemoryUserService::with_sample_users(
                OFFLINE_SAMPLE_USERS,
            )));
        }
        let client = ApiClient::from_config(&self.client)?;
        Ok(Arc::new(UserAdminApiAdapter::new(Arc::new(client))))
    }
}

/// Build a runtime with empty state; callers dispatch the first load.
pub fn runtime_boot(
    config: &AppConfig,
    confirmer: Arc<dyn Confirmer>,
) -> Result<Runtime, ApiError> {
    let service = config.service()?;
    Ok(Runtime::new(
        State::from_config(&config.client),
        service,
        confirmer,
    ))
}
