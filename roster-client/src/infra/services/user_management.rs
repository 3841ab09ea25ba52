use async_trait::async_trait;
use roster_model::{
    ApiResponse, CreateUserData, UpdateUserData, User, UserId,
    routes::{self, users, utils},
};
use std::sync::Arc;

use crate::infra::api_client::ApiClient;

/// Operations the user-management domain needs from the backend.
///
/// Implementations never fail with a transport error: every outcome is an
/// [`ApiResponse`], failures included.
#[async_trait]
pub trait UserAdminService: Send + Sync {
    /// List one page of users
    async fn list_users(&self, page: u32, per_page: u32) -> ApiResponse<Vec<User>>;

    /// Fetch a single user by id
    async fn get_user(&self, user_id: UserId) -> ApiResponse<User>;

    async fn create_user(&self, data: CreateUserData) -> ApiResponse<User>;

    async fn update_user(&self, user_id: UserId, data: UpdateUserData) -> ApiResponse<User>;

    /// Success may carry no payload.
    async fn delete_user(&self, user_id: UserId) -> ApiResponse<()>;

    async fn health_check(&self) -> ApiResponse<serde_json::Value>;
}

#[derive(Clone, Debug)]
pub struct UserAdminApiAdapter {
    client: Arc<ApiClient>,
}

impl UserAdminApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn item_path(user_id: UserId) -> String {
        utils::replace_param(users::ITEM, "{id}", user_id.to_string())
    }
}

#[async_trait]
impl UserAdminService for UserAdminApiAdapter {
    async fn list_users(&self, page: u32, per_page: u32) -> ApiResponse<Vec<User>> {
        self.client
            .get_with_query(users::COLLECTION, &[("page", page), ("per_page", per_page)])
            .await
    }

    async fn get_user(&self, user_id: UserId) -> ApiResponse<User> {
        self.client.get(&Self::item_path(user_id)).await
    }

    async fn create_user(&self, data: CreateUserData) -> ApiResponse<User> {
        self.client.post(users::COLLECTION, &data).await
    }

    async fn update_user(&self, user_id: UserId, data: UpdateUserData) -> ApiResponse<User> {
        self.client.put(&Self::item_path(user_id), &data).await
    }

    async fn delete_user(&self, user_id: UserId) -> ApiResponse<()> {
        // Tolerate whatever payload the backend attaches to a delete.
        let response: ApiResponse<serde_json::Value> =
            self.client.delete(&Self::item_path(user_id)).await;
        response.map(|_| ())
    }

    async fn health_check(&self) -> ApiResponse<serde_json::Value> {
        self.client.get(routes::HEALTH).await
    }
}
