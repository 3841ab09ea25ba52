use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use roster_model::{ApiResponse, CreateUserData, UpdateUserData, User, UserId};
use serde_json::json;

use crate::infra::api_client::NOT_FOUND_MESSAGE;
use crate::infra::services::user_management::UserAdminService;

/// A call the stub received, recorded in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    List { page: u32, per_page: u32 },
    Get(UserId),
    Create(CreateUserData),
    Update(UserId, UpdateUserData),
    Delete(UserId),
    Health,
}

/// Backend emulation kept entirely in memory.
///
/// Mirrors the real backend's envelopes, pagination blob and uniqueness
/// checks closely enough for the controller to be exercised end to end.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserService {
    inner: Arc<Mutex<InnerUserState>>,
}

#[derive(Debug, Default)]
struct InnerUserState {
    users: Vec<User>,
    next_id: i64,
    calls: Vec<ServiceCall>,
    forced_list_failure: Option<String>,
    forced_failure: Option<String>,
    list_delays: HashMap<u32, Duration>,
}

impl InMemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub pre-populated with `count` generated users.
    pub fn with_sample_users(count: usize) -> Self {
        let service = Self::new();
        for i in 1..=count {
            service.seed(CreateUserData {
                username: format!("user{i:02}"),
                email: format!("user{i:02}@example.com"),
                first_name: format!("First{i}"),
                last_name: format!("Last{i}"),
            });
        }
        service
    }

    fn lock(&self) -> MutexGuard<'_, InnerUserState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Insert a user directly, bypassing validation and call recording.
    pub fn seed(&self, data: CreateUserData) -> User {
        let mut guard = self.lock();
        guard.insert(data)
    }

    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Make list calls answer `{success: false, error}` until cleared.
    pub fn fail_lists_with(&self, error: Option<&str>) {
        self.lock().forced_list_failure = error.map(str::to_string);
    }

    /// Make every mutating call answer `{success: false, error}` until cleared.
    pub fn fail_mutations_with(&self, error: Option<&str>) {
        self.lock().forced_failure = error.map(str::to_string);
    }

    /// Delay list responses for `page`, to provoke out-of-order completion.
    pub fn delay_page(&self, page: u32, delay: Duration) {
        self.lock().list_delays.insert(page, delay);
    }
}

impl InnerUserState {
    fn insert(&mut self, data: CreateUserData) -> User {
        self.next_id += 1;
        let now = Utc::now().to_rfc3339();
        let user = User {
            id: UserId(self.next_id),
            username: data.username.trim().to_string(),
            email: data.email.trim().to_lowercase(),
            first_name: data.first_name.trim().to_string(),
            last_name: data.last_name.trim().to_string(),
            created_at: now.clone(),
            updated_at: now,
        };
        self.users.push(user.clone());
        user
    }

    fn conflict(&self, data: &UpdateUserData, except: Option<UserId>) -> Option<&'static str> {
        for other in self.users.iter().filter(|u| Some(u.id) != except) {
            if data
                .username
                .as_deref()
                .is_some_and(|username| other.username == username.trim())
            {
                return Some("Username already exists");
            }
            if data
                .email
                .as_deref()
                .is_some_and(|email| other.email == email.trim().to_lowercase())
            {
                return Some("Email already exists");
            }
        }
        None
    }
}

#[async_trait]
impl UserAdminService for InMemoryUserService {
    async fn list_users(&self, page: u32, per_page: u32) -> ApiResponse<Vec<User>> {
        let delay = {
            let mut guard = self.lock();
            guard.calls.push(ServiceCall::List { page, per_page });
            guard.list_delays.get(&page).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let guard = self.lock();
        if let Some(error) = &guard.forced_list_failure {
            return ApiResponse::failure(error.clone());
        }

        let per_page = per_page.clamp(1, 100);
        let page = page.max(1);
        let total = guard.users.len();
        let pages = total.div_ceil(per_page as usize);
        let start = (page as usize - 1) * per_page as usize;
        let items: Vec<User> = guard
            .users
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        ApiResponse::ok(items).with_pagination(json!({
            "page": page,
            "per_page": per_page,
            "total": total,
            "pages": pages,
            "has_next": (page as usize) < pages,
            "has_prev": page > 1,
        }))
    }

    async fn get_user(&self, user_id: UserId) -> ApiResponse<User> {
        let mut guard = self.lock();
        guard.calls.push(ServiceCall::Get(user_id));
        match guard.users.iter().find(|u| u.id == user_id) {
            Some(user) => ApiResponse::ok(user.clone()),
            None => ApiResponse::failure(NOT_FOUND_MESSAGE),
        }
    }

    async fn create_user(&self, data: CreateUserData) -> ApiResponse<User> {
        let mut guard = self.lock();
        guard.calls.push(ServiceCall::Create(data.clone()));
        if let Some(error) = &guard.forced_failure {
            return ApiResponse::failure(error.clone());
        }
        if let Some(conflict) = guard.conflict(&data.clone().into(), None) {
            return ApiResponse::failure(conflict);
        }
        let user = guard.insert(data);
        ApiResponse::ok(user).with_message("User created successfully")
    }

    async fn update_user(&self, user_id: UserId, data: UpdateUserData) -> ApiResponse<User> {
        let mut guard = self.lock();
        guard.calls.push(ServiceCall::Update(user_id, data.clone()));
        if let Some(error) = &guard.forced_failure {
            return ApiResponse::failure(error.clone());
        }
        if let Some(conflict) = guard.conflict(&data, Some(user_id)) {
            return ApiResponse::failure(conflict);
        }
        let Some(user) = guard.users.iter_mut().find(|u| u.id == user_id) else {
            return ApiResponse::failure(NOT_FOUND_MESSAGE);
        };
        data.apply_to(user);
        user.updated_at = Utc::now().to_rfc3339();
        ApiResponse::ok(user.clone()).with_message("User updated successfully")
    }

    async fn delete_user(&self, user_id: UserId) -> ApiResponse<()> {
        let mut guard = self.lock();
        guard.calls.push(ServiceCall::Delete(user_id));
        if let Some(error) = &guard.forced_failure {
            return ApiResponse::failure(error.clone());
        }
        let before = guard.users.len();
        guard.users.retain(|u| u.id != user_id);
        if guard.users.len() == before {
            return ApiResponse::failure(NOT_FOUND_MESSAGE);
        }
        ApiResponse::ok_empty().with_message("User deleted successfully")
    }

    async fn health_check(&self) -> ApiResponse<serde_json::Value> {
        let mut guard = self.lock();
        guard.calls.push(ServiceCall::Health);
        ApiResponse::ok_empty().with_message("API is running")
    }
}
