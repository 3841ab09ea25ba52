use std::time::Duration;

use roster_model::{CreateUserData, UpdateUserData, UserId};

/// Side effects requested by a reducer, performed by [`crate::app::Runtime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchUsers {
        request_id: u64,
        page: u32,
        per_page: u32,
    },
    FetchUser {
        request_id: u64,
        user_id: UserId,
    },
    /// `submission_id` names the form that sent the data.
    CreateUser {
        submission_id: u64,
        data: CreateUserData,
    },
    UpdateUser {
        submission_id: u64,
        user_id: UserId,
        data: UpdateUserData,
    },
    /// Ask the operator before deleting.
    ConfirmDelete {
        user_id: UserId,
        prompt: String,
    },
    DeleteUser(UserId),
    CheckHealth,
    ScheduleDismiss {
        notification_id: u64,
        after: Duration,
    },
}
