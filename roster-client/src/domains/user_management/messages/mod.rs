use roster_model::{ApiResponse, CreateUserData, UpdateUserData, User, UserId};

use crate::domains::user_management::validation::FormField;

#[derive(Clone, Debug)]
pub enum Message {
    // List loading and paging
    LoadUsers,
    PageChanged(u32),
    NextPage,
    PreviousPage,
    UsersLoaded {
        request_id: u64,
        response: ApiResponse<Vec<User>>,
    },

    // Form lifecycle
    BeginCreate,
    BeginEdit(User),
    FormFieldChanged(FormField, String),
    SubmitForm,
    CancelForm,

    // Submissions (already validated by the form)
    SubmitCreate(CreateUserData),
    SubmitUpdate(UpdateUserData),
    UserCreated {
        submission_id: u64,
        response: ApiResponse<User>,
    },
    UserUpdated {
        submission_id: u64,
        response: ApiResponse<User>,
    },

    // User deletion
    DeleteUser(UserId),
    DeleteConfirmed(UserId),
    DeleteDeclined(UserId),
    UserDeleted(UserId, ApiResponse<()>),

    // Detail view
    ViewUser(UserId),
    UserFetched {
        request_id: u64,
        user_id: UserId,
        response: ApiResponse<User>,
    },
    CloseDetail,

    // Backend health
    CheckHealth,
    HealthChecked(ApiResponse<serde_json::Value>),

    // Notification banner
    DismissNotification,
    NotificationExpired(u64),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadUsers => "UserManagement::LoadUsers",
            Self::PageChanged(_) => "UserManagement::PageChanged",
            Self::NextPage => "UserManagement::NextPage",
            Self::PreviousPage => "UserManagement::PreviousPage",
            Self::UsersLoaded { .. } => "UserManagement::UsersLoaded",

            Self::BeginCreate => "UserManagement::BeginCreate",
            Self::BeginEdit(_) => "UserManagement::BeginEdit",
            Self::FormFieldChanged(_, _) => "UserManagement::FormFieldChanged",
            Self::SubmitForm => "UserManagement::SubmitForm",
            Self::CancelForm => "UserManagement::CancelForm",

            Self::SubmitCreate(_) => "UserManagement::SubmitCreate",
            Self::SubmitUpdate(_) => "UserManagement::SubmitUpdate",
            Self::UserCreated { .. } => "UserManagement::UserCreated",
            Self::UserUpdated { .. } => "UserManagement::UserUpdated",

            Self::DeleteUser(_) => "UserManagement::DeleteUser",
            Self::DeleteConfirmed(_) => "UserManagement::DeleteConfirmed",
            Self::DeleteDeclined(_) => "UserManagement::DeleteDeclined",
            Self::UserDeleted(_, _) => "UserManagement::UserDeleted",

            Self::ViewUser(_) => "UserManagement::ViewUser",
            Self::UserFetched { .. } => "UserManagement::UserFetched",
            Self::CloseDetail => "UserManagement::CloseDetail",

            Self::CheckHealth => "UserManagement::CheckHealth",
            Self::HealthChecked(_) => "UserManagement::HealthChecked",

            Self::DismissNotification => "UserManagement::DismissNotification",
            Self::NotificationExpired(_) => "UserManagement::NotificationExpired",
        }
    }
}
