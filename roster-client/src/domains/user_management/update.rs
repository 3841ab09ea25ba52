use log::{debug, error, info, warn};
use roster_model::UserId;

use crate::{
    common::{Effect, NotificationKind},
    domains::user_management::{
        FormSubmission, State, UserForm, messages::Message,
    },
};

pub const LOAD_FAILED: &str = "Failed to load users";
pub const CREATE_FAILED: &str = "Failed to create user";
pub const UPDATE_FAILED: &str = "Failed to update user";
pub const DELETE_FAILED: &str = "Failed to delete user";
pub const FETCH_FAILED: &str = "Failed to load user";
pub const HEALTH_FAILED: &str = "Backend is not healthy";

pub const CREATED: &str = "User created successfully";
pub const UPDATED: &str = "User updated successfully";
pub const DELETED: &str = "User deleted successfully";
pub const HEALTHY: &str = "Backend is healthy";

/// Handle user management domain messages.
///
/// Never performs I/O. Everything that has to leave the process is returned
/// as an [`Effect`] for the runtime to execute.
pub fn update_user_management(state: &mut State, message: Message) -> Vec<Effect> {
    debug!("User management update: {}", message.name());

    match message {
        // List loading and paging
        Message::LoadUsers => load_current_page(state),

        Message::PageChanged(page) => {
            state.current_page = page.max(1);
            info!("Changing to page {}", state.current_page);
            load_current_page(state)
        }

        Message::NextPage => {
            if state.pagination_info().is_some_and(|info| !info.has_next) {
                debug!("Already on the last page ({})", state.current_page);
                return Vec::new();
            }
            let next = state.current_page.saturating_add(1);
            update_user_management(state, Message::PageChanged(next))
        }

        Message::PreviousPage => {
            if state.current_page <= 1 {
                debug!("Already on the first page");
                return Vec::new();
            }
            let previous = state.current_page - 1;
            update_user_management(state, Message::PageChanged(previous))
        }

        Message::UsersLoaded {
            request_id,
            response,
        } => {
            if !state.finish_list_request(request_id) {
                debug!("Discarding stale user list response #{}", request_id);
                return Vec::new();
            }
            state.loading = false;
            let pagination = response.pagination.clone();
            match response.into_data(LOAD_FAILED) {
                Ok(users) => {
                    info!("Successfully loaded {} users", users.len());
                    state.users = users;
                    // Keep the last known blob when a response omits it.
                    if pagination.is_some() {
                        state.pagination = pagination;
                    }
                    Vec::new()
                }
                Err(message) => {
                    error!("Failed to load users: {}", message);
                    notify(state, NotificationKind::Error, message)
                }
            }
        }

        // Form lifecycle
        Message::BeginCreate => {
            info!("Starting user creation flow");
            state.open_form(UserForm::create());
            Vec::new()
        }

        Message::BeginEdit(user) => {
            info!("Editing user {} ({})", user.id, user.username);
            state.open_form(UserForm::edit(user));
            Vec::new()
        }

        Message::FormFieldChanged(field, value) => {
            match state.form.as_mut() {
                Some(form) => form.set(field, value),
                None => warn!("Ignoring {} change with no open form", field),
            }
            Vec::new()
        }

        Message::SubmitForm => {
            if state.submitting {
                debug!("Submission already in progress");
                return Vec::new();
            }
            let Some(form) = state.form.as_mut() else {
                warn!("Submit requested with no open form");
                return Vec::new();
            };
            match form.submit() {
                Ok(FormSubmission::Create(data)) => {
                    update_user_management(state, Message::SubmitCreate(data))
                }
                Ok(FormSubmission::Update(data)) => {
                    update_user_management(state, Message::SubmitUpdate(data))
                }
                Err(errors) => {
                    debug!("Form has {} invalid field(s)", errors.len());
                    Vec::new()
                }
            }
        }

        Message::CancelForm => {
            debug!("Closing user form");
            state.form = None;
            Vec::new()
        }

        // Submissions
        Message::SubmitCreate(data) => {
            if state.submitting {
                debug!("Submission already in progress");
                return Vec::new();
            }
            info!("Creating user {}", data.username);
            state.submitting = true;
            vec![Effect::CreateUser {
                submission_id: state.submission_id(),
                data,
            }]
        }

        Message::SubmitUpdate(data) => {
            let Some(user_id) = state.edit_target().map(|user| user.id) else {
                warn!("Update submitted without an edit target");
                return Vec::new();
            };
            if state.submitting {
                debug!("Submission already in progress");
                return Vec::new();
            }
            info!("Updating user {}", user_id);
            state.submitting = true;
            vec![Effect::UpdateUser {
                submission_id: state.submission_id(),
                user_id,
                data,
            }]
        }

        Message::UserCreated {
            submission_id,
            response,
        } => {
            state.submitting = false;
            match response.into_data(CREATE_FAILED) {
                Ok(user) => {
                    info!("Created user {} ({})", user.id, user.username);
                    if !state.close_submitted_form(submission_id) {
                        debug!("Form #{} already closed, leaving current form", submission_id);
                    }
                    state.current_page = 1;
                    let mut effects = load_current_page(state);
                    effects.extend(notify(state, NotificationKind::Success, CREATED));
                    effects
                }
                Err(message) => {
                    error!("Failed to create user: {}", message);
                    notify(state, NotificationKind::Error, message)
                }
            }
        }

        Message::UserUpdated {
            submission_id,
            response,
        } => {
            state.submitting = false;
            match response.into_data(UPDATE_FAILED) {
                Ok(user) => {
                    info!("Updated user {} ({})", user.id, user.username);
                    if !state.close_submitted_form(submission_id) {
                        debug!("Form #{} already closed, leaving current form", submission_id);
                    }
                    if state.selected.as_ref().is_some_and(|s| s.id == user.id) {
                        state.selected = Some(user);
                    }
                    let mut effects = load_current_page(state);
                    effects.extend(notify(state, NotificationKind::Success, UPDATED));
                    effects
                }
                Err(message) => {
                    error!("Failed to update user: {}", message);
                    notify(state, NotificationKind::Error, message)
                }
            }
        }

        // User deletion
        Message::DeleteUser(user_id) => {
            let prompt = delete_prompt(state, user_id);
            vec![Effect::ConfirmDelete { user_id, prompt }]
        }

        Message::DeleteConfirmed(user_id) => {
            info!("Deleting user {}", user_id);
            vec![Effect::DeleteUser(user_id)]
        }

        Message::DeleteDeclined(user_id) => {
            debug!("Deletion of user {} declined", user_id);
            Vec::new()
        }

        Message::UserDeleted(user_id, response) => match response.into_unit(DELETE_FAILED) {
            Ok(()) => {
                info!("Deleted user {}", user_id);
                if state.selected.as_ref().is_some_and(|s| s.id == user_id) {
                    state.selected = None;
                }
                if state.edit_target().is_some_and(|u| u.id == user_id) {
                    state.form = None;
                }
                let mut effects = load_current_page(state);
                effects.extend(notify(state, NotificationKind::Success, DELETED));
                effects
            }
            Err(message) => {
                error!("Failed to delete user {}: {}", user_id, message);
                notify(state, NotificationKind::Error, message)
            }
        },

        // Detail view
        Message::ViewUser(user_id) => vec![Effect::FetchUser {
            request_id: state.begin_detail_request(),
            user_id,
        }],

        Message::UserFetched {
            request_id,
            user_id,
            response,
        } => {
            if !state.finish_detail_request(request_id) {
                debug!("Discarding stale response for user {} (#{})", user_id, request_id);
                return Vec::new();
            }
            match response.into_data(FETCH_FAILED) {
                Ok(user) => {
                    state.selected = Some(user);
                    Vec::new()
                }
                Err(message) => {
                    error!("Failed to fetch user {}: {}", user_id, message);
                    notify(state, NotificationKind::Error, message)
                }
            }
        }

        Message::CloseDetail => {
            state.selected = None;
            Vec::new()
        }

        // Backend health
        Message::CheckHealth => vec![Effect::CheckHealth],

        Message::HealthChecked(response) => {
            let detail = response
                .message
                .clone()
                .filter(|m| !m.trim().is_empty());
            match response.into_unit(HEALTH_FAILED) {
                Ok(()) => {
                    let text = match detail {
                        Some(detail) => format!("{}: {}", HEALTHY, detail),
                        None => HEALTHY.to_string(),
                    };
                    notify(state, NotificationKind::Success, text)
                }
                Err(message) => {
                    warn!("Health check failed: {}", message);
                    notify(state, NotificationKind::Error, message)
                }
            }
        }

        // Notification banner
        Message::DismissNotification => {
            state.notification = None;
            Vec::new()
        }

        Message::NotificationExpired(id) => {
            if state.notification.as_ref().is_some_and(|n| n.id == id) {
                state.notification = None;
            }
            Vec::new()
        }
    }
}

fn load_current_page(state: &mut State) -> Vec<Effect> {
    state.loading = true;
    let request_id = state.begin_list_request();
    debug!(
        "Loading users page {} (request #{})",
        state.current_page, request_id
    );
    vec![Effect::FetchUsers {
        request_id,
        page: state.current_page,
        per_page: state.per_page,
    }]
}

fn notify(state: &mut State, kind: NotificationKind, message: impl Into<String>) -> Vec<Effect> {
    let notification_id = state.notify(kind, message);
    vec![Effect::ScheduleDismiss {
        notification_id,
        after: state.notification_ttl,
    }]
}

fn delete_prompt(state: &State, user_id: UserId) -> String {
    match state.users.iter().find(|user| user.id == user_id) {
        Some(user) => format!("Delete user '{}'?", user.username),
        None => format!("Delete user #{}?", user_id),
    }
}
