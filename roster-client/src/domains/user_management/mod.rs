//! User management domain
//!
//! Owns the paginated user list, the create/edit form, the detail
//! selection and the notification banner. All transitions go through
//! [`update::update_user_management`].

pub mod form;
pub mod messages;
pub mod update;
pub mod validation;

use std::time::Duration;

use roster_config::ClientConfig;
use roster_model::{PaginationInfo, User};

use crate::common::{Notification, NotificationKind};

pub use form::{FormMode, FormSubmission, UserForm};
pub use messages::Message;
pub use update::update_user_management;
pub use validation::{FieldErrors, FormField, validate_user_fields};

/// View state for the user management screen.
#[derive(Debug, Clone)]
pub struct State {
    /// Users of the current page in server order.
    pub users: Vec<User>,
    pub loading: bool,
    pub current_page: u32,
    pub per_page: u32,
    /// Pagination blob exactly as the backend sent it.
    pub pagination: Option<serde_json::Value>,
    /// Open form, if any. An edit form carries its edit target.
    pub form: Option<UserForm>,
    pub submitting: bool,
    /// User shown in the detail pane.
    pub selected: Option<User>,
    pub notification: Option<Notification>,
    pub notification_ttl: Duration,
    next_request_id: u64,
    latest_list_request: Option<u64>,
    latest_detail_request: Option<u64>,
    next_form_id: u64,
    /// Id of the open form; submissions carry it back on completion.
    form_id: u64,
    next_notification_id: u64,
}

impl State {
    pub fn new(per_page: u32, notification_ttl: Duration) -> Self {
        Self {
            users: Vec::new(),
            loading: false,
            current_page: 1,
            per_page,
            pagination: None,
            form: None,
            submitting: false,
            selected: None,
            notification: None,
            notification_ttl,
            next_request_id: 0,
            latest_list_request: None,
            latest_detail_request: None,
            next_form_id: 0,
            form_id: 0,
            next_notification_id: 0,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.per_page, config.notification_ttl)
    }

    pub fn form_visible(&self) -> bool {
        self.form.is_some()
    }

    /// The user being edited; only present while an edit form is open.
    pub fn edit_target(&self) -> Option<&User> {
        self.form.as_ref().and_then(UserForm::editing)
    }

    pub fn pagination_info(&self) -> Option<PaginationInfo> {
        self.pagination.as_ref().and_then(PaginationInfo::from_value)
    }

    pub(crate) fn begin_list_request(&mut self) -> u64 {
        self.next_request_id += 1;
        self.latest_list_request = Some(self.next_request_id);
        self.next_request_id
    }

    pub(crate) fn finish_list_request(&mut self, request_id: u64) -> bool {
        if self.latest_list_request != Some(request_id) {
            return false;
        }
        self.latest_list_request = None;
        true
    }

    pub(crate) fn begin_detail_request(&mut self) -> u64 {
        self.next_request_id += 1;
        self.latest_detail_request = Some(self.next_request_id);
        self.next_request_id
    }

    pub(crate) fn finish_detail_request(&mut self, request_id: u64) -> bool {
        if self.latest_detail_request != Some(request_id) {
            return false;
        }
        self.latest_detail_request = None;
        true
    }

    pub(crate) fn open_form(&mut self, form: UserForm) {
        self.next_form_id += 1;
        self.form_id = self.next_form_id;
        self.form = Some(form);
    }

    /// Id a submission from the open form carries; 0 when no form is open.
    pub(crate) fn submission_id(&self) -> u64 {
        if self.form.is_some() { self.form_id } else { 0 }
    }

    /// Close the form only if it is the one that sent `submission_id`.
    pub(crate) fn close_submitted_form(&mut self, submission_id: u64) -> bool {
        if self.form.is_none() || self.form_id != submission_id {
            return false;
        }
        self.form = None;
        true
    }

    /// Replace the banner and return the id its dismiss timer must carry.
    pub(crate) fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_notification_id += 1;
        self.notification = Some(Notification {
            id: self.next_notification_id,
            kind,
            message: message.into(),
        });
        self.next_notification_id
    }
}

impl Default for State {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}
