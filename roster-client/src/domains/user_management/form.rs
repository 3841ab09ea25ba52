use roster_model::{CreateUserData, UpdateUserData, User};

use super::validation::{FieldErrors, FormField, validate_user_fields};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(User),
}

/// What a valid form turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Create(CreateUserData),
    Update(UpdateUserData),
}

/// Editable user form.
///
/// Holds raw field values exactly as typed; trimming is left to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    mode: FormMode,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    errors: FieldErrors,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            username: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Form pre-populated from `user`.
    pub fn edit(user: User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            mode: FormMode::Edit(user),
            errors: FieldErrors::new(),
        }
    }

    /// The user being edited, if any.
    pub fn editing(&self) -> Option<&User> {
        match &self.mode {
            FormMode::Edit(user) => Some(user),
            FormMode::Create => None,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
        }
    }

    /// Set a field and clear its error so stale messages disappear as the
    /// user types.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Username => &mut self.username,
            FormField::Email => &mut self.email,
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
        };
        *slot = value.into();
        self.errors.remove(&field);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Re-run validation, store the result and report validity.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_user_fields(
            &self.username,
            &self.email,
            &self.first_name,
            &self.last_name,
        );
        self.errors.is_empty()
    }

    /// Validate and, if valid, build the payload for the current mode.
    pub fn submit(&mut self) -> Result<FormSubmission, FieldErrors> {
        if !self.validate() {
            return Err(self.errors.clone());
        }
        let data = CreateUserData {
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        };
        Ok(match self.mode {
            FormMode::Create => FormSubmission::Create(data),
            FormMode::Edit(_) => FormSubmission::Update(data.into()),
        })
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New user",
            FormMode::Edit(_) => "Edit user",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create",
            FormMode::Edit(_) => "Update",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::user_management::validation::{EMAIL_INVALID, USERNAME_REQUIRED};
    use roster_model::UserId;

    fn sample_user() -> User {
        User {
            id: UserId(1),
            username: "testuser".into(),
            email: "test@example.com".into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            created_at: "2023-01-01T00:00:00Z".into(),
            updated_at: "2023-01-01T00:00:00Z".into(),
        }
    }

    fn fill(form: &mut UserForm) {
        form.set(FormField::Username, "newuser");
        form.set(FormField::Email, "new@example.com");
        form.set(FormField::FirstName, "New");
        form.set(FormField::LastName, "User");
    }

    #[test]
    fn edit_form_is_populated_from_user() {
        let form = UserForm::edit(sample_user());
        assert_eq!(form.value(FormField::Username), "testuser");
        assert_eq!(form.value(FormField::Email), "test@example.com");
        assert_eq!(form.value(FormField::FirstName), "Test");
        assert_eq!(form.value(FormField::LastName), "User");
        assert_eq!(form.submit_label(), "Update");
    }

    #[test]
    fn empty_create_form_blocks_submission() {
        let mut form = UserForm::create();
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(form.error(FormField::Username), Some(USERNAME_REQUIRED));
    }

    #[test]
    fn typing_into_a_field_clears_only_its_error() {
        let mut form = UserForm::create();
        form.set(FormField::Email, "invalid-email");
        assert!(form.submit().is_err());
        assert_eq!(form.error(FormField::Email), Some(EMAIL_INVALID));

        form.set(FormField::Email, "still-bad");
        assert_eq!(form.error(FormField::Email), None);
        assert!(form.error(FormField::Username).is_some());
    }

    #[test]
    fn valid_create_form_yields_create_payload() {
        let mut form = UserForm::create();
        fill(&mut form);
        assert_eq!(
            form.submit(),
            Ok(FormSubmission::Create(CreateUserData {
                username: "newuser".into(),
                email: "new@example.com".into(),
                first_name: "New".into(),
                last_name: "User".into(),
            }))
        );
    }

    #[test]
    fn valid_edit_form_sends_every_field() {
        let mut form = UserForm::edit(sample_user());
        form.set(FormField::LastName, "Renamed");
        match form.submit() {
            Ok(FormSubmission::Update(update)) => {
                assert_eq!(update.username.as_deref(), Some("testuser"));
                assert_eq!(update.last_name.as_deref(), Some("Renamed"));
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }
}
