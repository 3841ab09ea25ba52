//! Field-level validation for the user form.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Deliberately loose: something, `@`, something, `.`, something.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex should compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Username,
    Email,
    FirstName,
    LastName,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Username,
        FormField::Email,
        FormField::FirstName,
        FormField::LastName,
    ];

    /// Wire/field name.
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Username => "username",
            FormField::Email => "email",
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Username => "Username",
            FormField::Email => "Email",
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is not valid";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";

/// Field name to error message, for every failing field.
pub type FieldErrors = BTreeMap<FormField, String>;

/// Validate the four user fields. An empty map means the input is valid.
pub fn validate_user_fields(
    username: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if username.trim().is_empty() {
        errors.insert(FormField::Username, USERNAME_REQUIRED.to_string());
    }

    if email.trim().is_empty() {
        errors.insert(FormField::Email, EMAIL_REQUIRED.to_string());
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.insert(FormField::Email, EMAIL_INVALID.to_string());
    }

    if first_name.trim().is_empty() {
        errors.insert(FormField::FirstName, FIRST_NAME_REQUIRED.to_string());
    }

    if last_name.trim().is_empty() {
        errors.insert(FormField::LastName, LAST_NAME_REQUIRED.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> [&'static str; 4] {
        ["jdoe", "jdoe@example.com", "John", "Doe"]
    }

    #[test]
    fn complete_input_is_valid() {
        let [u, e, f, l] = valid();
        assert!(validate_user_fields(u, e, f, l).is_empty());
    }

    #[test]
    fn each_blank_field_reports_its_own_required_error() {
        let expected = [
            (FormField::Username, USERNAME_REQUIRED),
            (FormField::Email, EMAIL_REQUIRED),
            (FormField::FirstName, FIRST_NAME_REQUIRED),
            (FormField::LastName, LAST_NAME_REQUIRED),
        ];
        for (index, (field, message)) in expected.into_iter().enumerate() {
            for blank in ["", "   ", "\t\n"] {
                let mut fields = valid();
                fields[index] = blank;
                let errors = validate_user_fields(fields[0], fields[1], fields[2], fields[3]);
                assert_eq!(errors.len(), 1, "field {field} with {blank:?}");
                assert_eq!(errors.get(&field).map(String::as_str), Some(message));
            }
        }
    }

    #[test]
    fn email_format_is_checked_loosely() {
        let errors = validate_user_fields("u", "invalid-email", "f", "l");
        assert_eq!(
            errors.get(&FormField::Email).map(String::as_str),
            Some(EMAIL_INVALID)
        );

        for ok in ["a@b.co", "first.last@sub.domain.org", "x@y.z"] {
            assert!(
                validate_user_fields("u", ok, "f", "l").is_empty(),
                "{ok} should pass"
            );
        }
        for bad in ["a@b", "@b.co", "a b@c", "a@.co"] {
            assert!(
                validate_user_fields("u", bad, "f", "l").contains_key(&FormField::Email),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn all_failures_are_reported_together() {
        let errors = validate_user_fields("", "nope", " ", "");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&FormField::Email], EMAIL_INVALID);
    }
}
