use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A user record as returned by the backend.
///
/// Timestamps are kept as the strings the server sent; the client only
/// displays them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /api/users`. All four fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `PUT /api/users/:id`. Absent fields are left untouched by the
/// backend and are omitted from the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl UpdateUserData {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }

    /// Apply the present fields onto `user`.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(first_name) = &self.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            user.last_name = last_name.clone();
        }
    }
}

impl From<CreateUserData> for UpdateUserData {
    fn from(data: CreateUserData) -> Self {
        Self {
            username: Some(data.username),
            email: Some(data.email),
            first_name: Some(data.first_name),
            last_name: Some(data.last_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_omits_absent_fields() {
        let update = UpdateUserData {
            email: Some("new@example.com".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "new@example.com" }));
    }

    #[test]
    fn user_tolerates_missing_timestamps() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 3,
            "username": "ana",
            "email": "ana@example.com",
            "first_name": "Ana",
            "last_name": "Diaz"
        }))
        .unwrap();
        assert_eq!(user.id, UserId(3));
        assert!(user.created_at.is_empty());
        assert_eq!(user.full_name(), "Ana Diaz");
    }

    #[test]
    fn apply_to_only_touches_present_fields() {
        let mut user = User {
            id: UserId(1),
            username: "old".into(),
            email: "old@example.com".into(),
            first_name: "Old".into(),
            last_name: "Name".into(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        UpdateUserData {
            username: Some("new".into()),
            ..Default::default()
        }
        .apply_to(&mut user);
        assert_eq!(user.username, "new");
        assert_eq!(user.email, "old@example.com");
    }
}
