//! Plain-text rendering of the user management state.

use std::fmt::Write;

use roster_model::User;

use crate::domains::user_management::{FormField, State, UserForm};

const RULE: &str = "------------------------------------------------------------------------";

/// Full screen: banner, detail pane, user table, pager and open form.
pub fn render(state: &State) -> String {
    let mut out = String::new();

    if let Some(notification) = &state.notification {
        let _ = writeln!(out, "{}", notification);
    }
    if let Some(user) = &state.selected {
        out.push_str(&render_detail(user));
    }

    out.push_str(&render_table(&state.users));
    let _ = writeln!(out, "{}", render_pager(state));

    if let Some(form) = &state.form {
        out.push_str(&render_form(form, state.submitting));
    }
    out
}

pub fn render_table(users: &[User]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<20} {:<30} {}",
        "ID", "USERNAME", "EMAIL", "NAME"
    );
    let _ = writeln!(out, "{}", RULE);
    if users.is_empty() {
        let _ = writeln!(out, "(no users)");
    }
    for user in users {
        let _ = writeln!(
            out,
            "{:>5}  {:<20} {:<30} {}",
            user.id,
            user.username,
            user.email,
            user.full_name()
        );
    }
    out
}

pub fn render_pager(state: &State) -> String {
    let mut line = match state.pagination_info() {
        Some(info) => format!(
            "Page {} of {} ({} users)",
            info.page,
            info.pages.max(1),
            info.total
        ),
        None => format!("Page {}", state.current_page),
    };
    if state.loading {
        line.push_str(" loading...");
    }
    line
}

pub fn render_detail(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "User #{}", user.id);
    let _ = writeln!(out, "  username:   {}", user.username);
    let _ = writeln!(out, "  email:      {}", user.email);
    let _ = writeln!(out, "  name:       {}", user.full_name());
    if !user.created_at.is_empty() {
        let _ = writeln!(out, "  created at: {}", user.created_at);
    }
    if !user.updated_at.is_empty() {
        let _ = writeln!(out, "  updated at: {}", user.updated_at);
    }
    out
}

pub fn render_form(form: &UserForm, submitting: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", form.title());
    for field in FormField::ALL {
        let _ = writeln!(out, "  {:<11} {}", format!("{}:", field.label()), form.value(field));
        if let Some(error) = form.error(field) {
            let _ = writeln!(out, "    ! {}", error);
        }
    }
    if submitting {
        let _ = writeln!(out, "  submitting...");
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use roster_model::UserId;
    use serde_json::json;

    use super::*;
    use crate::common::{Notification, NotificationKind};

    fn alice() -> User {
        User {
            id: UserId(1),
            username: "alice".into(),
            email: "alice@example.com".into(),
            first_name: "Alice".into(),
            last_name: "Liddell".into(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn renders_banner_rows_and_pager() {
        let mut state = State::new(50, Duration::from_secs(5));
        state.users = vec![alice()];
        state.pagination = Some(json!({ "page": 1, "per_page": 50, "total": 1, "pages": 1,
                                        "has_next": false, "has_prev": false }));
        state.notification = Some(Notification {
            id: 1,
            kind: NotificationKind::Error,
            message: "DB down".into(),
        });

        let screen = render(&state);

        assert!(screen.starts_with("[error] DB down\n"));
        assert!(screen.contains("alice@example.com"));
        assert!(screen.contains("Alice Liddell"));
        assert!(screen.contains("Page 1 of 1 (1 users)"));
    }

    #[test]
    fn empty_list_and_unknown_pagination() {
        let mut state = State::new(50, Duration::from_secs(5));
        state.current_page = 3;
        state.loading = true;
        let screen = render(&state);
        assert!(screen.contains("(no users)"));
        assert!(screen.contains("Page 3 loading..."));
    }

    #[test]
    fn form_shows_field_errors() {
        let mut form = UserForm::create();
        form.set(FormField::Email, "nope");
        form.validate();
        let text = render_form(&form, false);
        assert!(text.contains("== New user =="));
        assert!(text.contains("! Email is not valid"));
        assert!(text.contains("! Username is required"));
    }
}
