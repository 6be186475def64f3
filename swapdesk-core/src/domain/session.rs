//! Session state model

use serde::Serialize;

use crate::domain::user::UserRecord;

/// In-memory view of the current session.
///
/// `is_admin` is always derived from the current user's role, never
/// stored on its own, so the two can't drift apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    current_user: Option<UserRecord>,
}

impl SessionState {
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user
            .as_ref()
            .map(UserRecord::is_admin)
            .unwrap_or(false)
    }

    pub fn set_user(&mut self, user: UserRecord) {
        self.current_user = Some(user);
    }

    pub fn clear(&mut self) {
        self.current_user = None;
    }
}

/// Out-of-band session transitions broadcast to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionNotice {
    /// The session lifetime elapsed and the user was forcibly logged out.
    Expired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserRecord};

    fn admin() -> UserRecord {
        let mut user = UserRecord::from_signup("admin@example.com", "admin123", 2, 10_000);
        user.role = Role::Admin;
        user
    }

    #[test]
    fn test_is_admin_derived_from_role() {
        let mut state = SessionState::default();
        assert!(!state.is_admin());

        state.set_user(admin());
        assert!(state.is_admin());

        state.set_user(UserRecord::from_signup("u@x.com", "pw", 1, 10_000));
        assert!(!state.is_admin());
    }

    #[test]
    fn test_clear_logs_out() {
        let mut state = SessionState::default();
        state.set_user(admin());
        state.clear();
        assert!(!state.is_logged_in());
        assert!(!state.is_admin());
    }
}
