//! Navigation model: the fixed section set and the pure projection from
//! session state to visible navigation affordances.
//!
//! The projection is deliberately free of any rendering concern so it can
//! be unit-tested without a UI; rendering adapters (CLI, desktop) decide
//! how "visible" translates to output.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::result::Error;
use crate::domain::session::SessionState;

/// The fixed set of page sections. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Exchange,
    Kyc,
    Faq,
    Contact,
    Dashboard,
    Admin,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Exchange,
        Section::Kyc,
        Section::Faq,
        Section::Contact,
        Section::Dashboard,
        Section::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Exchange => "exchange",
            Section::Kyc => "kyc",
            Section::Faq => "faq",
            Section::Contact => "contact",
            Section::Dashboard => "dashboard",
            Section::Admin => "admin",
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Home
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s.to_lowercase())
            .ok_or_else(|| Error::validation(format!("unknown section: {}", s)))
    }
}

/// Which navigation affordances are visible, as a pure function of the
/// session. Recomputing from the same state always yields the same set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavProjection {
    /// "Connect" (login) button, shown only when logged out
    pub show_connect: bool,
    /// Avatar affordance, shown only when logged in
    pub show_avatar: bool,
    pub show_dashboard_nav: bool,
    pub show_admin_nav: bool,
    pub show_logout_nav: bool,
    pub avatar: Option<char>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

/// Project the session state onto the visible navigation set.
pub fn project_nav(state: &SessionState) -> NavProjection {
    match state.current_user() {
        Some(user) => NavProjection {
            show_connect: false,
            show_avatar: true,
            show_dashboard_nav: true,
            show_admin_nav: user.is_admin(),
            show_logout_nav: true,
            avatar: Some(user.avatar),
            user_name: Some(user.name.clone()),
            user_email: Some(user.email.clone()),
        },
        None => NavProjection {
            show_connect: true,
            show_avatar: false,
            show_dashboard_nav: false,
            show_admin_nav: false,
            show_logout_nav: false,
            avatar: None,
            user_name: None,
            user_email: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserRecord};

    fn logged_in(role: Role) -> SessionState {
        let mut user = UserRecord::from_signup("who@x.com", "pw", 1, 10_000);
        user.role = role;
        let mut state = SessionState::default();
        state.set_user(user);
        state
    }

    #[test]
    fn test_logged_out_projection() {
        let nav = project_nav(&SessionState::default());
        assert!(nav.show_connect);
        assert!(!nav.show_avatar);
        assert!(!nav.show_dashboard_nav);
        assert!(!nav.show_admin_nav);
        assert!(!nav.show_logout_nav);
        assert!(nav.avatar.is_none());
    }

    #[test]
    fn test_user_projection_hides_admin_nav() {
        let nav = project_nav(&logged_in(Role::User));
        assert!(!nav.show_connect);
        assert!(nav.show_avatar);
        assert!(nav.show_dashboard_nav);
        assert!(!nav.show_admin_nav);
        assert!(nav.show_logout_nav);
    }

    #[test]
    fn test_admin_projection_shows_admin_nav() {
        let nav = project_nav(&logged_in(Role::Admin));
        assert!(nav.show_dashboard_nav);
        assert!(nav.show_admin_nav);
    }

    #[test]
    fn test_projection_is_pure() {
        let state = logged_in(Role::Admin);
        assert_eq!(project_nav(&state), project_nav(&state));
    }

    #[test]
    fn test_section_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
        assert!("payments".parse::<Section>().is_err());
    }
}
