//! View service - section switching, menus and auth-driven navigation
//!
//! Keeps the view state machine (active section x open menus) and
//! mediates login/signup/logout into the session service. What to draw
//! is delegated to `domain::nav::project_nav`, a pure function of the
//! session, so rendering adapters stay dumb.
//!
//! Navigation to the admin section is not role-checked: only the nav
//! affordance is gated. Anyone who knows the section name can switch to
//! it, exactly as the legacy frontend behaved.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::nav::{project_nav, NavProjection, Section};
use crate::domain::result::{Error, Result};
use crate::domain::UserRecord;
use crate::services::SessionService;

/// Mutable view state: one active section, two independently toggled
/// menus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub section: Section,
    pub mobile_menu_open: bool,
    pub user_menu_open: bool,
}

pub struct ViewService {
    session: Arc<SessionService>,
    view: Mutex<ViewState>,
}

impl ViewService {
    pub fn new(session: Arc<SessionService>) -> Self {
        Self {
            session,
            view: Mutex::new(ViewState::default()),
        }
    }

    fn view(&self) -> MutexGuard<'_, ViewState> {
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the current view state.
    pub fn view_state(&self) -> ViewState {
        self.view().clone()
    }

    pub fn active_section(&self) -> Section {
        self.view().section
    }

    /// Switch the active section. Closes any open mobile menu and user
    /// menu as a side effect; the rendering adapter is expected to reset
    /// the viewport to the top.
    pub fn show_section(&self, section: Section) {
        let mut view = self.view();
        view.section = section;
        view.mobile_menu_open = false;
        view.user_menu_open = false;
    }

    /// Toggle the mobile navigation; opening it closes the user menu.
    pub fn toggle_mobile_menu(&self) -> bool {
        let mut view = self.view();
        view.mobile_menu_open = !view.mobile_menu_open;
        if view.mobile_menu_open {
            view.user_menu_open = false;
        }
        view.mobile_menu_open
    }

    /// Toggle the user menu; only opens with an active session, and
    /// opening it closes the mobile menu.
    pub fn toggle_user_menu(&self) -> bool {
        if self.session.current_user().is_none() {
            return false;
        }
        let mut view = self.view();
        view.user_menu_open = !view.user_menu_open;
        if view.user_menu_open {
            view.mobile_menu_open = false;
        }
        view.user_menu_open
    }

    /// A user-menu entry was picked: close the menu, then navigate.
    pub fn handle_user_menu_click(&self, section: Section) {
        self.view().user_menu_open = false;
        self.show_section(section);
    }

    /// Recompute the visible navigation set from the session. Pure in
    /// the session state: same state, same projection.
    pub fn update_auth_ui(&self) -> NavProjection {
        project_nav(&self.session.state())
    }

    /// Form-boundary login: field presence checks here, credential
    /// matching in the session service. Admins land on the admin
    /// section, everyone else on the dashboard.
    pub async fn submit_login(&self, email: &str, password: &str) -> Result<UserRecord> {
        if email.is_empty() {
            return Err(Error::MissingField("email"));
        }
        if password.is_empty() {
            return Err(Error::MissingField("password"));
        }

        let user = self.session.login(email, password).await?;
        self.show_section(if user.is_admin() {
            Section::Admin
        } else {
            Section::Dashboard
        });
        Ok(user)
    }

    /// Form-boundary signup: presence and confirmation checks here,
    /// duplicate detection in the session service. Lands on the
    /// dashboard.
    pub async fn submit_signup(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<UserRecord> {
        if email.is_empty() {
            return Err(Error::MissingField("email"));
        }
        if password.is_empty() {
            return Err(Error::MissingField("password"));
        }
        if confirm_password.is_empty() {
            return Err(Error::MissingField("confirm password"));
        }
        if password != confirm_password {
            return Err(Error::PasswordMismatch);
        }

        let user = self.session.signup(email, password).await?;
        self.show_section(Section::Dashboard);
        Ok(user)
    }

    /// Log out and return to the home section.
    pub fn logout(&self) -> Result<()> {
        self.session.logout()?;
        self.show_section(Section::Home);
        Ok(())
    }
}
