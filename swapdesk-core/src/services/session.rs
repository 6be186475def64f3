//! Session service - login, signup and expiry over the persisted store
//!
//! The persisted `currentUser` record is the durable source of truth; the
//! in-memory state mirrors it for the lifetime of the process. Credentials
//! are matched in plaintext against a seeded table plus the registered
//! list - simulated auth, not a security boundary.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::domain::result::{Error, Result};
use crate::domain::{Role, SessionNotice, SessionState, UserRecord};
use crate::ports::{StateStore, StoreKey};

/// The fixed demo credential table. Expiry is stamped at login time.
fn seeded_users(expires_at: i64) -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            email: "user@example.com".to_string(),
            password: "password".to_string(),
            name: "John Doe".to_string(),
            role: Role::User,
            avatar: 'J',
            expires_at,
        },
        UserRecord {
            id: 2,
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
            avatar: 'A',
            expires_at,
        },
    ]
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// State shared with the expiry timer task.
struct SessionShared {
    store: Arc<dyn StateStore>,
    state: Mutex<SessionState>,
    notices: broadcast::Sender<SessionNotice>,
}

impl SessionShared {
    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Force-logout the session the timer was armed for, if it is still
    /// the active one. Store errors are swallowed: expiry runs on a
    /// background task with no caller to report to, and the in-memory
    /// logout already happened.
    fn expire(&self, armed_user_id: i64) {
        let mut state = self.state();
        let still_active = state
            .current_user()
            .map(|u| u.id == armed_user_id)
            .unwrap_or(false);
        if !still_active {
            return;
        }
        state.clear();
        drop(state);

        let _ = self.store.remove(StoreKey::CurrentUser);
        let _ = self.notices.send(SessionNotice::Expired);
    }
}

/// Session service over the persisted store.
///
/// One live expiry timer at most: arming a new one aborts the old, and
/// logout aborts it outright, so an expiry can never fire twice.
pub struct SessionService {
    shared: Arc<SessionShared>,
    session_duration_ms: i64,
    expiry_task: Mutex<Option<JoinHandle<()>>>,
}

impl SessionService {
    pub fn new(store: Arc<dyn StateStore>, session_duration_ms: i64) -> Self {
        let (notices, _) = broadcast::channel(16);
        Self {
            shared: Arc::new(SessionShared {
                store,
                state: Mutex::new(SessionState::default()),
                notices,
            }),
            session_duration_ms,
            expiry_task: Mutex::new(None),
        }
    }

    /// Subscribe to out-of-band session notices (expiry).
    pub fn subscribe(&self) -> broadcast::Receiver<SessionNotice> {
        self.shared.notices.subscribe()
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.shared.state().clone()
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.shared.state().current_user().cloned()
    }

    pub fn is_admin(&self) -> bool {
        self.shared.state().is_admin()
    }

    /// Resume a persisted session if one exists and has not expired.
    ///
    /// A malformed or stale record is deleted and treated as absent;
    /// neither case is an error. Arms the expiry timer for the remaining
    /// lifetime, so this must run inside a tokio runtime.
    pub fn find_existing_session(&self) -> Result<Option<UserRecord>> {
        let raw = match self.shared.store.read(StoreKey::CurrentUser)? {
            Some(value) => value,
            None => return Ok(None),
        };

        let user: UserRecord = match serde_json::from_value(raw) {
            Ok(user) => user,
            Err(_) => {
                self.shared.store.remove(StoreKey::CurrentUser)?;
                return Ok(None);
            }
        };

        if user.is_expired(now_ms()) {
            self.shared.store.remove(StoreKey::CurrentUser)?;
            return Ok(None);
        }

        self.shared.state().set_user(user.clone());
        self.arm_expiry(&user);
        Ok(Some(user))
    }

    /// Log in with exact email+password match against the seeded table
    /// and the registered-users list. Persists the session and arms the
    /// expiry timer on success; persists nothing on mismatch.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord> {
        let expires_at = now_ms() + self.session_duration_ms;

        let mut candidates = seeded_users(expires_at);
        candidates.extend(self.registered_users()?.into_iter().map(|mut user| {
            user.expires_at = expires_at;
            user
        }));

        let user = candidates
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(Error::InvalidCredentials)?;

        self.persist_session(&user)?;
        Ok(user)
    }

    /// Register a new account. The email must not already be in the
    /// registered list; the new record always has role `user` and
    /// becomes the current session.
    pub async fn signup(&self, email: &str, password: &str) -> Result<UserRecord> {
        let mut users = self.registered_users()?;
        if users.iter().any(|u| u.email == email) {
            return Err(Error::DuplicateEmail);
        }

        let now = now_ms();
        let user = UserRecord::from_signup(email, password, now, now + self.session_duration_ms);

        users.push(user.clone());
        self.shared
            .store
            .write(StoreKey::Users, serde_json::to_value(&users)?)?;

        self.persist_session(&user)?;
        Ok(user)
    }

    /// Clear the current session and cancel the pending expiry timer.
    pub fn logout(&self) -> Result<()> {
        self.abort_expiry();
        self.shared.state().clear();
        self.shared.store.remove(StoreKey::CurrentUser)?;
        Ok(())
    }

    /// Force-logout if the active session is past its expiry. The armed
    /// timer normally covers this; the method exists for callers that
    /// want an explicit check (e.g. long-lived UIs resuming from sleep).
    pub fn expire_if_needed(&self) {
        let expired_user_id = {
            let state = self.shared.state();
            state
                .current_user()
                .filter(|u| u.is_expired(now_ms()))
                .map(|u| u.id)
        };
        if let Some(id) = expired_user_id {
            self.abort_expiry();
            self.shared.expire(id);
        }
    }

    /// The full registered-users list. Absent or malformed data reads as
    /// an empty list.
    pub fn registered_users(&self) -> Result<Vec<UserRecord>> {
        let users = match self.shared.store.read(StoreKey::Users)? {
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(users)
    }

    fn persist_session(&self, user: &UserRecord) -> Result<()> {
        self.shared
            .store
            .write(StoreKey::CurrentUser, serde_json::to_value(user)?)?;
        self.shared.state().set_user(user.clone());
        self.arm_expiry(user);
        Ok(())
    }

    /// Arm the expiry timer for the remaining session lifetime, aborting
    /// any previously armed timer so only one is ever live.
    fn arm_expiry(&self, user: &UserRecord) {
        let delay_ms = (user.expires_at - now_ms()).max(0) as u64;
        let shared = Arc::clone(&self.shared);
        let armed_user_id = user.id;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            shared.expire(armed_user_id);
        });

        let mut slot = self
            .expiry_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    fn abort_expiry(&self) {
        let mut slot = self
            .expiry_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(task) = slot.take() {
            task.abort();
        }
    }
}

impl Drop for SessionService {
    fn drop(&mut self) {
        self.abort_expiry();
    }
}
