//! Session expiry timer tests
//!
//! Run under tokio's paused clock so a 24-hour session can expire in
//! microseconds. The timer path trusts the armed deadline, so advancing
//! the test clock is enough to trigger it.

use std::sync::Arc;
use std::time::Duration;

use swapdesk_core::adapters::memory::MemoryStore;
use swapdesk_core::services::SessionService;
use swapdesk_core::{SessionNotice, StateStore, StoreKey};

const SHORT_SESSION_MS: i64 = 60_000;

#[tokio::test(start_paused = true)]
async fn test_session_expires_and_notifies() {
    let store = Arc::new(MemoryStore::new());
    let svc = SessionService::new(store.clone(), SHORT_SESSION_MS);
    let mut notices = svc.subscribe();

    svc.login("user@example.com", "password").await.unwrap();
    assert!(svc.current_user().is_some());

    tokio::time::sleep(Duration::from_millis(SHORT_SESSION_MS as u64 + 10)).await;

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice, SessionNotice::Expired);
    assert!(svc.current_user().is_none());
    assert!(store.read(StoreKey::CurrentUser).unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_relogin_rearms_a_single_timer() {
    let store = Arc::new(MemoryStore::new());
    let svc = SessionService::new(store, SHORT_SESSION_MS);
    let mut notices = svc.subscribe();

    svc.login("user@example.com", "password").await.unwrap();
    tokio::time::sleep(Duration::from_millis(SHORT_SESSION_MS as u64 / 2)).await;

    // Logging in again replaces the armed timer
    svc.login("user@example.com", "password").await.unwrap();
    tokio::time::sleep(Duration::from_millis(SHORT_SESSION_MS as u64 * 2)).await;

    // Exactly one expiry, from the second timer
    assert_eq!(notices.try_recv().unwrap(), SessionNotice::Expired);
    assert!(notices.try_recv().is_err());
    assert!(svc.current_user().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_logout_cancels_the_timer() {
    let store = Arc::new(MemoryStore::new());
    let svc = SessionService::new(store, SHORT_SESSION_MS);
    let mut notices = svc.subscribe();

    svc.login("user@example.com", "password").await.unwrap();
    svc.logout().unwrap();

    tokio::time::sleep(Duration::from_millis(SHORT_SESSION_MS as u64 * 2)).await;

    // No expiry notice: the timer died with the session
    assert!(notices.try_recv().is_err());
}
