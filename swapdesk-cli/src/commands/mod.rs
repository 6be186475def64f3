//! CLI command implementations

pub mod contact;
pub mod kyc;
pub mod login;
pub mod logout;
pub mod logs;
pub mod nav;
pub mod quote;
pub mod signup;
pub mod status;
pub mod ticker;
pub mod transactions;

use std::path::PathBuf;

use anyhow::{Context, Result};
use swapdesk_core::services::{EntryPoint, LogEvent, LoggingService};
use swapdesk_core::SwapdeskContext;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let swapdesk_dir = get_swapdesk_dir();
    std::fs::create_dir_all(&swapdesk_dir).ok()?;
    LoggingService::new(&swapdesk_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the swapdesk directory from environment or default
pub fn get_swapdesk_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SWAPDESK_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".swapdesk")
    }
}

/// Get or create swapdesk context, resuming any persisted session
pub fn get_context() -> Result<SwapdeskContext> {
    let swapdesk_dir = get_swapdesk_dir();

    std::fs::create_dir_all(&swapdesk_dir)
        .with_context(|| format!("Failed to create swapdesk directory: {:?}", swapdesk_dir))?;

    let ctx = SwapdeskContext::new(&swapdesk_dir)
        .context("Failed to initialize swapdesk context")?;

    // Pick up the session from a previous invocation, if still valid
    ctx.session_service.find_existing_session()?;

    Ok(ctx)
}
