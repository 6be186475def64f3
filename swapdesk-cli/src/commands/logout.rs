//! Logout command - end the current session

use anyhow::Result;
use swapdesk_core::services::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run() -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    if ctx.session_service.current_user().is_none() {
        output::info("No active session.");
        return Ok(());
    }

    ctx.view_service.logout()?;
    log_event(&logger, LogEvent::new("logout").with_command("logout"));
    output::success("Logged out.");
    Ok(())
}
