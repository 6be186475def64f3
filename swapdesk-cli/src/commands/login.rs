//! Login command - start a session

use anyhow::Result;
use dialoguer::Password;
use swapdesk_core::services::LogEvent;
use swapdesk_core::Section;

use super::{get_context, get_logger, log_event};
use crate::output;

pub async fn run(email: &str, password: Option<String>) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let pb = output::spinner("Logging in...");
    let result = ctx.view_service.submit_login(email, &password).await;
    pb.finish_and_clear();

    match result {
        Ok(user) => {
            log_event(
                &logger,
                LogEvent::new("login_succeeded")
                    .with_command("login")
                    .with_section(ctx.view_service.active_section().as_str()),
            );
            output::success("Login successful!");
            println!("Welcome back, {}.", user.name);
            if ctx.view_service.active_section() == Section::Admin {
                println!("You have admin access. Try 'swd kyc list'.");
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("login_failed")
                    .with_command("login")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
