//! Signup command - register a new account

use anyhow::Result;
use dialoguer::Password;
use swapdesk_core::services::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub async fn run(email: &str, password: Option<String>, confirm: Option<String>) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };
    let confirm = match confirm {
        Some(c) => c,
        None => Password::new().with_prompt("Confirm password").interact()?,
    };

    let pb = output::spinner("Creating account...");
    let result = ctx.view_service.submit_signup(email, &password, &confirm).await;
    pb.finish_and_clear();

    match result {
        Ok(user) => {
            log_event(&logger, LogEvent::new("signup_succeeded").with_command("signup"));
            output::success("Account created successfully!");
            println!("Welcome, {}. You are now logged in.", user.name);
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("signup_failed")
                    .with_command("signup")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
