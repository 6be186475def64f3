//! Status command - show session and navigation state

use anyhow::Result;
use chrono::{TimeZone, Utc};
use colored::Colorize;
use serde_json::json;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    ctx.session_service.expire_if_needed();

    let user = ctx.session_service.current_user();
    let nav = ctx.view_service.update_auth_ui();
    let section = ctx.view_service.active_section();

    if json {
        // Never echo the stored password back out
        let payload = json!({
            "loggedIn": user.is_some(),
            "user": user.as_ref().map(|u| json!({
                "id": u.id,
                "email": u.email,
                "name": u.name,
                "role": u.role,
                "expiresAt": u.expires_at,
            })),
            "section": section.as_str(),
            "nav": nav,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", "Session Status".bold());
    println!();

    match user {
        Some(user) => {
            let expires = Utc
                .timestamp_millis_opt(user.expires_at)
                .single()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| user.expires_at.to_string());

            let mut table = output::create_table();
            table.add_row(vec!["Name", &user.name]);
            table.add_row(vec!["Email", &user.email]);
            table.add_row(vec!["Role", &user.role.to_string()]);
            table.add_row(vec!["Session expires", &expires]);
            table.add_row(vec!["Active section", section.as_str()]);
            println!("{table}");

            if nav.show_admin_nav {
                println!();
                output::info("Admin navigation is available.");
            }
        }
        None => {
            println!("Not logged in.");
            println!("Use 'swd login <email>' or 'swd signup <email>' to start.");
        }
    }

    Ok(())
}
