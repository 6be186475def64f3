//! Contact command - show and edit support channels

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum ContactCommands {
    /// Show the support channels and deep links
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update one channel (whatsapp, telegram, phone, email)
    Set {
        /// Field name
        field: String,
        /// New value
        value: String,
    },
}

pub fn run(command: ContactCommands) -> Result<()> {
    let ctx = get_context()?;

    match command {
        ContactCommands::Show { json } => {
            let data = ctx.contact_service.contact_data()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
                return Ok(());
            }

            println!("{}", "Contact Channels".bold());
            println!();

            let mut table = output::create_table();
            table.add_row(vec!["WhatsApp", &data.whatsapp]);
            table.add_row(vec!["Telegram", &data.telegram]);
            table.add_row(vec!["Phone", &data.phone]);
            table.add_row(vec!["Email", &data.email]);
            println!("{table}");

            println!();
            println!("WhatsApp: {}", ctx.contact_service.whatsapp_url()?.cyan());
            println!("Telegram: {}", ctx.contact_service.telegram_url()?.cyan());
        }
        ContactCommands::Set { field, value } => {
            ctx.contact_service.update_field(&field, &value)?;
            output::success(&format!("Updated {field}."));
        }
    }
    Ok(())
}
