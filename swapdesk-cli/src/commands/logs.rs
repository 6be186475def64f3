//! Logs command - view and manage application logs

use anyhow::Result;
use chrono::{TimeZone, Utc};
use colored::Colorize;

use super::get_swapdesk_dir;
use crate::output;
use swapdesk_core::services::{EntryPoint, LoggingService};

fn get_logging_service() -> Result<LoggingService> {
    let swapdesk_dir = get_swapdesk_dir();
    std::fs::create_dir_all(&swapdesk_dir)?;
    Ok(LoggingService::new(
        &swapdesk_dir,
        EntryPoint::Cli,
        env!("CARGO_PKG_VERSION"),
    )?)
}

fn format_timestamp(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

pub fn run(limit: usize, errors: bool, json: bool) -> Result<()> {
    let service = get_logging_service()?;
    let entries = if errors {
        service.get_errors(limit)?
    } else {
        service.get_recent(limit)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No log entries found.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Entry", "Event", "Context", "Error"]);

    for entry in entries {
        let context = [entry.command.as_deref(), entry.section.as_deref()]
            .iter()
            .filter_map(|&s| s)
            .collect::<Vec<_>>()
            .join(", ");

        let error_indicator = if entry.error_message.is_some() {
            "!".red().to_string()
        } else {
            String::new()
        };

        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.entry_point,
            entry.event,
            context,
            error_indicator,
        ]);
    }

    println!("{table}");
    Ok(())
}
