//! Transactions command - show the dashboard activity ledger

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;
use swapdesk_core::services::ActivityStatus;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    if ctx.session_service.current_user().is_none() {
        anyhow::bail!("Please login first");
    }

    let rows = ctx.dashboard_service.recent_activity();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Recent Activity".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Type", "Asset", "Amount", "Price", "Status", "Date"]);
    for row in rows {
        let status = match row.status {
            ActivityStatus::Completed => "Completed".green().to_string(),
            ActivityStatus::Pending => "Pending".yellow().to_string(),
            ActivityStatus::Failed => "Failed".red().to_string(),
        };
        table.add_row(vec![
            format!("{:?}", row.kind),
            row.asset,
            row.amount,
            row.price,
            status,
            row.date.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
