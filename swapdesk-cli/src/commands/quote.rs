//! Quote command - price an exchange pair

use anyhow::Result;
use colored::Colorize;
use rust_decimal::Decimal;

use super::get_context;
use crate::output;

pub fn run(from: &str, to: &str, amount: Decimal, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let quote = ctx.exchange_service.quote(from, to, amount)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("{}", "Exchange Quote".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["You send", &format!("{} {}", quote.send_amount, quote.from)]);
    table.add_row(vec!["Rate", &format!("1 {} = {} {}", quote.from, quote.rate, quote.to)]);
    table.add_row(vec!["You receive", &format!("{} {}", quote.receive_amount, quote.to)]);
    println!("{table}");

    println!();
    println!(
        "Rate valid for {}",
        output::format_countdown(quote.countdown_secs).yellow()
    );
    Ok(())
}
