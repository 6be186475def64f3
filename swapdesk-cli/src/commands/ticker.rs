//! Ticker command - print fabricated activity notices

use anyhow::Result;
use colored::Colorize;
use swapdesk_core::services::TickerKind;

use super::get_context;

pub fn run(count: usize) -> Result<()> {
    let ctx = get_context()?;

    for _ in 0..count {
        let notice = ctx.notifier_service.generate();
        let title = match notice.kind {
            TickerKind::Deposit => notice.title.green(),
            TickerKind::Withdrawal => notice.title.red(),
            TickerKind::Exchange => notice.title.blue(),
        };
        println!("{} {}", title.bold(), notice.message);
    }
    Ok(())
}
