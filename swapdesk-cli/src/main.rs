//! Swapdesk CLI - the mock exchange desk in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;
mod output;

use commands::{contact, kyc, login, logout, logs, nav, quote, signup, status, ticker, transactions};

/// Swapdesk - mock exchange desk in your terminal
#[derive(Parser)]
#[command(name = "swd", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and start a session
    Login {
        /// Account email
        email: String,
        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Register a new account
    Signup {
        /// Account email
        email: String,
        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
        /// Password confirmation (prompted if omitted)
        #[arg(long)]
        confirm: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show session and navigation state
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Switch the active section
    Nav {
        /// Section name (home, exchange, kyc, faq, contact, dashboard, admin)
        section: String,
    },

    /// Price an exchange pair
    Quote {
        /// Currency to send (BTC, ETH, USD, EUR)
        from: String,
        /// Currency to receive
        to: String,
        /// Amount to send
        amount: Decimal,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the dashboard activity ledger
    Transactions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit and list KYC verification requests
    Kyc {
        #[command(subcommand)]
        command: kyc::KycCommands,
    },

    /// Show and edit support channels
    Contact {
        #[command(subcommand)]
        command: contact::ContactCommands,
    },

    /// Print fabricated activity notices
    Ticker {
        /// Number of notices to print
        #[arg(long, default_value = "5")]
        count: usize,
    },

    /// Show application logs
    Logs {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Show only errors
        #[arg(long)]
        errors: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { email, password } => login::run(&email, password).await,
        Commands::Signup { email, password, confirm } => {
            signup::run(&email, password, confirm).await
        }
        Commands::Logout => logout::run(),
        Commands::Status { json } => status::run(json),
        Commands::Nav { section } => nav::run(&section),
        Commands::Quote { from, to, amount, json } => quote::run(&from, &to, amount, json),
        Commands::Transactions { json } => transactions::run(json),
        Commands::Kyc { command } => kyc::run(command),
        Commands::Contact { command } => contact::run(command),
        Commands::Ticker { count } => ticker::run(count),
        Commands::Logs { limit, errors, json } => logs::run(limit, errors, json),
    }
}
