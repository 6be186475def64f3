//! Kyc command - submit and list verification requests

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;
use swapdesk_core::services::LogEvent;
use swapdesk_core::{KycDocument, KycStatus};

use super::{get_context, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum KycCommands {
    /// Submit a new verification request
    Submit {
        /// Document type (passport, license, id-card)
        #[arg(long)]
        document_type: String,
        /// Path to the document front image
        #[arg(long)]
        front: PathBuf,
        /// Path to the document back image
        #[arg(long)]
        back: PathBuf,
        /// Path to the selfie image
        #[arg(long)]
        selfie: PathBuf,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// List submitted verification requests
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Content type from the file extension, the way a browser would fill in
/// the upload's MIME type.
fn content_type_for(path: &Path) -> String {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png".to_string(),
        Some("jpg") => "image/jpg".to_string(),
        Some("jpeg") => "image/jpeg".to_string(),
        Some("pdf") => "application/pdf".to_string(),
        _ => "application/octet-stream".to_string(),
    }
}

fn document_from(path: &Path) -> Result<KycDocument> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Cannot read document: {:?}", path))?;
    Ok(KycDocument {
        file_name: path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string(),
        content_type: content_type_for(path),
        size_bytes: metadata.len(),
    })
}

pub fn run(command: KycCommands) -> Result<()> {
    match command {
        KycCommands::Submit {
            document_type,
            front,
            back,
            selfie,
            yes,
        } => {
            let logger = get_logger();
            let ctx = get_context()?;

            let user = ctx
                .session_service
                .current_user()
                .ok_or_else(|| anyhow::anyhow!("Please login first"))?;

            let documents = vec![
                document_from(&front)?,
                document_from(&back)?,
                document_from(&selfie)?,
            ];

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Submit {} verification for {}?",
                        document_type, user.email
                    ))
                    .default(true)
                    .interact()?;
                if !confirmed {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            match ctx.kyc_service.submit(&user, &document_type, &documents) {
                Ok(submission) => {
                    log_event(&logger, LogEvent::new("kyc_submitted").with_command("kyc"));
                    output::success("KYC verification submitted!");
                    println!(
                        "Submission #{} is now {:?}.",
                        submission.number, submission.status
                    );
                    Ok(())
                }
                Err(e) => {
                    log_event(
                        &logger,
                        LogEvent::new("kyc_rejected")
                            .with_command("kyc")
                            .with_error(e.to_string()),
                    );
                    Err(e.into())
                }
            }
        }
        KycCommands::List { json } => {
            let ctx = get_context()?;
            let submissions = ctx.kyc_service.submissions()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&submissions)?);
                return Ok(());
            }

            if submissions.is_empty() {
                println!("No KYC submissions yet.");
                return Ok(());
            }

            println!("{}", "KYC Submissions".bold());
            println!();

            let mut table = output::create_table();
            table.set_header(vec!["#", "Name", "Email", "Document", "Status", "Date"]);
            for s in submissions {
                let status = match s.status {
                    KycStatus::Pending => "Pending".yellow().to_string(),
                    KycStatus::Approved => "Approved".green().to_string(),
                    KycStatus::Cancelled => "Cancelled".red().to_string(),
                };
                table.add_row(vec![
                    s.number.to_string(),
                    s.name,
                    s.email,
                    s.document_type,
                    status,
                    s.submission_date.to_string(),
                ]);
            }
            println!("{table}");
            Ok(())
        }
    }
}
