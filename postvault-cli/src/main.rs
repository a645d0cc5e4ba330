// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! postvault - archive a user's X (Twitter) post history to local JSON.
//!
//! # Examples
//!
//! ```bash
//! # Archive everything @somebody has posted
//! postvault somebody
//!
//! # Stop after 500 posts
//! postvault somebody --limit 500
//!
//! # Write the archive into a specific directory
//! postvault somebody --out ~/archives
//! ```
//!
//! The bearer token is read from the `TWITTER_BEARER_TOKEN` environment
//! variable (a `.env` file in the working directory is honored). Re-running
//! against an existing archive only appends posts not already present.

mod run;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the API bearer token.
const TOKEN_ENV_VAR: &str = "TWITTER_BEARER_TOKEN";

// ============================================================================
// CLI Definition
// ============================================================================

/// Archive a user's X (Twitter) post history to a local JSON document.
#[derive(Parser)]
#[command(name = "postvault")]
#[command(about = "Archive a user's X post history to local JSON")]
#[command(version)]
pub struct Cli {
    /// Handle to archive (a leading '@' is accepted and stripped).
    pub handle: String,

    /// Stop after this many posts.
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Posts requested per API call (1-100).
    #[arg(long, default_value_t = 100)]
    pub page_size: usize,

    /// Directory the archive file is written to.
    #[arg(long, short, default_value = ".")]
    pub out: PathBuf,

    /// Override the API base URL.
    #[arg(long, hide = true)]
    pub base_url: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short)]
    pub quiet: bool,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Missing credential.
    MissingCredential = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("postvault=debug,info")
    } else {
        EnvFilter::new("postvault=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up TWITTER_BEARER_TOKEN from a .env file if one exists.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let Ok(token) = std::env::var(TOKEN_ENV_VAR) else {
        eprintln!("Error: {TOKEN_ENV_VAR} is not set.");
        eprintln!("Export it or put {TOKEN_ENV_VAR}=<bearer token> in a .env file.");
        std::process::exit(ExitCode::MissingCredential as i32);
    };

    if let Err(e) = run::run(&cli, token).await {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
