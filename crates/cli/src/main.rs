//! xrinputctl - XR input conformance CLI
//!
//! Loads a provider snapshot, runs a conformance pass over it and reports
//! every violation. Exits 0 on a pass, 1 when violations were found and 2
//! when the inputs could not be loaded.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::RunArgs;
use crate::error::exit;

#[derive(Parser)]
#[command(name = "xrinputctl")]
#[command(about = "XR input conformance checker - validate provider-reported devices")]
#[command(version)]
#[command(long_about = "
xrinputctl validates the devices an XR input provider reports against the
common feature vocabulary, implication rules, role requirements, haptic
capability invariants and subsystem enumeration consistency.

Use --json for machine-readable output suitable for CI.
")]
struct Cli {
    /// Output in JSON format for machine parsing
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a conformance pass over a provider snapshot
    Run(RunArgs),

    /// List the selectable checks
    Checks,

    /// Print the implication rules and role requirements
    Rules {
        /// Also print the common feature vocabulary
        #[arg(long)]
        vocabulary: bool,
    },

    /// Generate shell completion scripts
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("xrinputctl={log_level},xrinput_conformance={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli).await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(exit::VIOLATIONS),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            std::process::exit(exit::INPUT_ERROR);
        }
    }
}

/// `Ok(false)` means the command ran but the pass failed.
async fn execute_command(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Run(args) => commands::run::execute(args, cli.json).await,
        Commands::Checks => commands::checks::execute(cli.json).map(|()| true),
        Commands::Rules { vocabulary } => {
            commands::rules::execute(cli.json, *vocabulary).map(|()| true)
        }
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(true)
        }
    }
}
