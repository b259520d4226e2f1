//! mono-meta CLI
//!
//! Usage: mono-meta <COMMAND>
//!
//! Commands:
//!   services  Build every service of one reference and print the inventory
//!   diff      Compare the services of two references

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Services { common, branch } => {
            commands::services::cmd_services(&common, &branch, cli.events)
        }
        Commands::Diff {
            common,
            base,
            compare,
            changed_only,
        } => commands::diff::cmd_diff(&common, &base, &compare, changed_only, cli.events),
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,mono_meta={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
