//! OrderLens - order insights from the terminal.
//!
//! Loads the order export once at startup, then answers free-text
//! questions one-shot (`ask`) or interactively (no subcommand).

use anyhow::Result;
use clap::Parser;
use orderlens::cli::{Cli, Commands};
use orderlens::{output, repl};
use orderlens_core::dataset::Dataset;
use orderlens_core::ui;
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // Default to warn so answers stay clean; RUST_LOG=info surfaces load detail.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_level(true)
        .without_time()
        .init();

    info!(target: "orderlens", "starting {}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let style = ui::detect_style();

    // One load per process; every query below borrows this dataset.
    let dataset = Dataset::load(&cli.data)?;

    match cli.command {
        Some(Commands::Ask { query, raw }) => {
            output::run_ask(&dataset, &query.join(" "), raw, &style)
        }
        Some(Commands::Summary { raw }) => output::run_summary(&dataset, raw, &style),
        None => repl::run(&dataset, &style),
    }
}
