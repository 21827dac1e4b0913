//! Runs the built-in normalizer checks and exits non-zero on any failure.
//!
//! # Usage
//!
//! ```bash
//! cargo run --features cli --bin unitnorm-check -- --atol 1e-8
//! RUST_LOG=debug cargo run --features cli --bin unitnorm-check -- --filter zero
//! ```

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use unitnorm::harness::{builtin_checks, run_checks, select_checks, DEFAULT_ATOL};

#[derive(Parser, Debug)]
#[command(name = "unitnorm-check")]
#[command(about = "Run the unitnorm self-checks", version)]
struct Args {
    /// Absolute tolerance for comparisons
    #[arg(long, default_value_t = DEFAULT_ATOL)]
    atol: f64,

    /// Only run checks whose name contains this substring
    #[arg(short = 'f', long)]
    filter: Option<String>,

    /// List check names and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let checks = select_checks(builtin_checks(), args.filter.as_deref());

    if args.list {
        for check in &checks {
            println!("{}", check.name);
        }
        return Ok(());
    }

    info!(count = checks.len(), atol = args.atol, "running unitnorm checks");

    let stdout = io::stdout();
    let report = run_checks(&checks, args.atol, &mut stdout.lock())
        .context("failed to write check report")?;

    std::process::exit(report.exit_code());
}
