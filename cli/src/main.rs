mod commands;
mod config;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::shell::{INTERRUPTED, Shell};
use mealplan_core::service::Planner;

#[derive(Parser)]
#[command(
    name = "mealplan",
    version,
    about = "An interactive weekly meal scheduler",
    long_about = "Plan meals for upcoming days, review them in date order and export \
                  a shopping-style ingredient count to CSV.\n\n\
                  Commands inside the shell: add, view, export, quit. \
                  Meals live in memory for the duration of the session."
)]
struct Cli {
    /// File the `export` command writes the ingredient report to
    #[arg(short, long, value_name = "PATH", default_value = "ingredients.csv")]
    output: PathBuf,
    /// Log debug output to stderr (`RUST_LOG` takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.output, cli.verbose)?;
    init_tracing(&config);

    let export_path = config.export_path;
    let session = tokio::task::spawn_blocking(move || {
        let mut shell = Shell::new(io::stdin().lock(), io::stdout(), Planner::new(), export_path);
        shell.run()
    });

    tokio::select! {
        joined = session => joined.context("Shell session panicked")?,
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for interrupt signal")?;
            println!("\n{INTERRUPTED}");
            // The session thread is parked on a stdin read that will never return.
            process::exit(0);
        }
    }
}

fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .init();
}
