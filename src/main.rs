mod cli;
mod core;
mod execution;
mod steps;

use anyhow::{Context, Result};
use cli::commands::SelfTestCommand;
use cli::output::*;
use cli::self_test::run_self_test;
use cli::{Cli, Command};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::SelfTest(cmd) => self_test(cmd).await?,
    }

    Ok(())
}

async fn self_test(cmd: &SelfTestCommand) -> Result<()> {
    let report = run_self_test().await;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for check in &report.checks {
            println!("{}", format_check(check));
        }
        println!("\n{}", format_summary(&report));
    }

    if !report.passed() {
        error!("self-test failed: {} check(s) did not pass", report.failures());
        std::process::exit(1);
    }

    Ok(())
}
