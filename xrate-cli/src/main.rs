//! # Xrate
//!
//! Command-line currency converter:
//! - Parse and validate the arguments
//! - Load configuration from the config file and environment
//! - Resolve a converter (plugin or built-in) and convert once
//! - Print the result, or report the failure and exit non-zero

mod cli;
mod config;
mod plugins;
mod printer;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xrate_hex::Xrate;

use crate::cli::{Cli, available_currencies};
use crate::printer::ResultPrinter;

const COMMAND_NAME: &str = "xrate";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Invalid arguments exit here with clap's usage error (status 2).
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries results.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list {
        writeln!(std::io::stdout(), "{}", available_currencies())?;
        return Ok(());
    }

    let config = config::load(cli.config.as_deref())?;
    let xrate = Xrate::new(config, plugins::registry());

    let result = interruptible(
        async {
            xrate
                .convert(cli.from, cli.to, cli.amount)
                .await
                .map_err(anyhow::Error::from)
        },
        tokio::signal::ctrl_c(),
    )
    .await?;

    ResultPrinter::new(std::io::stdout().lock()).print(&result)
}

/// Runs `work` unless `interrupt` fires first.
///
/// An `interrupt` that resolves to an error (the signal handler could not be
/// installed) never cancels the work.
async fn interruptible<T>(
    work: impl Future<Output = anyhow::Result<T>>,
    interrupt: impl Future<Output = std::io::Result<()>>,
) -> anyhow::Result<T> {
    tokio::select! {
        result = work => result,
        Ok(()) = interrupt => anyhow::bail!("Conversion interrupted"),
    }
}

/// `xrate: {message}`, followed by the cause's message on its own line.
fn error_message(err: &anyhow::Error) -> String {
    match err.source() {
        Some(cause) => format!("{}: {}\n{}", COMMAND_NAME, err, cause),
        None => format!("{}: {}", COMMAND_NAME, err),
    }
}
