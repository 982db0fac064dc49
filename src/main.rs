//! webboot - deployment bootstrap
//!
//! CLI entry point: parse flags, initialise logging, run the bootstrap.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use webboot::cli::{Cli, LogFormat};
use webboot::ui::{self, UiContext};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("webboot=warn"),
        1 => EnvFilter::new("webboot=info"),
        _ => EnvFilter::new("webboot=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.without_time().init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let ctx = UiContext::detect();

    match webboot::cli::execute(cli, &ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::step_error(&ctx, &e.to_string(), e.hint());
            ExitCode::from(e.exit_code())
        }
    }
}
