// Pindica - INE statistical indicator ETL tool
// Copyright (c) 2025 Pindica Contributors
// Licensed under the MIT License

use clap::Parser;
use pindica::cli::commands::run::RunArgs;
use pindica::cli::commands::EXIT_FATAL;
use pindica::cli::{Cli, Commands};
use pindica::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging comes up before the command reports configuration errors, so a
    // broken config falls back to console-only defaults here.
    let config = cli.load_config().ok();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = config.map(|c| c.logging).unwrap_or_default();

    let logging_guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Pindica - INE statistical indicator ETL tool"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    // process::exit skips destructors
    drop(logging_guard);
    process::exit(exit_code);
}

/// Execute the CLI command; no subcommand means a full run
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        None => RunArgs::default().execute(cli).await,
        Some(Commands::Run(args)) => args.execute(cli).await,
        Some(Commands::Extract(args)) => args.execute(cli).await,
        Some(Commands::Transform(args)) => args.execute(cli).await,
        Some(Commands::Status(args)) => args.execute(cli).await,
        Some(Commands::ValidateConfig(args)) => args.execute(cli).await,
        Some(Commands::Init(args)) => args.execute().await,
    }
}
