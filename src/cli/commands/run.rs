//! Run command implementation
//!
//! Full pipeline: discovery, fetch, raw store, transform and clean store.
//! This is also what `pindica` does with no subcommand.

use super::{exit_code_for_summary, print_summary, report_failure, resolve_run_date};
use crate::cli::Cli;
use crate::core::pipeline::Pipeline;
use crate::domain::RunDate;
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// First year to request (overrides api.start_year)
    #[arg(long)]
    pub start_year: Option<u16>,

    /// Date stamp for the output files, YYYYMMDD [default: today]
    #[arg(long, value_name = "YYYYMMDD")]
    pub run_date: Option<RunDate>,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

        let mut config = match cli.load_config() {
            Ok(c) => c,
            Err(e) => return Ok(report_failure("configuration", &e)),
        };

        if let Some(start_year) = self.start_year {
            tracing::info!(start_year, "Overriding start year from CLI");
            config.api.start_year = start_year;
        }

        let pipeline = match Pipeline::new(config, resolve_run_date(self.run_date)) {
            Ok(p) => p,
            Err(e) => return Ok(report_failure("setup", &e)),
        };

        println!("🚀 Starting run...");
        let summary = match pipeline.run().await {
            Ok(s) => s,
            Err(e) => return Ok(report_failure("run", &e)),
        };

        summary.log_summary();
        print_summary(&summary);
        Ok(exit_code_for_summary(&summary))
    }
}
