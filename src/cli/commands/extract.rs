//! Extract command implementation
//!
//! Runs discovery and the fetcher, then writes the raw extract. No transform.

use super::{exit_code_for_summary, print_summary, report_failure, resolve_run_date};
use crate::cli::Cli;
use crate::core::pipeline::Pipeline;
use crate::domain::RunDate;
use clap::Args;

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// First year to request (overrides api.start_year)
    #[arg(long)]
    pub start_year: Option<u16>,

    /// Date stamp for the raw extract, YYYYMMDD [default: today]
    #[arg(long, value_name = "YYYYMMDD")]
    pub run_date: Option<RunDate>,
}

impl ExtractArgs {
    /// Execute the extract command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        tracing::info!("Starting extract command");

        let mut config = match cli.load_config() {
            Ok(c) => c,
            Err(e) => return Ok(report_failure("configuration", &e)),
        };
        if let Some(start_year) = self.start_year {
            config.api.start_year = start_year;
        }

        let pipeline = match Pipeline::new(config, resolve_run_date(self.run_date)) {
            Ok(p) => p,
            Err(e) => return Ok(report_failure("setup", &e)),
        };

        let summary = match pipeline.extract().await {
            Ok(s) => s,
            Err(e) => return Ok(report_failure("extract", &e)),
        };

        summary.log_summary();
        print_summary(&summary);
        Ok(exit_code_for_summary(&summary))
    }
}
