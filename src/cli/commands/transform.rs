//! Transform command implementation
//!
//! Picks the newest raw extract, transforms it and writes the clean CSV.
//! Makes no network calls.

use super::{print_summary, report_failure, resolve_run_date, EXIT_SUCCESS};
use crate::cli::Cli;
use crate::config::SelectionStrategy;
use crate::core::pipeline::Pipeline;
use crate::domain::RunDate;
use clap::Args;

/// Arguments for the transform command
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Select the extract by the date in its file name instead of its
    /// modification time
    #[arg(long)]
    pub by_filename_date: bool,

    /// Date stamp for the data file, YYYYMMDD [default: today]
    #[arg(long, value_name = "YYYYMMDD")]
    pub run_date: Option<RunDate>,
}

impl TransformArgs {
    /// Execute the transform command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        tracing::info!("Starting transform command");

        let mut config = match cli.load_config() {
            Ok(c) => c,
            Err(e) => return Ok(report_failure("configuration", &e)),
        };
        if self.by_filename_date {
            config.storage.selection = SelectionStrategy::FilenameDate;
        }

        let pipeline = match Pipeline::new(config, resolve_run_date(self.run_date)) {
            Ok(p) => p,
            Err(e) => return Ok(report_failure("setup", &e)),
        };

        let summary = match pipeline.transform() {
            Ok(s) => s,
            Err(e) => return Ok(report_failure("transform", &e)),
        };

        summary.log_summary();
        print_summary(&summary);
        Ok(EXIT_SUCCESS)
    }
}
