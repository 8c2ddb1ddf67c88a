//! CLI command implementations
//!
//! Every command returns the process exit code:
//!
//! | code | meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | success                                   |
//! | 1    | run completed but some years were skipped |
//! | 2    | configuration error                       |
//! | 3    | range discovery failed                    |
//! | 4    | transform (schema) error                  |
//! | 5    | any other fatal error                     |

pub mod extract;
pub mod init;
pub mod run;
pub mod status;
pub mod transform;
pub mod validate;

use crate::core::pipeline::RunSummary;
use crate::domain::{PindicaError, RunDate};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SKIPPED_YEARS: i32 = 1;
pub const EXIT_CONFIGURATION: i32 = 2;
pub const EXIT_DISCOVERY: i32 = 3;
pub const EXIT_SCHEMA: i32 = 4;
pub const EXIT_FATAL: i32 = 5;

/// Maps a fatal error to its exit code
pub fn exit_code_for(error: &PindicaError) -> i32 {
    match error {
        PindicaError::Configuration(_) => EXIT_CONFIGURATION,
        PindicaError::Discovery(_) => EXIT_DISCOVERY,
        PindicaError::Schema(_) => EXIT_SCHEMA,
        _ => EXIT_FATAL,
    }
}

/// Exit code for a finished run
pub fn exit_code_for_summary(summary: &RunSummary) -> i32 {
    if summary.is_complete() {
        EXIT_SUCCESS
    } else {
        EXIT_SKIPPED_YEARS
    }
}

/// Logs and prints a fatal error, returning its exit code
pub(crate) fn report_failure(stage: &str, error: &PindicaError) -> i32 {
    crate::log_stage_failure!(stage, error);
    eprintln!("❌ {stage} failed: {error}");
    exit_code_for(error)
}

/// Run date from `--run-date`, or today
pub(crate) fn resolve_run_date(run_date: Option<RunDate>) -> RunDate {
    run_date.unwrap_or_else(RunDate::today)
}

/// Prints the run summary to stdout
pub(crate) fn print_summary(summary: &RunSummary) {
    println!();
    println!("📊 Run Summary:");
    println!("  Run date: {}", summary.run_date);
    if summary.years_requested > 0 {
        println!("  Years requested: {}", summary.years_requested);
        println!("  Years fetched: {}", summary.years_fetched.len());
        println!("  Records fetched: {}", summary.records_fetched);
    }
    if let Some(path) = &summary.raw_file {
        println!("  Raw extract: {}", path.display());
    }
    if let Some(path) = &summary.source_file {
        println!("  Transformed: {}", path.display());
    }
    if let Some(path) = &summary.data_file {
        println!("  Rows written: {}", summary.rows_written);
        println!("  Data file: {}", path.display());
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());

    if !summary.skipped.is_empty() {
        println!();
        println!("  ⚠️  Skipped years:");
        for skipped in &summary.skipped {
            println!("    - {}: {}", skipped.param.year(), skipped.message);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::SkippedYear;
    use crate::domain::{ApiError, DiscoveryError, YearParameter};
    use test_case::test_case;

    #[test_case(PindicaError::Configuration("bad".into()), 2 ; "configuration")]
    #[test_case(PindicaError::Discovery(DiscoveryError::Request(ApiError::HttpStatus { status: 500, url: "u".into() })), 3 ; "discovery")]
    #[test_case(PindicaError::Schema("missing".into()), 4 ; "schema")]
    #[test_case(PindicaError::Filesystem("disk".into()), 5 ; "filesystem")]
    #[test_case(PindicaError::Serialization("json".into()), 5 ; "serialization")]
    fn test_exit_code_for(error: PindicaError, expected: i32) {
        assert_eq!(exit_code_for(&error), expected);
    }

    #[test]
    fn test_exit_code_for_summary() {
        let mut summary = RunSummary::new(RunDate::today());
        assert_eq!(exit_code_for_summary(&summary), EXIT_SUCCESS);

        summary.skipped.push(SkippedYear {
            param: YearParameter::new("S7A", 2015).unwrap(),
            status: None,
            message: "timeout".to_string(),
        });
        assert_eq!(exit_code_for_summary(&summary), EXIT_SKIPPED_YEARS);
    }
}
