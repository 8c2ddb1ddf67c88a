//! Run summary and reporting

use crate::core::extract::{FetchReport, SkippedYear};
use crate::domain::RunDate;
use std::path::PathBuf;
use std::time::Duration;

/// What a run (or a single stage) did
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Stamp used for the files written by this run
    pub run_date: RunDate,

    /// Number of year parameters discovered
    pub years_requested: usize,

    /// Year keys merged into the raw payload
    pub years_fetched: Vec<String>,

    /// Years the fetcher skipped, with their error
    pub skipped: Vec<SkippedYear>,

    /// Total records across all fetched years
    pub records_fetched: usize,

    /// Raw extract written by the extract stage
    pub raw_file: Option<PathBuf>,

    /// Raw extract the transform stage selected
    pub source_file: Option<PathBuf>,

    /// Data rows in the clean CSV
    pub rows_written: usize,

    /// Clean CSV written by the transform stage
    pub data_file: Option<PathBuf>,

    /// Wall time of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create an empty summary for `run_date`
    pub fn new(run_date: RunDate) -> Self {
        Self {
            run_date,
            years_requested: 0,
            years_fetched: Vec::new(),
            skipped: Vec::new(),
            records_fetched: 0,
            raw_file: None,
            source_file: None,
            rows_written: 0,
            data_file: None,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Copy the fetch stage results in
    pub fn record_fetch(&mut self, report: &FetchReport, records: usize) {
        self.years_fetched = report.fetched.clone();
        self.skipped = report.skipped.clone();
        self.records_fetched = records;
    }

    /// True when no year was skipped
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_date = %self.run_date,
            years_requested = self.years_requested,
            years_fetched = self.years_fetched.len(),
            years_skipped = self.skipped.len(),
            records = self.records_fetched,
            rows_written = self.rows_written,
            raw_file = ?self.raw_file,
            data_file = ?self.data_file,
            duration_ms = self.duration.as_millis() as u64,
            "Run completed"
        );

        if !self.is_complete() {
            tracing::warn!(
                skipped = self.skipped.len(),
                "Run completed with skipped years"
            );
            for skipped in &self.skipped {
                tracing::warn!(
                    year = skipped.param.year(),
                    status = ?skipped.status,
                    message = %skipped.message,
                    "Skipped year"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::YearParameter;

    #[test]
    fn test_record_fetch() {
        let mut summary = RunSummary::new(RunDate::today());
        assert!(summary.is_complete());

        let report = FetchReport {
            fetched: vec!["2011".to_string()],
            skipped: vec![SkippedYear {
                param: YearParameter::new("S7A", 2012).unwrap(),
                status: Some(503),
                message: "unavailable".to_string(),
            }],
        };
        summary.record_fetch(&report, 7);

        assert_eq!(summary.years_fetched, vec!["2011"]);
        assert_eq!(summary.records_fetched, 7);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_with_duration() {
        let summary = RunSummary::new(RunDate::today()).with_duration(Duration::from_millis(1500));
        assert_eq!(summary.duration.as_millis(), 1500);
    }
}
