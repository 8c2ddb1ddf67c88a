//! Raw fetcher
//!
//! Requests every year in the plan, one after the other, and merges the
//! per-year observation arrays into a single [`RawPayload`]. A failing year is
//! logged and skipped; the run continues with whatever succeeded.

use crate::adapters::ine::models::year_records;
use crate::adapters::ine::IndicatorSource;
use crate::domain::{ApiError, RawPayload, YearParameter};

/// A year the fetcher had to skip
#[derive(Debug, Clone)]
pub struct SkippedYear {
    /// Parameter that was requested
    pub param: YearParameter,

    /// HTTP status, when the server answered
    pub status: Option<u16>,

    /// Error message
    pub message: String,
}

/// What the fetch stage did, year by year
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// Year keys merged into the payload, in request order
    pub fetched: Vec<String>,

    /// Years that failed
    pub skipped: Vec<SkippedYear>,
}

impl FetchReport {
    /// True when every requested year was merged
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Payload plus report
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub payload: RawPayload,
    pub report: FetchReport,
}

async fn fetch_one(
    source: &dyn IndicatorSource,
    param: &YearParameter,
) -> Result<serde_json::Value, ApiError> {
    let body = source.fetch_year(param).await?;
    year_records(&body, &param.year_key())
}

/// Fetches every parameter sequentially and merges the results
///
/// Never fails as a whole: with zero successful years the payload is empty.
pub async fn fetch_raw_data(
    source: &dyn IndicatorSource,
    params: &[YearParameter],
) -> FetchOutcome {
    let mut outcome = FetchOutcome::default();

    for param in params {
        let year = param.year_key();
        tracing::info!(year = %year, "Accessing the API to get the data for year");

        match fetch_one(source, param).await {
            Ok(records) => {
                let count = records.as_array().map_or(0, Vec::len);
                outcome.payload.merge_year(year.clone(), records);
                tracing::info!(year = %year, records = count, "Data for year extracted");
                outcome.report.fetched.push(year);
            }
            Err(e) => {
                tracing::warn!(year = %year, error = %e, "Skipping year");
                outcome.report.skipped.push(SkippedYear {
                    param: param.clone(),
                    status: e.status(),
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        fetched = outcome.report.fetched.len(),
        skipped = outcome.report.skipped.len(),
        records = outcome.payload.record_count(),
        "Raw fetch finished"
    );

    outcome
}
