//! Pipeline coordinator - runs the stages in order
//!
//! discovery → fetch → raw store → select → transform → clean store

use super::summary::RunSummary;
use crate::adapters::ine::{IndicatorSource, IneClient};
use crate::config::PindicaConfig;
use crate::core::extract::{discover_year_range, fetch_raw_data};
use crate::core::store::{clean, raw};
use crate::core::transform::{transform_latest, FieldMapping};
use crate::domain::{Result, RunDate};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Runs the ETL stages with one configuration and one run date
pub struct Pipeline {
    config: PindicaConfig,
    source: Arc<dyn IndicatorSource>,
    run_date: RunDate,
}

impl Pipeline {
    /// Create a pipeline talking to the configured INE endpoint
    pub fn new(config: PindicaConfig, run_date: RunDate) -> Result<Self> {
        let client = IneClient::new(&config.api)?;
        tracing::debug!(base_url = %client.base_url(), "INE client ready");
        Ok(Self::with_source(config, Arc::new(client), run_date))
    }

    /// Create a pipeline over any indicator source
    pub fn with_source(
        config: PindicaConfig,
        source: Arc<dyn IndicatorSource>,
        run_date: RunDate,
    ) -> Self {
        Self {
            config,
            source,
            run_date,
        }
    }

    pub fn config(&self) -> &PindicaConfig {
        &self.config
    }

    pub fn run_date(&self) -> RunDate {
        self.run_date
    }

    /// Stages 1-3: discover, fetch and store the raw extract
    pub async fn extract(&self) -> Result<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary::new(self.run_date);
        self.extract_into(&mut summary).await?;
        Ok(summary.with_duration(start.elapsed()))
    }

    /// Stage 4 and the clean store, on whatever extract is newest
    pub fn transform(&self) -> Result<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary::new(self.run_date);
        self.transform_into(&mut summary)?;
        Ok(summary.with_duration(start.elapsed()))
    }

    /// Full run: extract, then transform
    pub async fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary::new(self.run_date);

        tracing::info!(run_date = %self.run_date, "Starting pipeline run");
        self.extract_into(&mut summary).await?;
        self.transform_into(&mut summary)?;

        Ok(summary.with_duration(start.elapsed()))
    }

    async fn extract_into(&self, summary: &mut RunSummary) -> Result<()> {
        let api = &self.config.api;

        let params =
            discover_year_range(self.source.as_ref(), &api.year_prefix, api.start_year).await?;
        summary.years_requested = params.len();

        let outcome = fetch_raw_data(self.source.as_ref(), &params).await;
        summary.record_fetch(&outcome.report, outcome.payload.record_count());
        if outcome.payload.is_empty() {
            tracing::warn!("No year could be fetched; storing an empty extract");
        }

        let extract_dir = Path::new(&self.config.storage.extract_dir);
        summary.raw_file = Some(raw::save(extract_dir, self.run_date, &outcome.payload)?);
        Ok(())
    }

    fn transform_into(&self, summary: &mut RunSummary) -> Result<()> {
        let storage = &self.config.storage;
        let mapping =
            FieldMapping::from_config(&self.config.transform, &self.config.api.indicator_code);

        let (source_file, table) = transform_latest(
            Path::new(&storage.extract_dir),
            storage.selection,
            &mapping,
        )?;
        summary.source_file = Some(source_file);

        let data_file = clean::save(
            Path::new(&storage.data_dir),
            self.run_date,
            &table,
            storage.delimiter_byte(),
        )?;
        summary.rows_written = table.len();
        summary.data_file = Some(data_file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, PindicaError, YearParameter};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    /// Reports 2012 as the last year and serves one record per year
    struct FakeIne {
        fail_year: Option<u16>,
    }

    #[async_trait]
    impl IndicatorSource for FakeIne {
        async fn fetch_year(&self, param: &YearParameter) -> std::result::Result<Value, ApiError> {
            if Some(param.year()) == self.fail_year {
                return Err(ApiError::HttpStatus {
                    status: 502,
                    url: param.to_string(),
                });
            }
            let key = param.year_key();
            Ok(json!([{
                "UltimoPref": "2012",
                "Dados": { key: [{
                    "geocod": "PT", "geodsg": "Portugal", "dim_3": "1",
                    "dim_3_t": "Theft", "valor": "5.2",
                    "sinal_conv": "", "sinal_conv_desc": ""
                }]}
            }]))
        }

        fn describe(&self) -> String {
            "fake".to_string()
        }
    }

    fn pipeline(dir: &TempDir, fail_year: Option<u16>) -> Pipeline {
        let mut config = PindicaConfig::default();
        config.storage.extract_dir = dir.path().join("extract").display().to_string();
        config.storage.data_dir = dir.path().join("data").display().to_string();

        let run_date = RunDate::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        Pipeline::with_source(config, Arc::new(FakeIne { fail_year }), run_date)
    }

    #[tokio::test]
    async fn test_run_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let summary = pipeline(&dir, None).run().await.unwrap();

        assert_eq!(summary.years_requested, 2);
        assert_eq!(summary.years_fetched, vec!["2011", "2012"]);
        assert_eq!(summary.rows_written, 2);
        assert!(summary.is_complete());
        assert_eq!(
            summary.raw_file.unwrap(),
            dir.path().join("extract").join("extract-20240501.json")
        );
        assert_eq!(
            summary.data_file.unwrap(),
            dir.path().join("data").join("data-20240501.csv")
        );
    }

    #[tokio::test]
    async fn test_run_with_skipped_year() {
        let dir = TempDir::new().unwrap();
        let summary = pipeline(&dir, Some(2012)).run().await.unwrap();

        assert_eq!(summary.rows_written, 1);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].status, Some(502));
    }

    #[tokio::test]
    async fn test_run_probe_failure_is_discovery_error() {
        let dir = TempDir::new().unwrap();
        let err = pipeline(&dir, Some(2011)).run().await.unwrap_err();

        assert!(matches!(err, PindicaError::Discovery(_)));
        assert!(!dir.path().join("extract").exists());
    }

    #[test]
    fn test_transform_without_extract() {
        let dir = TempDir::new().unwrap();
        let err = pipeline(&dir, None).transform().unwrap_err();
        assert!(matches!(err, PindicaError::Filesystem(_)));
    }
}
