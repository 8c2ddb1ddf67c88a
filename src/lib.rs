// Pindica - INE statistical indicator ETL tool
// Copyright (c) 2025 Pindica Contributors
// Licensed under the MIT License

//! # Pindica - INE statistical indicator ETL
//!
//! Pindica downloads a statistical indicator from the Statistics Portugal (INE)
//! `pindica.jsp` JSON API, keeps the raw response on disk and turns it into a
//! flat CSV table. The default indicator is `0008074`, crimes registered per
//! 1000 residents.
//!
//! ## Overview
//!
//! - **Discover** the available year range with a single probe request
//! - **Fetch** every year sequentially; failed years are skipped and reported
//! - **Store** the merged response as `extract/extract-YYYYMMDD.json`
//! - **Transform** the newest extract: flatten, add constants, drop and rename
//!   columns
//! - **Store** the table as `data/data-YYYYMMDD.csv`
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pipeline stages and orchestration
//! - [`adapters`] - INE API client
//! - [`domain`] - Errors, year parameters, raw payload, run date
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pindica::config::PindicaConfig;
//! use pindica::core::pipeline::Pipeline;
//! use pindica::domain::RunDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::new(PindicaConfig::default(), RunDate::today())?;
//!     let summary = pipeline.run().await?;
//!
//!     println!("Wrote {} rows", summary.rows_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], backed by
//! [`domain::PindicaError`]. Per-year fetch errors never surface as errors;
//! they are collected in the run summary instead.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
