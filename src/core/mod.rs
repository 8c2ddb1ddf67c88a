//! Core business logic for Pindica.
//!
//! # Modules
//!
//! - [`extract`] - Range discovery and sequential per-year fetching
//! - [`store`] - Dated raw (JSON) and clean (CSV) file stores
//! - [`transform`] - Flattening and the column pipeline
//! - [`pipeline`] - Stage orchestration and run summary
//!
//! # Workflow
//!
//! 1. **Discover**: probe the first year and read the last available year
//! 2. **Fetch**: request each year in turn, skipping failures
//! 3. **Store raw**: write `extract/extract-YYYYMMDD.json`
//! 4. **Select**: pick the newest raw extract
//! 5. **Transform**: flatten, add constants, drop and rename columns
//! 6. **Store clean**: write `data/data-YYYYMMDD.csv`
//!
//! # Example
//!
//! ```rust,no_run
//! use pindica::config::load_config_or_default;
//! use pindica::core::pipeline::Pipeline;
//! use pindica::domain::RunDate;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("pindica.toml")?;
//! let pipeline = Pipeline::new(config, RunDate::today())?;
//!
//! let summary = pipeline.run().await?;
//! println!("Rows written: {}", summary.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod extract;
pub mod pipeline;
pub mod store;
pub mod transform;
