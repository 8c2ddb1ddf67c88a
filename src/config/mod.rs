//! Configuration management for Pindica.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Pindica uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PINDICA_<SECTION>_<KEY>` environment overrides
//! - Defaults for every setting, so the file is optional
//! - Validation before any stage runs
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ApiConfig`] - Indicator API endpoint, indicator code and year range floor
//! - [`StorageConfig`] - Extract and data directories, raw file selection
//! - [`TransformConfig`] - Declarative column pipeline (constants, drops, renames)
//! - [`LoggingConfig`] - Optional rotating JSON log files
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "https://www.ine.pt/ine/json_indicador/pindica.jsp"
//! indicator_code = "0008074"
//! start_year = 2011
//!
//! [storage]
//! extract_dir = "extract"
//! data_dir = "data"
//! selection = "modified_time"
//!
//! [[transform.rename_columns]]
//! from = "geocod"
//! to = "Geo Code"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApiConfig, ApplicationConfig, ColumnRename, ConstantColumn, LoggingConfig, PindicaConfig,
    SelectionStrategy, StorageConfig, TransformConfig,
};
