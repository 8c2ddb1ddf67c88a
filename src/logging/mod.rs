//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - human-readable console output
//! - optional JSON log files with daily or hourly rotation
//! - `RUST_LOG` overrides the configured level
//!
//! # Example
//!
//! ```no_run
//! use pindica::config::LoggingConfig;
//! use pindica::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a fatal stage failure with the stage name
///
/// # Example
///
/// ```no_run
/// use pindica::log_stage_failure;
/// use pindica::domain::PindicaError;
///
/// let error = PindicaError::Schema("column 'valor' missing".to_string());
/// log_stage_failure!("transform", &error);
/// ```
#[macro_export]
macro_rules! log_stage_failure {
    ($stage:expr, $error:expr) => {
        tracing::error!(
            stage = $stage,
            error = %$error,
            "Stage failed"
        );
    };
}
