//! Structured logging setup using tracing
//!
//! Console output is always on. A JSON file layer with rotation is added when
//! `logging.local_enabled` is set.
//!
//! # Example
//!
//! ```no_run
//! use pindica::config::LoggingConfig;
//! use pindica::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//! ```

use crate::config::LoggingConfig;
use crate::domain::{PindicaError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log file name prefix inside `logging.local_path`
pub const LOG_FILE_PREFIX: &str = "pindica.log";

/// Guard that must be kept alive for the duration of the program
/// to ensure logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }

    /// True when a file layer is installed
    pub fn has_file_output(&self) -> bool {
        self._file_guard.is_some()
    }
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `log_level_str` when set.
///
/// # Errors
///
/// Returns a configuration error for an unknown level, an unusable log
/// directory, or when a global subscriber is already installed.
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pindica={log_level}")));

    let mut layers = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter.clone());
    layers.push(console_layer.boxed());

    let file_guard = if config.local_enabled {
        let rotation = parse_rotation(&config.local_rotation)?;

        std::fs::create_dir_all(&config.local_path).map_err(|e| {
            PindicaError::Configuration(format!(
                "Failed to create log directory {}: {e}",
                config.local_path
            ))
        })?;

        let file_appender = RollingFileAppender::new(rotation, &config.local_path, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_filter(env_filter);

        layers.push(file_layer.boxed());
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| PindicaError::Configuration(format!("Failed to install logger: {e}")))?;

    tracing::debug!(
        level = %log_level,
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(PindicaError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}

fn parse_rotation(rotation: &str) -> Result<Rotation> {
    match rotation {
        "daily" => Ok(Rotation::DAILY),
        "hourly" => Ok(Rotation::HOURLY),
        "never" => Ok(Rotation::NEVER),
        other => Err(PindicaError::Configuration(format!(
            "Invalid log rotation: {other}"
        ))),
    }
}
