//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so a single
//! test exercises initialisation.

use pindica::config::LoggingConfig;
use pindica::logging::init_logging;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_writes_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("debug", &config).expect("logging should initialize");
    assert!(guard.has_file_output());
    assert!(log_path.is_dir());

    tracing::info!(target: "pindica", year = 2011, "Data for year extracted");
    drop(guard);

    let contents = fs::read_to_string(log_path.join("pindica.log")).unwrap();
    let line = contents
        .lines()
        .find(|l| l.contains("Data for year extracted"))
        .expect("log line written");
    let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(parsed["fields"]["year"], 2011);

    // A second global subscriber is refused
    assert!(init_logging("info", &LoggingConfig::default()).is_err());
}

#[test]
fn test_init_logging_rejects_bad_level() {
    assert!(init_logging("verbose", &LoggingConfig::default()).is_err());
}
