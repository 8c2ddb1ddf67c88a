//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{PindicaConfig, SelectionStrategy};
use crate::domain::errors::PindicaError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PindicaConfig
/// 4. Applies environment variable overrides (PINDICA_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use pindica::config::loader::load_config;
///
/// let config = load_config("pindica.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PindicaConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PindicaError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PindicaError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_config(&contents)?;
    finish(config)
}

/// Loads configuration from `path`, or built-in defaults when the file is absent
///
/// Environment overrides and validation apply in both cases, so the tool can
/// run with no configuration file at all.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PindicaConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::info!(
        path = %path.display(),
        "Configuration file not found, using built-in defaults"
    );
    finish(PindicaConfig::default())
}

/// Parses TOML text after `${VAR}` substitution
pub fn parse_config(contents: &str) -> Result<PindicaConfig> {
    let contents = substitute_env_vars(contents)?;
    toml::from_str(&contents)
        .map_err(|e| PindicaError::Configuration(format!("Failed to parse TOML: {}", e)))
}

fn finish(mut config: PindicaConfig) -> Result<PindicaConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PindicaError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PindicaError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Leave comment lines alone
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PindicaError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using PINDICA_* prefix
///
/// Environment variables follow the pattern: PINDICA_<SECTION>_<KEY>
/// For example: PINDICA_API_BASE_URL, PINDICA_STORAGE_DATA_DIR
fn apply_env_overrides(config: &mut PindicaConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("PINDICA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // API overrides
    if let Ok(val) = std::env::var("PINDICA_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("PINDICA_API_INDICATOR_CODE") {
        config.api.indicator_code = val;
    }
    if let Ok(val) = std::env::var("PINDICA_API_LANG") {
        config.api.lang = val;
    }
    if let Ok(val) = std::env::var("PINDICA_API_START_YEAR") {
        config.api.start_year = val.parse().map_err(|_| {
            PindicaError::Configuration(format!("PINDICA_API_START_YEAR is not a year: {val}"))
        })?;
    }
    if let Ok(val) = std::env::var("PINDICA_API_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.api.timeout_seconds = timeout;
        }
    }

    // Storage overrides
    if let Ok(val) = std::env::var("PINDICA_STORAGE_EXTRACT_DIR") {
        config.storage.extract_dir = val;
    }
    if let Ok(val) = std::env::var("PINDICA_STORAGE_DATA_DIR") {
        config.storage.data_dir = val;
    }
    if let Ok(val) = std::env::var("PINDICA_STORAGE_SELECTION") {
        config.storage.selection = match val.to_lowercase().as_str() {
            "modified_time" => SelectionStrategy::ModifiedTime,
            "filename_date" => SelectionStrategy::FilenameDate,
            _ => {
                return Err(PindicaError::Configuration(format!(
                    "Invalid PINDICA_STORAGE_SELECTION '{val}'. Must be modified_time or filename_date"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("PINDICA_STORAGE_CSV_DELIMITER") {
        config.storage.csv_delimiter = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PINDICA_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PINDICA_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
