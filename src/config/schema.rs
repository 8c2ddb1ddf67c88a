//! Configuration schema types
//!
//! This module defines the configuration structure for Pindica. Every section
//! has defaults, so an empty file (or no file at all) describes the standard
//! crime rate export.

use serde::{Deserialize, Serialize};

/// Placeholder in constant column values replaced by `api.indicator_code`
pub const INDICATOR_CODE_PLACEHOLDER: &str = "{indicator_code}";

/// Main Pindica configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PindicaConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Statistics API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Output locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Column pipeline applied by the transform stage
    #[serde(default)]
    pub transform: TransformConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PindicaConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.api.validate()?;
        self.storage.validate()?;
        self.transform.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Statistics API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint of the indicator service (without query string)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Statistical series to pull (`varcd`)
    #[serde(default = "default_indicator_code")]
    pub indicator_code: String,

    /// Response language (`lang`)
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Operation selector (`op`)
    #[serde(default = "default_op")]
    pub op: String,

    /// Query argument carrying the year parameter
    #[serde(default = "default_dimension_param")]
    pub dimension_param: String,

    /// Prefix placed before the four digit year
    #[serde(default = "default_year_prefix")]
    pub year_prefix: String,

    /// First year requested
    #[serde(default = "default_start_year")]
    pub start_year: u16,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("api.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("api.base_url must start with http:// or https://".to_string());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| format!("api.base_url is not a valid URL: {e}"))?;

        if self.indicator_code.trim().is_empty() {
            return Err("api.indicator_code cannot be empty".to_string());
        }

        if self.dimension_param.trim().is_empty() {
            return Err("api.dimension_param cannot be empty".to_string());
        }

        if !(1000..=9999).contains(&self.start_year) {
            return Err(format!(
                "api.start_year must be a four digit year, got {}",
                self.start_year
            ));
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 600 {
            return Err(format!(
                "api.timeout_seconds must be between 1 and 600, got {}",
                self.timeout_seconds
            ));
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            indicator_code: default_indicator_code(),
            lang: default_lang(),
            op: default_op(),
            dimension_param: default_dimension_param(),
            year_prefix: default_year_prefix(),
            start_year: default_start_year(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// How the transform stage picks the raw extract to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Most recent filesystem modification time
    #[default]
    ModifiedTime,
    /// Latest date in the `extract-YYYYMMDD.json` name, modification time breaks ties
    FilenameDate,
}

/// Output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `extract-YYYYMMDD.json` files
    #[serde(default = "default_extract_dir")]
    pub extract_dir: String,

    /// Directory holding `data-YYYYMMDD.csv` files
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Raw file selection strategy
    #[serde(default)]
    pub selection: SelectionStrategy,

    /// Single-byte CSV delimiter
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: String,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.extract_dir.trim().is_empty() {
            return Err("storage.extract_dir cannot be empty".to_string());
        }

        if self.data_dir.trim().is_empty() {
            return Err("storage.data_dir cannot be empty".to_string());
        }

        if self.csv_delimiter.len() != 1 || !self.csv_delimiter.is_ascii() {
            return Err(format!(
                "storage.csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            ));
        }

        Ok(())
    }

    /// The delimiter as the byte the CSV writer expects
    pub fn delimiter_byte(&self) -> u8 {
        self.csv_delimiter.as_bytes().first().copied().unwrap_or(b',')
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            extract_dir: default_extract_dir(),
            data_dir: default_data_dir(),
            selection: SelectionStrategy::default(),
            csv_delimiter: default_csv_delimiter(),
        }
    }
}

/// Source field → output column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    pub from: String,
    pub to: String,
}

impl ColumnRename {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Column holding the same value on every row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantColumn {
    pub name: String,
    /// `{indicator_code}` is replaced by `api.indicator_code`
    pub value: String,
}

impl ConstantColumn {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Column pipeline applied after flattening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Column holding the source year key
    #[serde(default = "default_year_column")]
    pub year_column: String,

    /// Constant columns, appended in order
    #[serde(default = "default_constant_columns")]
    pub constant_columns: Vec<ConstantColumn>,

    /// Columns removed unconditionally; all must be present
    #[serde(default = "default_drop_columns")]
    pub drop_columns: Vec<String>,

    /// Columns renamed in place; all sources must be present
    #[serde(default = "default_rename_columns")]
    pub rename_columns: Vec<ColumnRename>,
}

impl TransformConfig {
    fn validate(&self) -> Result<(), String> {
        if self.year_column.trim().is_empty() {
            return Err("transform.year_column cannot be empty".to_string());
        }

        for constant in &self.constant_columns {
            if constant.name.trim().is_empty() {
                return Err("transform.constant_columns entries need a name".to_string());
            }
        }

        for rename in &self.rename_columns {
            if rename.from.trim().is_empty() || rename.to.trim().is_empty() {
                return Err(
                    "transform.rename_columns entries need non-empty 'from' and 'to'".to_string(),
                );
            }
        }

        let mut targets: Vec<&str> = self.rename_columns.iter().map(|r| r.to.as_str()).collect();
        targets.sort_unstable();
        if let Some(pair) = targets.windows(2).find(|w| w[0] == w[1]) {
            return Err(format!(
                "transform.rename_columns maps two columns to '{}'",
                pair[0]
            ));
        }

        Ok(())
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            year_column: default_year_column(),
            constant_columns: default_constant_columns(),
            drop_columns: default_drop_columns(),
            rename_columns: default_rename_columns(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://www.ine.pt/ine/json_indicador/pindica.jsp".to_string()
}

fn default_indicator_code() -> String {
    "0008074".to_string()
}

fn default_lang() -> String {
    "EN".to_string()
}

fn default_op() -> String {
    "2".to_string()
}

fn default_dimension_param() -> String {
    "Dim1".to_string()
}

fn default_year_prefix() -> String {
    crate::domain::year::DEFAULT_YEAR_PREFIX.to_string()
}

fn default_start_year() -> u16 {
    2011
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_extract_dir() -> String {
    "extract".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_csv_delimiter() -> String {
    ",".to_string()
}

fn default_year_column() -> String {
    "Year".to_string()
}

fn default_constant_columns() -> Vec<ConstantColumn> {
    vec![
        ConstantColumn::new("Indicator Code", INDICATOR_CODE_PLACEHOLDER),
        ConstantColumn::new("Formule", "(Number of crimes/ Resident population)*1000"),
        ConstantColumn::new("Measure Of Unit", "Permillage"),
    ]
}

fn default_drop_columns() -> Vec<String> {
    vec!["sinal_conv".to_string(), "sinal_conv_desc".to_string()]
}

fn default_rename_columns() -> Vec<ColumnRename> {
    vec![
        ColumnRename::new("geocod", "Geo Code"),
        ColumnRename::new("geodsg", "Geo"),
        ColumnRename::new("dim_3", "Crime Code"),
        ColumnRename::new("dim_3_t", "Crime"),
        ColumnRename::new("valor", "Value"),
    ]
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PindicaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.indicator_code, "0008074");
        assert_eq!(config.api.start_year, 2011);
        assert_eq!(config.storage.extract_dir, "extract");
        assert_eq!(config.storage.data_dir, "data");
        assert_eq!(config.storage.selection, SelectionStrategy::ModifiedTime);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: PindicaConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, default_base_url());
        assert_eq!(config.transform.drop_columns.len(), 2);
        assert_eq!(config.transform.rename_columns.len(), 5);
        assert_eq!(config.transform.constant_columns.len(), 3);
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_config_validation() {
        let mut config = ApiConfig::default();
        assert!(config.validate().is_ok());

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = String::new();
        assert!(config.validate().is_err());

        config = ApiConfig {
            indicator_code: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config = ApiConfig {
            start_year: 99,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config = ApiConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_storage_config_validation() {
        let mut config = StorageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter_byte(), b',');

        config.csv_delimiter = ";".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter_byte(), b';');

        config.csv_delimiter = ";;".to_string();
        assert!(config.validate().is_err());

        config.csv_delimiter = ",".to_string();
        config.data_dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_selection_strategy_from_toml() {
        let config: PindicaConfig = toml::from_str(
            r#"
[storage]
selection = "filename_date"
"#,
        )
        .unwrap();
        assert_eq!(config.storage.selection, SelectionStrategy::FilenameDate);
    }

    #[test]
    fn test_transform_config_rejects_duplicate_targets() {
        let mut config = TransformConfig::default();
        assert!(config.validate().is_ok());

        config
            .rename_columns
            .push(ColumnRename::new("other", "Geo"));
        let err = config.validate().unwrap_err();
        assert!(err.contains("'Geo'"));
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_lang(), "EN");
        assert_eq!(default_op(), "2");
        assert_eq!(default_dimension_param(), "Dim1");
        assert_eq!(default_year_prefix(), "S7A");
        assert_eq!(default_timeout_seconds(), 30);
    }
}
