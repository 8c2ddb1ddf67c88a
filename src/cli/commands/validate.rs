//! Validate config command implementation

use super::{report_failure, EXIT_SUCCESS};
use crate::cli::Cli;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading already substitutes variables, applies overrides and validates,
    /// so a successful load means the configuration is usable.
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let config_path = cli.config_path();
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match cli.load_config() {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                return Ok(report_failure("configuration", &e));
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  API: {}", config.api.base_url);
        println!("  Indicator: {}", config.api.indicator_code);
        println!("  Language: {}", config.api.lang);
        println!(
            "  First Year: {} ({}{})",
            config.api.start_year, config.api.year_prefix, config.api.start_year
        );
        println!("  Timeout: {}s", config.api.timeout_seconds);
        println!("  Extract Dir: {}", config.storage.extract_dir);
        println!("  Data Dir: {}", config.storage.data_dir);
        println!("  Selection: {:?}", config.storage.selection);
        println!("  CSV Delimiter: {:?}", config.storage.csv_delimiter);
        println!(
            "  Constant Columns: {:?}",
            config
                .transform
                .constant_columns
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
        );
        println!("  Dropped Columns: {:?}", config.transform.drop_columns);
        println!(
            "  Renames: {}",
            config
                .transform
                .rename_columns
                .iter()
                .map(|r| format!("{} -> {}", r.from, r.to))
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
        Ok(EXIT_SUCCESS)
    }
}
