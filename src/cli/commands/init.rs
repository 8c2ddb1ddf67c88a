//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIGURATION, EXIT_FATAL, EXIT_SUCCESS};
use crate::cli::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Include every option with comments, including the column pipeline
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Pindica configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIGURATION);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} if the defaults do not suit you", self.output);
                println!("  2. Validate configuration: pindica validate-config");
                println!("  3. Run the pipeline: pindica run");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Pindica Configuration File
# INE statistical indicator ETL

[application]
log_level = "info"

[api]
base_url = "https://www.ine.pt/ine/json_indicador/pindica.jsp"
indicator_code = "0008074"
start_year = 2011

[storage]
extract_dir = "extract"
data_dir = "data"

[logging]
local_enabled = false
"#
        .to_string()
    }

    /// Generate configuration with every option documented
    fn generate_config_with_examples() -> String {
        r#"# Pindica Configuration File
# INE statistical indicator ETL
#
# Values may reference environment variables: key = "${MY_VAR}"
# Any key can also be overridden with PINDICA_<SECTION>_<KEY>,
# e.g. PINDICA_API_START_YEAR=2015

[application]
# trace | debug | info | warn | error (RUST_LOG takes precedence)
log_level = "info"

[api]
base_url = "https://www.ine.pt/ine/json_indicador/pindica.jsp"
# Indicator requested as varcd=<indicator_code>
indicator_code = "0008074"
lang = "EN"
op = "2"
# Query parameter carrying the year token, and the token prefix (S7A2011)
dimension_param = "Dim1"
year_prefix = "S7A"
# Probe year; the range runs from here to the last year the API reports
start_year = 2011
timeout_seconds = 30

[storage]
extract_dir = "extract"
data_dir = "data"
# modified_time | filename_date
selection = "modified_time"
csv_delimiter = ","

[transform]
year_column = "Year"
drop_columns = ["sinal_conv", "sinal_conv_desc"]

# {indicator_code} is replaced with api.indicator_code
[[transform.constant_columns]]
name = "Indicator Code"
value = "{indicator_code}"

[[transform.constant_columns]]
name = "Formule"
value = "(Number of crimes/ Resident population)*1000"

[[transform.constant_columns]]
name = "Measure Of Unit"
value = "Permillage"

[[transform.rename_columns]]
from = "geocod"
to = "Geo Code"

[[transform.rename_columns]]
from = "geodsg"
to = "Geo"

[[transform.rename_columns]]
from = "dim_3"
to = "Crime Code"

[[transform.rename_columns]]
from = "dim_3_t"
to = "Crime"

[[transform.rename_columns]]
from = "valor"
to = "Value"

[logging]
local_enabled = false
local_path = "logs"
# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
