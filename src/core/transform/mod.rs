//! Transform stage
//!
//! Converts a raw extract into the clean table:
//!
//! 1. flatten every year's records into rows tagged with the year
//!    ([`flatten`])
//! 2. add the constant columns, drop the unwanted ones and rename the rest
//!    ([`mapping`])
//!
//! Any shape problem aborts the whole transform with a schema error.

pub mod flatten;
pub mod mapping;
pub mod table;

pub use flatten::{flatten_payload, flatten_record};
pub use mapping::FieldMapping;
pub use table::Table;

use crate::config::SelectionStrategy;
use crate::core::store::raw;
use crate::domain::{RawPayload, Result};
use std::path::{Path, PathBuf};

/// Flattens `payload` and applies `mapping`
///
/// # Examples
///
/// ```
/// use pindica::config::TransformConfig;
/// use pindica::core::transform::{transform_payload, FieldMapping};
/// use pindica::domain::RawPayload;
/// use serde_json::json;
///
/// let mut payload = RawPayload::new();
/// payload.merge_year("2011", json!([{
///     "geocod": "PT", "geodsg": "Portugal", "dim_3": "1", "dim_3_t": "Theft",
///     "valor": "5.2", "sinal_conv": "", "sinal_conv_desc": ""
/// }]));
///
/// let mapping = FieldMapping::from_config(&TransformConfig::default(), "0008074");
/// let table = transform_payload(&payload, &mapping).unwrap();
///
/// assert_eq!(table.get(0, "Geo Code"), Some("PT"));
/// assert_eq!(table.get(0, "Indicator Code"), Some("0008074"));
/// ```
pub fn transform_payload(payload: &RawPayload, mapping: &FieldMapping) -> Result<Table> {
    let mut table = flatten_payload(payload, &mapping.year_column)?;
    mapping.apply(&mut table)?;

    tracing::info!(
        rows = table.len(),
        columns = ?table.columns(),
        "Transformation finished"
    );
    Ok(table)
}

/// Selects the newest extract in `extract_dir`, loads and transforms it
///
/// Returns the selected file together with the table.
pub fn transform_latest(
    extract_dir: &Path,
    strategy: SelectionStrategy,
    mapping: &FieldMapping,
) -> Result<(PathBuf, Table)> {
    let source = raw::select_latest(extract_dir, strategy)?;
    let payload = raw::load(&source)?;
    let table = transform_payload(&payload, mapping)?;
    Ok((source, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransformConfig;
    use crate::domain::PindicaError;
    use serde_json::json;

    const OUTPUT_COLUMNS: [&str; 9] = [
        "Geo Code",
        "Geo",
        "Crime Code",
        "Crime",
        "Value",
        "Year",
        "Indicator Code",
        "Formule",
        "Measure Of Unit",
    ];

    fn record(geo: &str, value: &str) -> serde_json::Value {
        json!({
            "geocod": geo,
            "geodsg": "Somewhere",
            "dim_3": "1",
            "dim_3_t": "Theft",
            "valor": value,
            "sinal_conv": "",
            "sinal_conv_desc": ""
        })
    }

    fn mapping() -> FieldMapping {
        FieldMapping::from_config(&TransformConfig::default(), "0008074")
    }

    #[test]
    fn test_transform_single_record() {
        let mut payload = RawPayload::new();
        payload.merge_year(
            "2011",
            json!([{
                "geocod": "PT",
                "geodsg": "Portugal",
                "dim_3": "1",
                "dim_3_t": "Theft",
                "valor": "5.2",
                "sinal_conv": "",
                "sinal_conv_desc": ""
            }]),
        );

        let table = transform_payload(&payload, &mapping()).unwrap();

        assert_eq!(table.columns(), OUTPUT_COLUMNS);
        assert_eq!(
            table.rows()[0],
            vec![
                "PT",
                "Portugal",
                "1",
                "Theft",
                "5.2",
                "2011",
                "0008074",
                "(Number of crimes/ Resident population)*1000",
                "Permillage"
            ]
        );
    }

    #[test]
    fn test_transform_row_count_is_sum_of_years() {
        let mut payload = RawPayload::new();
        payload.merge_year("2011", json!([record("PT", "1"), record("11", "2")]));
        payload.merge_year("2012", json!([]));
        payload.merge_year(
            "2013",
            json!([record("PT", "3"), record("11", "4"), record("16", "5")]),
        );

        let table = transform_payload(&payload, &mapping()).unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(
            table.column("Year").unwrap(),
            vec!["2011", "2011", "2013", "2013", "2013"]
        );
        assert!(table.column_index("sinal_conv").is_none());
        assert!(table.column_index("sinal_conv_desc").is_none());
    }

    #[test]
    fn test_transform_missing_drop_column() {
        let mut payload = RawPayload::new();
        payload.merge_year(
            "2011",
            json!([{"geocod": "PT", "geodsg": "Portugal", "dim_3": "1",
                    "dim_3_t": "Theft", "valor": "5.2"}]),
        );

        let err = transform_payload(&payload, &mapping()).unwrap_err();
        assert!(matches!(err, PindicaError::Schema(ref m) if m.contains("sinal_conv")));
    }

    #[test]
    fn test_transform_all_years_empty() {
        let mut payload = RawPayload::new();
        payload.merge_year("2011", json!([]));

        let err = transform_payload(&payload, &mapping()).unwrap_err();
        assert!(matches!(err, PindicaError::Schema(_)));
    }
}
