//! Field mapping applied after flattening

use super::table::Table;
use crate::config::schema::INDICATOR_CODE_PLACEHOLDER;
use crate::config::TransformConfig;
use crate::domain::Result;

/// Constant columns, drop list and rename table, with placeholders resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub year_column: String,
    pub constants: Vec<(String, String)>,
    pub drop: Vec<String>,
    pub renames: Vec<(String, String)>,
}

impl FieldMapping {
    /// Builds the mapping from the `[transform]` section
    ///
    /// `{indicator_code}` inside a constant value is replaced by
    /// `indicator_code`.
    pub fn from_config(config: &TransformConfig, indicator_code: &str) -> Self {
        Self {
            year_column: config.year_column.clone(),
            constants: config
                .constant_columns
                .iter()
                .map(|c| {
                    (
                        c.name.clone(),
                        c.value.replace(INDICATOR_CODE_PLACEHOLDER, indicator_code),
                    )
                })
                .collect(),
            drop: config.drop_columns.clone(),
            renames: config
                .rename_columns
                .iter()
                .map(|r| (r.from.clone(), r.to.clone()))
                .collect(),
        }
    }

    /// Adds constants, then drops, then renames
    pub fn apply(&self, table: &mut Table) -> Result<()> {
        for (name, value) in &self.constants {
            table.add_constant_column(name, value);
        }
        table.drop_columns(&self.drop)?;
        table.rename_columns(&self.renames)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnRename, ConstantColumn};

    #[test]
    fn test_default_mapping_resolves_indicator_code() {
        let mapping = FieldMapping::from_config(&TransformConfig::default(), "0008074");

        assert_eq!(mapping.year_column, "Year");
        assert_eq!(
            mapping.constants[0],
            ("Indicator Code".to_string(), "0008074".to_string())
        );
        assert_eq!(mapping.drop, vec!["sinal_conv", "sinal_conv_desc"]);
        assert_eq!(mapping.renames.len(), 5);
    }

    #[test]
    fn test_apply_custom_mapping() {
        let config = TransformConfig {
            year_column: "Year".to_string(),
            constant_columns: vec![ConstantColumn::new("Source", "INE {indicator_code}")],
            drop_columns: vec!["junk".to_string()],
            rename_columns: vec![ColumnRename::new("v", "Value")],
        };
        let mapping = FieldMapping::from_config(&config, "42");

        let mut table = Table::new(vec!["v".into(), "junk".into(), "Year".into()]);
        table
            .push_row(vec!["1".into(), "x".into(), "2011".into()])
            .unwrap();

        mapping.apply(&mut table).unwrap();

        assert_eq!(table.columns(), ["Value", "Year", "Source"]);
        assert_eq!(table.rows()[0], vec!["1", "2011", "INE 42"]);
    }
}
