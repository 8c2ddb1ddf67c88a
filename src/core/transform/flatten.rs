//! Record flattening
//!
//! Turns the per-year record arrays of a [`RawPayload`] into one [`Table`].
//! Nested objects become dotted column names (`parent.child`), so a record
//! like `{"geo": {"cod": "PT"}}` yields a `geo.cod` column.

use super::table::Table;
use crate::domain::{PindicaError, RawPayload, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Renders a scalar as the text written to the CSV
///
/// Strings are used as-is, numbers and booleans in their JSON form, null as an
/// empty cell. Arrays are kept as compact JSON text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn flatten_into(prefix: Option<&str>, map: &Map<String, Value>, out: &mut Vec<(String, String)>) {
    for (key, value) in map {
        let name = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(inner) => flatten_into(Some(&name), inner, out),
            scalar => out.push((name, cell_text(scalar))),
        }
    }
}

/// Flattens one record to `(column, cell)` pairs in field order
pub fn flatten_record(record: &Map<String, Value>) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(record.len());
    flatten_into(None, record, &mut out);
    out
}

/// Column order by first appearance
#[derive(Default)]
struct ColumnSet {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ColumnSet {
    fn insert(&mut self, name: &str) {
        if !self.index.contains_key(name) {
            self.index.insert(name.to_string(), self.names.len());
            self.names.push(name.to_string());
        }
    }
}

/// Concatenates every year's records into a table with a year column
///
/// Years are visited in payload order and records in array order. The columns
/// are the union of all record fields, ordered by first appearance, followed
/// by `year_column`. A record field with the same name as `year_column` is
/// ignored in favour of the year key.
///
/// # Errors
///
/// [`PindicaError::Schema`] if the payload has no years, a year value is not
/// an array, or a record is not an object.
pub fn flatten_payload(payload: &RawPayload, year_column: &str) -> Result<Table> {
    if payload.is_empty() {
        return Err(PindicaError::Schema(
            "raw payload holds no years; nothing to transform".to_string(),
        ));
    }

    let mut columns = ColumnSet::default();
    let mut flattened: Vec<(&str, Vec<(String, String)>)> = Vec::new();

    for (year, records) in payload.iter() {
        let records = records.as_array().ok_or_else(|| {
            PindicaError::Schema(format!("year {year}: expected an array of records"))
        })?;

        for (idx, record) in records.iter().enumerate() {
            let record = record.as_object().ok_or_else(|| {
                PindicaError::Schema(format!("year {year}, record {idx}: expected an object"))
            })?;

            let cells: Vec<(String, String)> = flatten_record(record)
                .into_iter()
                .filter(|(name, _)| name != year_column)
                .collect();
            for (name, _) in &cells {
                columns.insert(name);
            }
            flattened.push((year.as_str(), cells));
        }
    }

    let data_width = columns.names.len();
    let mut header = columns.names.clone();
    header.push(year_column.to_string());
    let mut table = Table::new(header);

    for (year, cells) in flattened {
        let mut row = vec![String::new(); data_width + 1];
        for (name, text) in cells {
            if let Some(&idx) = columns.index.get(&name) {
                row[idx] = text;
            }
        }
        row[data_width] = year.to_string();
        table.push_row(row)?;
    }

    tracing::debug!(
        years = payload.len(),
        rows = table.len(),
        columns = table.columns().len(),
        "Payload flattened"
    );

    Ok(table)
}
