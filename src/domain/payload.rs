//! Raw indicator payload
//!
//! The merged API response: year key → array of observation records, kept in
//! the order the years were merged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Merged per-year observation arrays, keyed by four digit year
///
/// Serializes transparently as a JSON object so the stored extract looks exactly
/// like the `Dados` objects returned by the API, merged together.
///
/// # Examples
///
/// ```
/// use pindica::domain::payload::RawPayload;
/// use serde_json::json;
///
/// let mut payload = RawPayload::new();
/// payload.merge_year("2011", json!([{"geocod": "PT"}]));
/// payload.merge_year("2011", json!([{"geocod": "ES"}]));
///
/// assert_eq!(payload.len(), 1);
/// assert_eq!(payload.get("2011").unwrap()[0]["geocod"], "ES");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPayload {
    years: Map<String, Value>,
}

impl RawPayload {
    /// Creates an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the records for `year`, replacing any earlier entry in place
    pub fn merge_year(&mut self, year: impl Into<String>, records: Value) {
        self.years.insert(year.into(), records);
    }

    /// Merges every key of a `Dados` object into the payload
    pub fn merge_object(&mut self, dados: Map<String, Value>) {
        for (year, records) in dados {
            self.merge_year(year, records);
        }
    }

    /// Returns the records stored for `year`
    pub fn get(&self, year: &str) -> Option<&Value> {
        self.years.get(year)
    }

    /// Iterates years in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.years.iter()
    }

    /// Year keys in insertion order
    pub fn years(&self) -> Vec<&str> {
        self.years.keys().map(String::as_str).collect()
    }

    /// Number of years held
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// True when no year was merged
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Total observation records across years; non-array entries count as zero
    pub fn record_count(&self) -> usize {
        self.years
            .values()
            .map(|v| v.as_array().map_or(0, Vec::len))
            .sum()
    }
}

impl From<Map<String, Value>> for RawPayload {
    fn from(years: Map<String, Value>) -> Self {
        Self { years }
    }
}
