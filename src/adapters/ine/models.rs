//! Response shape of the indicator API
//!
//! Every response is a JSON array whose first element carries the metadata
//! (`UltimoPref`, the last available year) and, for yearly requests, a `Dados`
//! object keyed by four digit year.

use crate::domain::ApiError;
use serde_json::{Map, Value};

/// Field holding the last available year
pub const LAST_YEAR_FIELD: &str = "UltimoPref";

/// Field holding the per-year observation arrays
pub const DATA_FIELD: &str = "Dados";

fn first_entry(body: &Value) -> Result<&Map<String, Value>, ApiError> {
    body.as_array()
        .ok_or_else(|| ApiError::Parse("expected a JSON array".to_string()))?
        .first()
        .ok_or_else(|| ApiError::Parse("response array is empty".to_string()))?
        .as_object()
        .ok_or_else(|| ApiError::Parse("first array element is not an object".to_string()))
}

/// Reads `[0].UltimoPref` as text
///
/// The API sends the year as a string; a bare JSON integer is accepted too.
pub fn last_available_year(body: &Value) -> Result<String, ApiError> {
    let entry = first_entry(body)?;
    match entry.get(LAST_YEAR_FIELD) {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(ApiError::Parse(format!(
            "{LAST_YEAR_FIELD} has unexpected type: {other}"
        ))),
        None => Err(ApiError::Parse(format!("missing field {LAST_YEAR_FIELD}"))),
    }
}

/// Reads `[0].Dados.<year_key>`, the observation array of one year
pub fn year_records(body: &Value, year_key: &str) -> Result<Value, ApiError> {
    let entry = first_entry(body)?;
    let dados = entry
        .get(DATA_FIELD)
        .and_then(Value::as_object)
        .ok_or_else(|| ApiError::Parse(format!("missing object field {DATA_FIELD}")))?;

    dados
        .get(year_key)
        .cloned()
        .ok_or_else(|| ApiError::Parse(format!("{DATA_FIELD} has no entry for {year_key}")))
}
