//! Indicator source trait definition
//!
//! This module defines the `IndicatorSource` trait that abstracts where the
//! per-year indicator documents come from. The extract stage only talks to this
//! trait, so it can run against the live API or an in-memory stand-in.

use crate::domain::{ApiError, YearParameter};
use async_trait::async_trait;
use serde_json::Value;

/// A source of per-year indicator documents
///
/// # Example
///
/// ```no_run
/// use pindica::adapters::ine::{IndicatorSource, IneClient};
/// use pindica::config::ApiConfig;
/// use pindica::domain::YearParameter;
/// use std::str::FromStr;
///
/// # async fn example() -> pindica::domain::Result<()> {
/// let client = IneClient::new(&ApiConfig::default())?;
/// let param = YearParameter::from_str("S7A2011").unwrap();
/// let body = client.fetch_year(&param).await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait IndicatorSource: Send + Sync {
    /// Fetch the raw JSON document for one year
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] / [`ApiError::Timeout`] when the request fails
    /// - [`ApiError::HttpStatus`] for any status other than 200
    /// - [`ApiError::Parse`] when the body is not JSON
    async fn fetch_year(&self, param: &YearParameter) -> Result<Value, ApiError>;

    /// Human readable location of the source, for logging
    fn describe(&self) -> String;
}
