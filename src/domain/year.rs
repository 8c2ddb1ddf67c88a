//! Year parameter newtype
//!
//! The indicator API selects a year through the `Dim1` query argument, encoded
//! as a fixed prefix followed by a four digit year (`S7A2011`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix the API uses for yearly `Dim1` values
pub const DEFAULT_YEAR_PREFIX: &str = "S7A";

/// Query token selecting a single year
///
/// # Examples
///
/// ```
/// use pindica::domain::year::YearParameter;
/// use std::str::FromStr;
///
/// let param = YearParameter::from_str("S7A2011").unwrap();
/// assert_eq!(param.year(), 2011);
/// assert_eq!(param.year_key(), "2011");
/// assert_eq!(param.as_str(), "S7A2011");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearParameter {
    token: String,
    year: u16,
}

impl YearParameter {
    /// Creates a parameter for `year` using `prefix`
    ///
    /// # Returns
    ///
    /// Returns `Err` if the year does not have exactly four digits
    pub fn new(prefix: &str, year: u16) -> Result<Self, String> {
        if !(1000..=9999).contains(&year) {
            return Err(format!("Year must have four digits, got {year}"));
        }
        Ok(Self {
            token: format!("{prefix}{year}"),
            year,
        })
    }

    /// Parses a token such as `S7A2011` that must start with `prefix`
    pub fn parse_with_prefix(token: &str, prefix: &str) -> Result<Self, String> {
        let digits = token
            .strip_prefix(prefix)
            .ok_or_else(|| format!("Year parameter '{token}' must start with '{prefix}'"))?;

        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!(
                "Year parameter '{token}' must end with a four digit year"
            ));
        }

        let year = digits
            .parse::<u16>()
            .map_err(|e| format!("Invalid year in '{token}': {e}"))?;
        Self::new(prefix, year)
    }

    /// Returns the full query token
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Returns the year as a number
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Returns the four digit key the API uses in `Dados`
    pub fn year_key(&self) -> String {
        format!("{:04}", self.year)
    }
}

impl fmt::Display for YearParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}

impl FromStr for YearParameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_prefix(s, DEFAULT_YEAR_PREFIX)
    }
}

impl AsRef<str> for YearParameter {
    fn as_ref(&self) -> &str {
        &self.token
    }
}
