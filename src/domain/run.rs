//! Run date stamp
//!
//! Every file written by a run carries the same `YYYYMMDD` stamp, computed once
//! when the process starts.

use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Date stamp shared by all files written in one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunDate(NaiveDate);

impl RunDate {
    /// Wraps an explicit date
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in local time
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The underlying date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Compact `YYYYMMDD` stamp used in filenames
    pub fn stamp(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl fmt::Display for RunDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stamp())
    }
}

impl FromStr for RunDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Run date must be YYYYMMDD, got '{s}'"));
        }
        NaiveDate::parse_from_str(s, "%Y%m%d")
            .map(Self)
            .map_err(|e| format!("Invalid run date '{s}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_is_zero_padded() {
        let date = RunDate::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(date.stamp(), "20240307");
        assert_eq!(date.to_string(), "20240307");
    }

    #[test]
    fn test_parse_stamp() {
        let date: RunDate = "20231231".parse().unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_parse_invalid_stamp() {
        assert!("2023-12-31".parse::<RunDate>().is_err());
        assert!("20231345".parse::<RunDate>().is_err());
        assert!("".parse::<RunDate>().is_err());
    }
}
