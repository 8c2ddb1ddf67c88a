//! Range discovery
//!
//! Probes the API once with the start year and builds the list of year
//! parameters from the start year through the last year the API reports.

use crate::adapters::ine::models::last_available_year;
use crate::adapters::ine::IndicatorSource;
use crate::domain::{DiscoveryError, YearParameter};

/// Builds the inclusive, ascending parameter list `[start_year, last_year]`
///
/// # Errors
///
/// - [`DiscoveryError::EmptyRange`] if `last_year < start_year`
/// - [`DiscoveryError::InvalidLastYear`] if a year does not have four digits
///
/// # Examples
///
/// ```
/// use pindica::core::extract::discovery::year_parameters;
///
/// let params = year_parameters("S7A", 2011, 2013).unwrap();
/// let tokens: Vec<&str> = params.iter().map(|p| p.as_str()).collect();
/// assert_eq!(tokens, ["S7A2011", "S7A2012", "S7A2013"]);
/// ```
pub fn year_parameters(
    prefix: &str,
    start_year: u16,
    last_year: u16,
) -> Result<Vec<YearParameter>, DiscoveryError> {
    if last_year < start_year {
        return Err(DiscoveryError::EmptyRange {
            start_year,
            last_year,
        });
    }

    (start_year..=last_year)
        .map(|year| {
            YearParameter::new(prefix, year)
                .map_err(|_| DiscoveryError::InvalidLastYear(year.to_string()))
        })
        .collect()
}

/// Asks the source for the last available year and returns the fetch plan
///
/// # Errors
///
/// Any probe failure (network, non-200, body shape) is returned as
/// [`DiscoveryError::Request`]; callers never receive a partial plan.
pub async fn discover_year_range(
    source: &dyn IndicatorSource,
    prefix: &str,
    start_year: u16,
) -> Result<Vec<YearParameter>, DiscoveryError> {
    let probe = YearParameter::new(prefix, start_year)
        .map_err(|_| DiscoveryError::InvalidLastYear(start_year.to_string()))?;

    tracing::info!(
        source = %source.describe(),
        probe = %probe,
        "Accessing the API to get the data range"
    );

    let body = source.fetch_year(&probe).await.map_err(|e| {
        tracing::error!(error = %e, probe = %probe, "Range discovery probe failed");
        DiscoveryError::Request(e)
    })?;

    let raw_last_year = last_available_year(&body)?;
    let last_year: u16 = raw_last_year
        .parse()
        .map_err(|_| DiscoveryError::InvalidLastYear(raw_last_year.clone()))?;
    tracing::info!(last_year, "Last year of data reported by the API");

    let params = year_parameters(prefix, start_year, last_year)?;
    tracing::info!(
        first_year = start_year,
        last_year,
        count = params.len(),
        "Year parameters extracted"
    );

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use test_case::test_case;

    struct ProbeSource(std::result::Result<Value, u16>);

    #[async_trait]
    impl IndicatorSource for ProbeSource {
        async fn fetch_year(&self, _param: &YearParameter) -> Result<Value, ApiError> {
            match &self.0 {
                Ok(body) => Ok(body.clone()),
                Err(status) => Err(ApiError::HttpStatus {
                    status: *status,
                    url: "http://probe".to_string(),
                }),
            }
        }

        fn describe(&self) -> String {
            "probe".to_string()
        }
    }

    #[test_case(2011, 1 ; "single year")]
    #[test_case(2012, 2 ; "two years")]
    #[test_case(2022, 12 ; "twelve years")]
    fn test_year_parameters_count(last_year: u16, expected: usize) {
        let params = year_parameters("S7A", 2011, last_year).unwrap();
        assert_eq!(params.len(), (last_year - 2011 + 1) as usize);
        assert_eq!(params.len(), expected);
        assert!(params.windows(2).all(|w| w[0].year() < w[1].year()));
        assert!(params
            .iter()
            .all(|p| p.as_str() == format!("S7A{}", p.year())));
    }

    #[test]
    fn test_year_parameters_empty_range() {
        let err = year_parameters("S7A", 2011, 2010).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::EmptyRange {
                start_year: 2011,
                last_year: 2010
            }
        ));
    }

    #[tokio::test]
    async fn test_discover_year_range() {
        let source = ProbeSource(Ok(json!([{"UltimoPref": "2014"}])));
        let params = discover_year_range(&source, "S7A", 2011).await.unwrap();
        let tokens: Vec<&str> = params.iter().map(|p| p.as_str()).collect();
        assert_eq!(tokens, ["S7A2011", "S7A2012", "S7A2013", "S7A2014"]);
    }

    #[tokio::test]
    async fn test_discover_year_range_http_500() {
        let source = ProbeSource(Err(500));
        let err = discover_year_range(&source, "S7A", 2011).await.unwrap_err();
        match err {
            DiscoveryError::Request(api) => assert_eq!(api.status(), Some(500)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_discover_year_range_bad_last_year() {
        let source = ProbeSource(Ok(json!([{"UltimoPref": "soon"}])));
        let err = discover_year_range(&source, "S7A", 2011).await.unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidLastYear(ref y) if y == "soon"));
    }

    #[tokio::test]
    async fn test_discover_year_range_missing_field() {
        let source = ProbeSource(Ok(json!([{"Dados": {}}])));
        let err = discover_year_range(&source, "S7A", 2011).await.unwrap_err();
        assert!(matches!(err, DiscoveryError::Request(ApiError::Parse(_))));
    }
}
