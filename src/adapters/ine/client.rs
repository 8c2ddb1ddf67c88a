//! HTTP client for the INE `pindica.jsp` indicator endpoint

use super::source::IndicatorSource;
use crate::config::ApiConfig;
use crate::domain::{ApiError, PindicaError, Result, YearParameter};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Client for the indicator API
///
/// Each call issues a single GET with the indicator code, language, operation
/// and year parameter in the query string. There are no retries.
pub struct IneClient {
    client: Client,
    base_url: Url,
    indicator_code: String,
    lang: String,
    op: String,
    dimension_param: String,
}

impl IneClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            PindicaError::Configuration(format!("Invalid api.base_url '{}': {e}", config.base_url))
        })?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("pindica/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                PindicaError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url,
            indicator_code: config.indicator_code.clone(),
            lang: config.lang.clone(),
            op: config.op.clone(),
            dimension_param: config.dimension_param.clone(),
        })
    }

    /// Full request URL for a year parameter
    pub fn request_url(&self, param: &YearParameter) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("varcd", &self.indicator_code)
            .append_pair("lang", &self.lang)
            .append_pair("op", &self.op)
            .append_pair(&self.dimension_param, param.as_str());
        url
    }

    /// Base URL of the API
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

fn map_send_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}

#[async_trait]
impl IndicatorSource for IneClient {
    async fn fetch_year(&self, param: &YearParameter) -> std::result::Result<Value, ApiError> {
        let url = self.request_url(param);
        tracing::debug!(url = %url, "Requesting indicator data");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(map_send_error)?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::Parse(format!("Response for {param} is not valid JSON: {e}"))
        })
    }

    fn describe(&self) -> String {
        format!("{} (varcd={})", self.base_url, self.indicator_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::str::FromStr;

    fn config_for(server_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: format!("{server_url}/ine/json_indicador/pindica.jsp"),
            ..Default::default()
        }
    }

    #[test]
    fn test_request_url_contains_query() {
        let client = IneClient::new(&ApiConfig::default()).unwrap();
        let param = YearParameter::from_str("S7A2011").unwrap();
        let url = client.request_url(&param);

        assert_eq!(
            url.as_str(),
            "https://www.ine.pt/ine/json_indicador/pindica.jsp?varcd=0008074&lang=EN&op=2&Dim1=S7A2011"
        );
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            IneClient::new(&config),
            Err(PindicaError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_year_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ine/json_indicador/pindica.jsp")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("varcd".into(), "0008074".into()),
                Matcher::UrlEncoded("lang".into(), "EN".into()),
                Matcher::UrlEncoded("op".into(), "2".into()),
                Matcher::UrlEncoded("Dim1".into(), "S7A2012".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"UltimoPref":"2022","Dados":{"2012":[]}}]"#)
            .create_async()
            .await;

        let client = IneClient::new(&config_for(&server.url())).unwrap();
        let param = YearParameter::from_str("S7A2012").unwrap();
        let body = client.fetch_year(&param).await.unwrap();

        assert_eq!(body[0]["UltimoPref"], "2022");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_year_non_200() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/ine/json_indicador/pindica.jsp")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = IneClient::new(&config_for(&server.url())).unwrap();
        let param = YearParameter::from_str("S7A2012").unwrap();
        let err = client.fetch_year(&param).await.unwrap_err();

        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_fetch_year_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/ine/json_indicador/pindica.jsp")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = IneClient::new(&config_for(&server.url())).unwrap();
        let param = YearParameter::from_str("S7A2012").unwrap();
        let err = client.fetch_year(&param).await.unwrap_err();

        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_year_connection_refused() {
        // Nothing listens on port 9 (discard) in the test environment
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9/pindica.jsp".to_string(),
            timeout_seconds: 2,
            ..Default::default()
        };
        let client = IneClient::new(&config).unwrap();
        let param = YearParameter::from_str("S7A2012").unwrap();
        let err = client.fetch_year(&param).await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_) | ApiError::Timeout(_)));
    }
}
