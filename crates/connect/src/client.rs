//! HTTP client for the bank backend.
//!
//! The backend owns the bank login and session handling. This client only
//! presents the account credentials over basic auth and reads the history
//! response.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

use mbtx_core::bank::{BankClient, BankClientFactory, Credentials, TransactionHistory};
use mbtx_core::errors::{Error, Result};
use mbtx_core::transactions::DateRange;

/// Default base URL of the bank backend.
pub const DEFAULT_BANK_API_URL: &str = "http://127.0.0.1:9000";

/// Date-time format sent to the backend.
const QUERY_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client bound to one set of bank credentials.
///
/// # Example
///
/// ```ignore
/// let client = HttpBankClient::new("http://127.0.0.1:9000", &credentials, timeout)?;
/// let history = client.get_transaction_account_history("0123456789", &range).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpBankClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpBankClient {
    /// Create a new bank client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client cannot be
    /// initialized.
    pub fn new(base_url: &str, credentials: &Credentials, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Error::InvalidConfigValue(
                "Bank API URL must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Upstream(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn history_url(&self, account_no: &str, range: &DateRange) -> String {
        format!(
            "{}/accounts/{}/transaction-history?fromDate={}&toDate={}",
            self.base_url,
            urlencoding::encode(account_no),
            urlencoding::encode(&format_query_datetime(&range.from())),
            urlencoding::encode(&format_query_datetime(&range.to())),
        )
    }
}

fn format_query_datetime(value: &NaiveDateTime) -> String {
    value.format(QUERY_DATETIME_FORMAT).to_string()
}

/// Turns a backend response into a history, mapping failures to upstream errors.
pub fn parse_history_response(status: reqwest::StatusCode, body: &str) -> Result<TransactionHistory> {
    if !status.is_success() {
        // Try to parse error response for a better message
        if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
            if let Some(msg) = err.message.or(err.error) {
                return Err(Error::Upstream(format!("Bank API error: {}", msg)));
            }
        }
        return Err(Error::Upstream(format!(
            "Bank API error {}: {}",
            status,
            body.chars().take(200).collect::<String>()
        )));
    }

    serde_json::from_str(body).map_err(|e| {
        Error::Upstream(format!(
            "Failed to parse bank response: {} - {}",
            e,
            body.chars().take(200).collect::<String>()
        ))
    })
}

#[async_trait]
impl BankClient for HttpBankClient {
    async fn get_transaction_account_history(
        &self,
        account_no: &str,
        range: &DateRange,
    ) -> Result<TransactionHistory> {
        let url = self.history_url(account_no, range);
        debug!("[BankApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to read response: {}", e)))?;

        let history = parse_history_response(status, &body)?;
        info!("[BankApi] Fetched {} transactions", history.len());
        Ok(history)
    }
}

/// Builds an [`HttpBankClient`] for every request.
#[derive(Debug, Clone)]
pub struct HttpBankClientFactory {
    base_url: String,
    timeout: Duration,
}

impl HttpBankClientFactory {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }
}

impl BankClientFactory for HttpBankClientFactory {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn BankClient>> {
        let client = HttpBankClient::new(&self.base_url, credentials, self.timeout)?;
        Ok(Box::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn credentials() -> Credentials {
        Credentials::new("alice", "secret", "0123456789")
    }

    fn january() -> DateRange {
        DateRange::parse("00-00-00-01-01-2024", "23-59-59-31-01-2024").unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = HttpBankClient::new("http://bank.local", &credentials(), Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_url_normalization() {
        let client =
            HttpBankClient::new("http://bank.local/", &credentials(), Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url, "http://bank.local");
    }

    #[test]
    fn test_client_rejects_empty_url() {
        let err = HttpBankClient::new("  ", &credentials(), Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_history_url() {
        let client =
            HttpBankClient::new("http://bank.local", &credentials(), Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.history_url("0123456789", &january()),
            "http://bank.local/accounts/0123456789/transaction-history\
             ?fromDate=2024-01-01T00%3A00%3A00&toDate=2024-01-31T23%3A59%3A59"
        );
    }

    #[test]
    fn test_parse_success_with_records() {
        let body = r#"{
            "result": {"ok": true},
            "transactionHistoryList": [
                {"refNo": "FT1", "description": "salary"},
                {"refNo": "FT2"}
            ]
        }"#;
        let history = parse_history_response(StatusCode::OK, body).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].attr("description").as_deref(), Some("salary"));
    }

    #[test]
    fn test_parse_success_without_list() {
        let history = parse_history_response(StatusCode::OK, "{}").unwrap();
        assert!(history.transaction_history_list.is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn test_parse_error_uses_backend_message() {
        let err = parse_history_response(
            StatusCode::UNAUTHORIZED,
            r#"{"code": "GW283", "message": "Invalid username or password"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert_eq!(err.to_string(), "Bank API error: Invalid username or password");
    }

    #[test]
    fn test_parse_error_without_json_body() {
        let err = parse_history_response(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
        assert_eq!(err.to_string(), "Bank API error 502 Bad Gateway: upstream down");
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        let err = parse_history_response(StatusCode::OK, "not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse bank response"));
    }

    #[tokio::test]
    async fn test_bank_timeout_is_upstream_error() {
        // Accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let client =
            HttpBankClient::new(&base_url, &credentials(), Duration::from_millis(100)).unwrap();

        let err = client
            .get_transaction_account_history("0123456789", &january())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
        assert!(err.to_string().starts_with("Request failed"));
        drop(listener);
    }

    #[test]
    fn test_factory_builds_client() {
        let factory = HttpBankClientFactory::new("http://bank.local", Duration::from_secs(1));
        assert!(factory.connect(&credentials()).is_ok());

        let factory = HttpBankClientFactory::new("", Duration::from_secs(1));
        assert!(factory.connect(&credentials()).is_err());
    }
}
