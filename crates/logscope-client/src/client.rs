use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use logscope_types::LogRecord;

use crate::error::{FetchError, Result};

/// Request timeout applied when the caller does not override it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const LOGS_PATH: &str = "/logs";

/// Connection settings for the remote log source
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the remote API, without the logs path
    pub base_url: String,

    /// Bearer credential attached to every request (if any)
    pub bearer_token: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default timeout and no credential
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the bearer credential
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the remote log source
#[derive(Clone, Debug)]
pub struct LogApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

/// Snapshot payload returned by the log endpoint
#[derive(Debug, Deserialize)]
struct LogsPayload {
    ok: bool,
    #[serde(default)]
    logs: Vec<LogRecord>,
}

/// Acknowledgement payload returned by the clear endpoint
#[derive(Debug, Deserialize)]
struct AckPayload {
    ok: bool,
}

impl LogApiClient {
    /// Build a client from the given connection settings
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("logscope/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Init)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token,
        })
    }

    /// Fetch the current full log snapshot, in source order.
    ///
    /// `ok: false` in the payload is a rejection regardless of HTTP status.
    pub async fn fetch_all(&self) -> Result<Vec<LogRecord>> {
        let url = self.logs_url();
        debug!(%url, "fetching log snapshot");

        let response = self
            .authorized(self.http.get(&url))
            .send()
            .await
            .map_err(FetchError::Network)?;

        let payload: LogsPayload = decode(response).await?;
        if !payload.ok {
            return Err(FetchError::Rejected(
                "log source reported failure".to_string(),
            ));
        }

        Ok(payload.logs)
    }

    /// Ask the remote source to discard every persisted record.
    ///
    /// Destructive; callers are expected to confirm with the operator first.
    pub async fn clear_remote(&self) -> Result<()> {
        let url = self.logs_url();
        debug!(%url, "clearing remote log");

        let response = self
            .authorized(self.http.delete(&url))
            .send()
            .await
            .map_err(FetchError::Network)?;

        let ack: AckPayload = decode(response).await?;
        if !ack.ok {
            return Err(FetchError::Rejected(
                "log source refused to clear".to_string(),
            ));
        }

        Ok(())
    }

    fn logs_url(&self) -> String {
        format!("{}{}", self.base_url, LOGS_PATH)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Decode a response body, classifying the ways it can fail
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Rejected(format!("HTTP {status}")));
    }

    response.json().await.map_err(|e| {
        if e.is_decode() {
            FetchError::Malformed(e)
        } else {
            FetchError::Network(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn snapshot_body() -> serde_json::Value {
        serde_json::json!({
            "ok": true,
            "logs": [
                {
                    "timestamp": "2024-01-01 10:00:00",
                    "level": "info",
                    "message": "server started"
                },
                {
                    "timestamp": "2024-01-01 10:00:05",
                    "level": "error",
                    "message": "connection lost",
                    "category": "net"
                }
            ]
        })
    }

    fn client_for(server: &MockServer) -> LogApiClient {
        LogApiClient::new(ClientConfig::new(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn fetches_snapshot_in_source_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body()))
            .mount(&server)
            .await;

        let records = client_for(&server).fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "server started");
        assert_eq!(records[1].level, "error");
        assert_eq!(records[1].category.as_deref(), Some("net"));
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logs"))
            .and(header("authorization", "Bearer sekrit"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"ok": true, "logs": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client =
            LogApiClient::new(ClientConfig::new(server.uri()).with_bearer_token("sekrit"))
                .unwrap();
        client.fetch_all().await.unwrap();
    }

    #[tokio::test]
    async fn tolerates_trailing_slash_on_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logs"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"ok": true, "logs": []})),
            )
            .mount(&server)
            .await;

        let client =
            LogApiClient::new(ClientConfig::new(format!("{}/", server.uri()))).unwrap();
        assert!(client.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logs"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Rejected(_)));
    }

    #[tokio::test]
    async fn ok_false_is_a_rejection_despite_http_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": false})))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Rejected(_)));
    }

    #[tokio::test]
    async fn undecodable_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[tokio::test]
    async fn unreachable_source_is_a_network_failure() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = LogApiClient::new(ClientConfig::new(uri)).unwrap();
        let err = client.fetch_all().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn clear_sends_delete_to_the_logs_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/logs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).clear_remote().await.unwrap();
    }

    #[tokio::test]
    async fn clear_refusal_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/logs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": false})))
            .mount(&server)
            .await;

        let err = client_for(&server).clear_remote().await.unwrap_err();
        assert!(matches!(err, FetchError::Rejected(_)));
    }
}
