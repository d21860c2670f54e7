use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::ACCEPT;
use reqwest::Url;
use tracker_core::{FailureReason, PortfolioStats};
use tracker_logging::{tracker_debug, tracker_warn};

use crate::decode::decode_error_message;
use crate::{EngineError, TokenProvider};

pub const STATS_PATH: &str = "/api/portfolio/stats";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    /// Upper bound on a whole request. `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Some(Duration::from_secs(30)),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Authenticated GET access to the tracker REST API.
///
/// Each call is independent: no retries, no caching. Sharing one client
/// across concurrent requests is fine since the token is only read.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
    max_bytes: u64,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        tokens: Arc<dyn TokenProvider>,
        settings: FetchSettings,
    ) -> Result<Self, EngineError> {
        let base_url = Url::parse(base_url)?;
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            base_url,
            tokens,
            max_bytes: settings.max_bytes,
        })
    }

    /// Issues one GET and returns the body of an accepted response.
    ///
    /// Non-success statuses become `Rejected` (with the server's
    /// `errorMessage` when present); transport faults become `Unreachable`.
    pub async fn get(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<u8>, FailureReason> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| FailureReason::Unreachable {
                detail: format!("invalid request url: {err}"),
            })?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }

        let mut request = self.http.get(url.clone()).header(ACCEPT, "application/json");
        if let Some(token) = self.tokens.token() {
            request = request.bearer_auth(token);
        }

        tracker_debug!("GET {}", url);
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();

        if !status.is_success() {
            let body = self.read_body(response).await.unwrap_or_default();
            let message = decode_error_message(&body);
            tracker_warn!(
                "GET {} rejected with {}: {}",
                url,
                status,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(FailureReason::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        self.read_body(response).await
    }

    pub async fn portfolio_stats(&self) -> Result<PortfolioStats, FailureReason> {
        let body = self.get(STATS_PATH, &[]).await?;
        serde_json::from_slice(&body).map_err(|err| FailureReason::MalformedResponse {
            detail: err.to_string(),
        })
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FailureReason> {
        if let Some(len) = response.content_length() {
            if len > self.max_bytes {
                return Err(too_large(self.max_bytes, len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(too_large(self.max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FailureReason {
    FailureReason::MalformedResponse {
        detail: format!("response too large (max {max_bytes}, actual {actual})"),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FailureReason {
    let detail = if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    };
    FailureReason::Unreachable { detail }
}
