//! reqwest-backed [`RemoteService`].

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument};

use super::error::{extract_error_message, RemoteFailure};
use super::remote::{ApiRequest, RemoteService};

/// Base URL of the production scoring service.
pub const DEFAULT_BASE_URL: &str = "https://api.clmb.live";

/// HTTP transport for a single contender.
///
/// Each instance owns its own `reqwest::Client`, so contenders never share a
/// connection pool.
#[derive(Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
    authorization: String,
}

impl HttpRemote {
    /// Creates a transport authenticating every request with `registration_code`.
    ///
    /// # Arguments
    /// * `base_url` - Root of the scoring API (e.g., "https://api.clmb.live")
    /// * `registration_code` - The contender's credential
    pub fn new(base_url: &str, registration_code: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: format!("Regcode {registration_code}"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn is_success(status: StatusCode) -> bool {
    matches!(status.as_u16(), 200 | 201 | 204)
}

#[async_trait]
impl RemoteService for HttpRemote {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn call(&self, request: ApiRequest) -> Result<Option<Value>, RemoteFailure> {
        let ApiRequest {
            method,
            path,
            body,
            query,
        } = request;

        let transport = |e: reqwest::Error| RemoteFailure::Transport {
            method: method.clone(),
            path: path.clone(),
            message: e.to_string(),
        };

        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, &self.authorization);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport)?;
        let status = response.status();
        let text = response.text().await.map_err(transport)?;
        debug!(status = status.as_u16(), bytes = text.len(), "Response");

        if !is_success(status) {
            return Err(RemoteFailure::Status {
                method,
                path,
                status: status.as_u16(),
                message: extract_error_message(&text),
            });
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| RemoteFailure::Decode {
                method,
                path,
                message: e.to_string(),
            })
    }
}
