//! The transport seam between the simulator and the scoring service.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::error::RemoteFailure;

/// One request to the scoring service, relative to its base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Something that can carry an [`ApiRequest`] to the scoring service on behalf
/// of one contender.
///
/// Implementations attach the contender's credentials themselves, classify
/// the outcome, and never retry. `Ok(None)` means success with an empty body.
#[async_trait]
pub trait RemoteService: Send + Sync {
    async fn call(&self, request: ApiRequest) -> Result<Option<Value>, RemoteFailure>;
}
