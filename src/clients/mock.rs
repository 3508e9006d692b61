//! # Mock Remote
//!
//! An in-memory [`RemoteService`] with a strict expectation queue, for testing
//! code that talks to the scoring service without a network.
//!
//! Expectations are consumed in order. A request whose method or path does not
//! match the next expectation, or that arrives after the queue is drained,
//! panics the calling task. Every request is recorded so tests can assert on
//! bodies and query strings afterwards.
//!
//! ```ignore
//! let mock = MockRemote::new();
//! mock.expect(Method::GET, "/compClass").return_ok(json!([{ "id": 1, "name": "Open" }]));
//! mock.expect(Method::DELETE, "/tick/9").return_status(404, Some("Tick not found"));
//!
//! let client = ScoringClient::new(mock.clone());
//! // Use client in tests...
//! mock.verify(); // Ensures all expectations were met
//! ```

use super::error::RemoteFailure;
use super::remote::{ApiRequest, RemoteService};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One scripted response, matched against the next request.
struct Expectation {
    method: Method,
    path: String,
    response: Response,
}

enum Response {
    Body(Option<Value>),
    Status { status: u16, message: Option<String> },
    Transport(String),
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<ApiRequest>,
}

/// A scripted scoring service. Clones share the same queue and call log.
#[derive(Clone, Default)]
pub struct MockRemote {
    state: Arc<Mutex<MockState>>,
}

impl MockRemote {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with the given method and path (query excluded).
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            state: self.state.clone(),
        }
    }

    /// All requests received so far, in order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.state.lock().unwrap().expectations.len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl RemoteService for MockRemote {
    async fn call(&self, request: ApiRequest) -> Result<Option<Value>, RemoteFailure> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(request.clone());

        let next = state.expectations.pop_front();
        drop(state); // Release lock before panicking or responding

        let Some(expectation) = next else {
            panic!("Unexpected request: {} {}", request.method, request.path);
        };

        if expectation.method != request.method || expectation.path != request.path {
            panic!(
                "Expectation mismatch: expected {} {}, got {} {}",
                expectation.method, expectation.path, request.method, request.path
            );
        }

        match expectation.response {
            Response::Body(body) => Ok(body),
            Response::Status { status, message } => Err(RemoteFailure::Status {
                method: request.method,
                path: request.path,
                status,
                message,
            }),
            Response::Transport(message) => Err(RemoteFailure::Transport {
                method: request.method,
                path: request.path,
                message,
            }),
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Responds with a JSON body.
    pub fn return_ok(self, body: Value) {
        self.push(Response::Body(Some(body)));
    }

    /// Responds with success and no body (e.g., `204 No Content`).
    pub fn return_empty(self) {
        self.push(Response::Body(None));
    }

    /// Responds with a non-success HTTP status.
    pub fn return_status(self, status: u16, message: Option<&str>) {
        self.push(Response::Status {
            status,
            message: message.map(str::to_string),
        });
    }

    /// Fails as if the connection could not be made.
    pub fn return_transport(self, message: &str) {
        self.push(Response::Transport(message.to_string()));
    }

    fn push(self, response: Response) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_remote_with_expectations() {
        let mock = MockRemote::new();
        mock.expect(Method::GET, "/compClass")
            .return_ok(json!([{ "id": 1, "name": "Open" }]));
        mock.expect(Method::DELETE, "/tick/9")
            .return_status(404, Some("Tick not found"));

        let classes = mock.call(ApiRequest::get("/compClass")).await.unwrap();
        assert_eq!(classes, Some(json!([{ "id": 1, "name": "Open" }])));

        let err = mock
            .call(ApiRequest::new(Method::DELETE, "/tick/9"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));

        assert_eq!(mock.calls().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected request")]
    async fn test_unscripted_request_panics() {
        let mock = MockRemote::new();
        let _ = mock.call(ApiRequest::get("/tick")).await;
    }

    #[test]
    #[should_panic(expected = "1 remaining")]
    fn test_verify_reports_unmet_expectations() {
        let mock = MockRemote::new();
        mock.expect(Method::GET, "/problem").return_ok(json!([]));
        mock.verify();
    }
}
