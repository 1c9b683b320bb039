use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use satispay::{Error, HttpSend, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Request as seen by the transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// HttpSend double that records every request and replies with canned
/// outcomes, in order.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    outcomes: Arc<Mutex<VecDeque<Result<http::Response<Bytes>>>>>,
}

impl MockHttpSend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(self, status: StatusCode, body: &str) -> Self {
        let resp = http::Response::builder()
            .status(status)
            .body(Bytes::copy_from_slice(body.as_bytes()))
            .expect("response must be valid");
        self.outcomes.lock().unwrap().push_back(Ok(resp));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, err: Error) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(RecordedRequest {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        });

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::unexpected("no response queued")))
    }
}
