//! In-memory transport with canned replies.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{FetchError, RequestBuilder, Response, Transport};

/// Transport that answers from a URL-keyed table and records every request.
///
/// Unknown URLs get a 404 with an empty body.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<HashMap<String, Result<Response, FetchError>>>>,
    requests: Arc<Mutex<Vec<RequestBuilder>>>,
}

impl MockTransport {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `response`.
    pub fn with_response(self, url: impl Into<String>, response: Response) -> Self {
        self.set_reply(url, Ok(response));
        self
    }

    /// Answer `url` with a JSON body.
    pub fn with_json(self, url: impl Into<String>, status: u16, body: serde_json::Value) -> Self {
        self.with_response(url, Response::json_body(status, &body))
    }

    /// Fail requests to `url` with `error`.
    pub fn with_error(self, url: impl Into<String>, error: FetchError) -> Self {
        self.set_reply(url, Err(error));
        self
    }

    /// Replace the reply for `url`.
    pub fn set_reply(&self, url: impl Into<String>, reply: Result<Response, FetchError>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.insert(url.into(), reply);
        }
    }

    /// Requests sent so far, in order.
    pub fn requests(&self) -> Vec<RequestBuilder> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of requests sent so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for MockTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|replies| replies.get(request.url()).cloned());

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        reply.unwrap_or_else(|| Ok(Response::new(404, HashMap::new(), Vec::new())))
    }
}
