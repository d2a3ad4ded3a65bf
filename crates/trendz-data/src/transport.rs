//! Transports that put a [`RequestBuilder`] on the wire.

use async_trait::async_trait;

use crate::{FetchError, RequestBuilder, Response};

/// Sends a fully built request and buffers the response.
///
/// Transports report only transport-level failures as errors; any HTTP
/// status, including 4xx and 5xx, comes back as `Ok(Response)`.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport: Send + Sync {
    /// Send the request.
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(target_arch = "wasm32")]
pub use spin::SpinTransport;

/// Transport used by [`crate::FetchClient::new`] on this target.
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = ReqwestTransport;

/// Transport used by [`crate::FetchClient::new`] on this target.
#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = SpinTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::Transport;
    use crate::{FetchError, RequestBuilder, Response};

    /// Transport backed by a shared `reqwest::Client`.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Create a transport with a default client.
        pub fn new() -> Self {
            Self::default()
        }

        /// Wrap an existing client.
        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
                .map_err(|e| FetchError::RequestError(e.to_string()))?;
            let url = reqwest::Url::parse(&request.url)
                .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", request.url, e)))?;

            let mut outgoing = self.client.request(method, url);
            for (key, value) in &request.headers {
                outgoing = outgoing.header(key.as_str(), value.as_str());
            }
            if let Some(timeout) = request.timeout {
                outgoing = outgoing.timeout(timeout);
            }
            if let Some(body) = request.body {
                outgoing = outgoing.body(body);
            }

            let response = outgoing.send().await.map_err(map_reqwest_error)?;

            let status = response.status().as_u16();
            let headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
                .collect();
            let body = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

            Ok(Response::new(status, headers, body))
        }
    }

    fn map_reqwest_error(e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod spin {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use spin_sdk::http::{Method as SpinMethod, Request};

    use super::Transport;
    use crate::{FetchError, Method, RequestBuilder, Response};

    /// Transport using Spin's outbound HTTP.
    ///
    /// Spin does not expose per-request deadlines here, so
    /// [`RequestBuilder::timeout`] is not enforced.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SpinTransport;

    impl SpinTransport {
        /// Create the transport.
        pub fn new() -> Self {
            Self
        }
    }

    #[async_trait(?Send)]
    impl Transport for SpinTransport {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            let method = match request.method {
                Method::Get => SpinMethod::Get,
                Method::Post => SpinMethod::Post,
                Method::Put => SpinMethod::Put,
                Method::Patch => SpinMethod::Patch,
                Method::Delete => SpinMethod::Delete,
                Method::Head => SpinMethod::Head,
                Method::Options => SpinMethod::Options,
            };

            let mut builder = Request::builder();
            builder.method(method);
            builder.uri(request.url.as_str());
            for (key, value) in &request.headers {
                builder.header(key.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder.body(body);
            }
            let outgoing = builder.build();

            let response: spin_sdk::http::Response = spin_sdk::http::send(outgoing)
                .await
                .map_err(|e| FetchError::RequestError(e.to_string()))?;

            let status = *response.status();
            let headers: HashMap<String, String> = response
                .headers()
                .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
                .collect();
            let body = response.into_body();

            Ok(Response::new(status, headers, body))
        }
    }
}
