//! HTTP transport implementations.

use crate::errors::{api_error_from_response, WatsonError, WatsonResult};
use crate::transport::multipart::MultipartForm;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::Client;
use std::time::Duration;
use tracing::trace;
use url::Url;

/// Body of an outgoing request
#[derive(Debug, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// Encoded body; the Content-Type header is set by the builder
    Bytes(Bytes),
    /// multipart/form-data; the transport sets the Content-Type with boundary
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Copy the body unless it holds a streamed part
    pub fn try_clone(&self) -> Option<Self> {
        match self {
            RequestBody::Empty => Some(RequestBody::Empty),
            RequestBody::Bytes(bytes) => Some(RequestBody::Bytes(bytes.clone())),
            RequestBody::Multipart(form) => form.try_clone().map(RequestBody::Multipart),
        }
    }
}

/// A fully built request, ready to send
#[derive(Debug)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including query string
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: RequestBody,
}

impl HttpRequest {
    /// Copy the request for a retry. Returns `None` when the body holds a
    /// streamed part that has to be consumed by a single send.
    pub fn try_clone(&self) -> Option<Self> {
        Some(Self {
            method: self.method.clone(),
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: self.body.try_clone()?,
        })
    }
}

/// Response from HTTP transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
}

/// HTTP transport trait for sending requests to Watson services.
///
/// Implementations return `Ok` only for 2xx responses; anything else is
/// mapped to [`WatsonError::Api`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and read the whole response body
    async fn send(&self, request: HttpRequest) -> WatsonResult<TransportResponse>;
}

/// Reqwest-based HTTP transport implementation
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new reqwest transport
    pub fn new(timeout: Duration) -> WatsonResult<Self> {
        Self::with_options(timeout, false)
    }

    /// Create a new reqwest transport, optionally skipping TLS certificate checks
    pub fn with_options(timeout: Duration, disable_ssl_verification: bool) -> WatsonResult<Self> {
        let builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Duration::from_secs(60));

        #[cfg(any(feature = "rustls", feature = "native-tls"))]
        let builder = builder.danger_accept_invalid_certs(disable_ssl_verification);

        #[cfg(not(any(feature = "rustls", feature = "native-tls")))]
        let _ = disable_ssl_verification;

        let client = builder.build().map_err(|e| WatsonError::Configuration {
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self { client, timeout })
    }

    /// Create a new reqwest transport with custom client
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// The client timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> WatsonResult<TransportResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        trace!(method = %method, url = %url, "sending request");

        let mut builder = self.client.request(method, url).headers(headers);
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Bytes(bytes) => builder.body(bytes),
            RequestBody::Multipart(form) => builder.multipart(form.into_reqwest_form()?),
        };

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let response_headers = response.headers().clone();
        let body_bytes = response.bytes().await?;

        // Check for HTTP errors
        if !(200..300).contains(&status) {
            return Err(api_error_from_response(status, response_headers, &body_bytes));
        }

        Ok(TransportResponse {
            status,
            headers: response_headers,
            body: body_bytes,
        })
    }
}
