//! Mock implementations for testing.
//!
//! [`MockHttpTransport`] replays queued responses and records every request,
//! so service operations can be exercised without a network.

use crate::auth::{AuthenticationType, Authenticator};
use crate::client::ServiceClient;
use crate::config::ServiceConfig;
use crate::errors::{api_error_from_response, WatsonError, WatsonResult};
use crate::transport::{FormPart, HttpRequest, HttpTransport, PartData, RequestBody, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, Method};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<MockRequest>>,
}

/// A mock response to return
#[derive(Clone)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
    /// Response headers
    pub headers: HeaderMap,
    /// Error returned instead of a response
    pub failure: Option<WatsonError>,
    /// Delay before answering
    pub delay: Option<Duration>,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            status: 200,
            body: serde_json::to_vec(data).unwrap_or_default(),
            headers,
            failure: None,
            delay: None,
        }
    }

    /// Create a successful binary response
    pub fn bytes(data: impl Into<Vec<u8>>, content_type: &'static str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        Self {
            status: 200,
            body: data.into(),
            headers,
            failure: None,
            delay: None,
        }
    }

    /// Create a response with no body
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            headers: HeaderMap::new(),
            failure: None,
            delay: None,
        }
    }

    /// Create an error response in the shape Watson services use
    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({
            "code": status,
            "error": message
        });
        Self {
            status,
            body: serde_json::to_vec(&body).unwrap_or_default(),
            headers: HeaderMap::new(),
            failure: None,
            delay: None,
        }
    }

    /// Fail the request with the given error instead of responding
    pub fn failure(error: WatsonError) -> Self {
        Self {
            failure: Some(error),
            ..Self::empty(0)
        }
    }

    /// Change the status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a response header
    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.insert(name, HeaderValue::from_static(value));
        self
    }

    /// Wait before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A recorded multipart part
#[derive(Debug, Clone)]
pub struct RecordedPart {
    /// Field name
    pub name: String,
    /// Filename, for file parts
    pub filename: Option<String>,
    /// Content type, for file parts
    pub content_type: Option<String>,
    /// Part contents; `None` for streamed parts
    pub value: Option<Vec<u8>>,
}

impl RecordedPart {
    /// Part contents as UTF-8 text
    pub fn text(&self) -> Option<String> {
        self.value
            .as_ref()
            .map(|v| String::from_utf8_lossy(v).into_owned())
    }
}

/// A recorded request
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// HTTP method
    pub method: Method,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body, for non-multipart requests
    pub body: Option<Vec<u8>>,
    /// Multipart parts, in order
    pub parts: Vec<RecordedPart>,
}

impl MockRequest {
    /// URL path without the query string
    pub fn path(&self) -> String {
        url::Url::parse(&self.url)
            .map(|u| u.path().to_string())
            .unwrap_or_default()
    }

    /// Decoded query parameters
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        url::Url::parse(&self.url)
            .map(|u| u.query_pairs().into_owned().collect())
            .unwrap_or_default()
    }

    /// First value of a query parameter
    pub fn query(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Body parsed as JSON
    pub fn json(&self) -> Option<serde_json::Value> {
        self.body
            .as_ref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }

    /// All parts with the given field name
    pub fn parts_named(&self, name: &str) -> Vec<&RecordedPart> {
        self.parts.iter().filter(|p| p.name == name).collect()
    }
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Add a response to return
    pub fn add_response(&self, response: MockResponse) {
        self.responses.lock().push_back(response);
    }

    /// Get recorded requests
    pub fn get_requests(&self) -> Vec<MockRequest> {
        self.requests.lock().clone()
    }

    /// Get the last request
    pub fn last_request(&self) -> Option<MockRequest> {
        self.requests.lock().last().cloned()
    }

    fn record(request: HttpRequest) -> MockRequest {
        let (body, parts) = match request.body {
            RequestBody::Empty => (None, Vec::new()),
            RequestBody::Bytes(bytes) => (Some(bytes.to_vec()), Vec::new()),
            RequestBody::Multipart(form) => {
                let parts = form
                    .parts()
                    .iter()
                    .map(|part| match part {
                        FormPart::Text { name, value } => RecordedPart {
                            name: name.clone(),
                            filename: None,
                            content_type: None,
                            value: Some(value.clone().into_bytes()),
                        },
                        FormPart::File {
                            name,
                            filename,
                            content_type,
                            data,
                        } => RecordedPart {
                            name: name.clone(),
                            filename: Some(filename.clone()),
                            content_type: Some(content_type.clone()),
                            value: match data {
                                PartData::Bytes(bytes) => Some(bytes.to_vec()),
                                PartData::Reader(_) => None,
                            },
                        },
                    })
                    .collect();
                (None, parts)
            }
        };

        MockRequest {
            method: request.method,
            url: request.url.to_string(),
            headers: request.headers,
            body,
            parts,
        }
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> WatsonResult<TransportResponse> {
        // Record the request
        self.requests.lock().push(Self::record(request));

        // Return the next response
        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| MockResponse::error(500, "No mock response configured"));

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(failure) = response.failure {
            return Err(failure);
        }

        let body = Bytes::from(response.body);
        if !(200..300).contains(&response.status) {
            return Err(api_error_from_response(response.status, response.headers, &body));
        }

        Ok(TransportResponse {
            status: response.status,
            headers: response.headers,
            body,
        })
    }
}

/// Mock authenticator that writes a fixed bearer token
#[derive(Debug, Default)]
pub struct MockAuthenticator;

impl MockAuthenticator {
    /// Create a new mock authenticator
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    fn authentication_type(&self) -> AuthenticationType {
        AuthenticationType::BearerToken
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> WatsonResult<()> {
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer mock-token"));
        Ok(())
    }

    fn validate(&self) -> WatsonResult<()> {
        Ok(())
    }
}

/// Builder for services backed by a [`MockHttpTransport`]
pub struct MockServiceBuilder {
    transport: Arc<MockHttpTransport>,
    auth: Arc<MockAuthenticator>,
    version: Option<String>,
}

impl MockServiceBuilder {
    /// Create a new mock service builder
    pub fn new() -> Self {
        Self {
            transport: Arc::new(MockHttpTransport::new()),
            auth: Arc::new(MockAuthenticator::new()),
            version: None,
        }
    }

    /// Set the version date
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Add a mock response
    pub fn with_response(self, response: MockResponse) -> Self {
        self.transport.add_response(response);
        self
    }

    /// Build a service from a mock-backed [`ServiceClient`]
    pub fn build<S, F>(
        self,
        service_name: &str,
        service_version: &'static str,
        factory: F,
    ) -> WatsonResult<(S, Arc<MockHttpTransport>)>
    where
        F: FnOnce(ServiceClient) -> WatsonResult<S>,
    {
        let mut config = ServiceConfig::builder(service_name, "https://watson.test/api");
        if let Some(version) = self.version {
            config = config.version(version);
        }
        let client = ServiceClient::with_transport(
            config.build()?,
            service_version,
            self.transport.clone() as Arc<dyn HttpTransport>,
            self.auth as Arc<dyn Authenticator>,
        )?;
        Ok((factory(client)?, self.transport))
    }
}

impl Default for MockServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{FileData, MultipartForm};
    use url::Url;

    #[tokio::test]
    async fn test_mock_transport() {
        let transport = MockHttpTransport::new();
        transport.add_response(MockResponse::json(&serde_json::json!({"classifier_id": "xxx"})));

        let response = transport
            .send(HttpRequest {
                method: Method::POST,
                url: Url::parse("https://watson.test/api/v1/classifiers/a/classify?x=1").unwrap(),
                headers: HeaderMap::new(),
                body: RequestBody::Bytes(Bytes::from(r#"{"text": "Hi"}"#)),
            })
            .await
            .unwrap();

        assert_eq!(response.status, 200);

        let requests = transport.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path(), "/api/v1/classifiers/a/classify");
        assert_eq!(requests[0].query("x").as_deref(), Some("1"));
        assert_eq!(requests[0].json().unwrap()["text"], "Hi");
    }

    #[tokio::test]
    async fn test_mock_transport_records_parts_and_maps_errors() {
        let transport = MockHttpTransport::new();
        transport.add_response(MockResponse::error(404, "Not found"));

        let form = MultipartForm::new()
            .text("name", "dogs")
            .file("beagle_positive_examples", FileData::from_bytes("zip"), "beagle");
        let error = transport
            .send(HttpRequest {
                method: Method::POST,
                url: Url::parse("https://watson.test/api/v3/classifiers").unwrap(),
                headers: HeaderMap::new(),
                body: RequestBody::Multipart(form),
            })
            .await
            .unwrap_err();

        assert_eq!(error.status_code(), Some(404));
        let request = transport.last_request().unwrap();
        assert_eq!(request.parts.len(), 2);
        assert_eq!(request.parts_named("name")[0].text().as_deref(), Some("dogs"));
        assert_eq!(
            request.parts_named("beagle_positive_examples")[0].filename.as_deref(),
            Some("beagle")
        );
    }

    #[tokio::test]
    async fn test_mock_authenticator() {
        let auth = MockAuthenticator::new();
        let mut headers = HeaderMap::new();
        auth.authenticate(&mut headers).await.unwrap();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer mock-token");
        assert!(auth.validate().is_ok());
    }
}
