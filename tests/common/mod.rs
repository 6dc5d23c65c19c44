//! Shared helpers for the WireMock integration tests.
//!
//! Every test drives the real `ReqwestTransport` against a local mock server.

#![allow(dead_code)]

use integrations_watson::{BasicAuthenticator, ServiceConfigBuilder};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, Request, Respond, ResponseTemplate};

pub const USERNAME: &str = "user1";
pub const PASSWORD: &str = "pass1";

/// `Basic base64(user1:pass1)`
pub const BASIC_AUTHORIZATION: &str = "Basic dXNlcjE6cGFzczE=";

/// Helper to start a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Point a configuration builder at the mock server
pub fn against(builder: ServiceConfigBuilder, server: &MockServer) -> ServiceConfigBuilder {
    builder.base_url(server.uri())
}

/// Basic credentials matching [`BASIC_AUTHORIZATION`]
pub fn basic_authenticator() -> Arc<BasicAuthenticator> {
    Arc::new(BasicAuthenticator::new(USERNAME, PASSWORD).unwrap())
}

/// Helper to create a mock that requires the basic credentials
pub fn mock_with_auth(method_matcher: &str, path_matcher: &str) -> MockBuilder {
    Mock::given(method(method_matcher))
        .and(path(path_matcher))
        .and(header("Authorization", BASIC_AUTHORIZATION))
}

/// Helper to create success response templates
pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Helper to create error response templates
pub fn error_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

/// All requests the server received, in order
pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

/// A request header as a string
pub fn header_value<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

/// The value of a query parameter
pub fn query_value(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// The request body as text
pub fn body_text(request: &Request) -> String {
    String::from_utf8_lossy(&request.body).into_owned()
}

/// Answers with the JSON body it received
pub struct EchoJson;

impl Respond for EchoJson {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200)
            .insert_header("Content-Type", "application/json")
            .set_body_bytes(request.body.clone())
    }
}
