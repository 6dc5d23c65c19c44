//! Shared request pipeline for all Watson services.
//!
//! A [`ServiceClient`] owns the base URL, version date, authenticator,
//! default headers and optional deadline of one service. Operation wrappers
//! ask it for a [`RequestBuilder`], fill in the operation's parameters, and
//! hand the builder back to one of the `execute_*` methods.

mod response;

pub use response::DetailedResponse;

use crate::auth::Authenticator;
use crate::config::ServiceConfig;
use crate::errors::{WatsonError, WatsonResult};
use crate::observability::redact_headers;
use crate::resilience::RetryingTransport;
use crate::transport::{HttpTransport, ReqwestTransport, RequestBuilder, TransportResponse};
use bytes::Bytes;
use http::header::{ACCEPT, USER_AGENT};
use http::Method;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, debug_span, warn, Instrument};

/// Header carrying SDK analytics for each call
pub const ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// Value of the `User-Agent` header
pub fn user_agent() -> String {
    format!("integrations-watson/{}", env!("CARGO_PKG_VERSION"))
}

/// Request pipeline shared by the operations of one service.
///
/// Cloning is cheap; clones share the transport and authenticator.
#[derive(Clone)]
pub struct ServiceClient {
    config: Arc<ServiceConfig>,
    service_version: &'static str,
    transport: Arc<dyn HttpTransport>,
    authenticator: Arc<dyn Authenticator>,
    deadline: Option<Duration>,
}

impl ServiceClient {
    /// Create a client that sends requests with reqwest.
    ///
    /// `service_version` is the API generation reported in the analytics
    /// header, e.g. `V1`.
    pub fn new(
        config: ServiceConfig,
        service_version: &'static str,
        authenticator: Arc<dyn Authenticator>,
    ) -> WatsonResult<Self> {
        let transport = Arc::new(ReqwestTransport::with_options(
            config.timeout,
            config.disable_ssl_verification,
        )?);
        Self::with_transport(config, service_version, transport, authenticator)
    }

    /// Create a client over a custom transport. Retries are layered on top
    /// when the configuration asks for them.
    pub fn with_transport(
        config: ServiceConfig,
        service_version: &'static str,
        transport: Arc<dyn HttpTransport>,
        authenticator: Arc<dyn Authenticator>,
    ) -> WatsonResult<Self> {
        authenticator.validate()?;

        let transport: Arc<dyn HttpTransport> = match &config.retry {
            Some(retry) => Arc::new(RetryingTransport::new(transport, retry.clone())),
            None => transport,
        };

        Ok(Self {
            config: Arc::new(config),
            service_version,
            transport,
            authenticator,
            deadline: None,
        })
    }

    /// A copy of this client whose calls fail with
    /// [`WatsonError::DeadlineExceeded`] once `deadline` elapses.
    pub fn with_deadline(&self, deadline: Duration) -> Self {
        let mut client = self.clone();
        client.deadline = Some(deadline);
        client
    }

    /// The deadline applied to each call, if any
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// The service configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The authenticator used for every request
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    /// The configured version date, failing if it is missing or empty
    pub fn require_version(&self) -> WatsonResult<&str> {
        match self.config.version.as_deref() {
            Some(version) if !version.is_empty() => Ok(version),
            _ => Err(WatsonError::configuration(format!(
                "version is required for service '{}'",
                self.config.service_name
            ))),
        }
    }

    /// Start a request for `path` with the SDK headers, the configured default
    /// headers and the `version` query parameter already applied.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        operation_id: &str,
    ) -> WatsonResult<RequestBuilder> {
        let analytics = format!(
            "service_name={};service_version={};operation_id={}",
            self.config.service_name, self.service_version, operation_id
        );

        let mut builder = RequestBuilder::new(method, self.config.base_url.clone(), path)
            .operation(operation_id)
            .header(ACCEPT.as_str(), "application/json")?
            .header(USER_AGENT.as_str(), user_agent())?
            .header(ANALYTICS_HEADER, analytics)?
            .header_map(&self.config.default_headers);

        if let Some(version) = &self.config.version {
            builder = builder.query("version", version.as_str());
        }
        Ok(builder)
    }

    /// Send and decode a JSON response body
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> WatsonResult<DetailedResponse<T>> {
        let response = self.execute(builder).await?;
        let result = serde_json::from_slice::<T>(&response.body).map_err(|e| {
            WatsonError::Deserialization {
                message: e.to_string(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }
        })?;

        Ok(DetailedResponse {
            status_code: response.status,
            headers: response.headers,
            result,
        })
    }

    /// Send and return the raw response body
    pub async fn execute_bytes(&self, builder: RequestBuilder) -> WatsonResult<DetailedResponse<Bytes>> {
        let response = self.execute(builder).await?;
        Ok(DetailedResponse {
            status_code: response.status,
            headers: response.headers,
            result: response.body,
        })
    }

    /// Send and discard the response body
    pub async fn execute_empty(&self, builder: RequestBuilder) -> WatsonResult<DetailedResponse<()>> {
        let response = self.execute(builder).await?;
        Ok(DetailedResponse {
            status_code: response.status,
            headers: response.headers,
            result: (),
        })
    }

    async fn execute(&self, builder: RequestBuilder) -> WatsonResult<TransportResponse> {
        let operation = builder.operation_id().unwrap_or("unknown").to_string();
        let span = debug_span!(
            "watson_request",
            service = %self.config.service_name,
            operation = %operation
        );

        with_deadline(self.deadline, self.send_authenticated(builder))
            .instrument(span)
            .await
    }

    async fn send_authenticated(&self, builder: RequestBuilder) -> WatsonResult<TransportResponse> {
        let mut request = builder.build()?;
        self.authenticator.authenticate(&mut request.headers).await?;

        debug!(
            method = %request.method,
            url = %request.url,
            headers = ?redact_headers(&request.headers),
            "sending request"
        );

        match self.transport.send(request).await {
            Ok(response) => {
                debug!(status = response.status, "received response");
                Ok(response)
            }
            Err(error) => {
                warn!(status = ?error.status_code(), error = %error, "request failed");
                Err(error)
            }
        }
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("config", &self.config)
            .field("service_version", &self.service_version)
            .field("authentication_type", &self.authenticator.authentication_type())
            .field("deadline", &self.deadline)
            .finish()
    }
}

async fn with_deadline<T, F>(deadline: Option<Duration>, call: F) -> WatsonResult<T>
where
    F: Future<Output = WatsonResult<T>>,
{
    match deadline {
        Some(deadline) => tokio::time::timeout(deadline, call)
            .await
            .map_err(|_| WatsonError::DeadlineExceeded { deadline })?,
        None => call.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BasicAuthenticator;
    use crate::mocks::{MockHttpTransport, MockResponse};
    use crate::resilience::RetryConfig;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Echo {
        value: String,
    }

    fn client(mock: &Arc<MockHttpTransport>, version: Option<&str>) -> ServiceClient {
        let mut builder = ServiceConfig::builder("test_service", "https://example.com/api")
            .header("X-Watson-Learning-Opt-Out", "true");
        if let Some(v) = version {
            builder = builder.version(v);
        }
        ServiceClient::with_transport(
            builder.build().unwrap(),
            "V1",
            mock.clone(),
            Arc::new(BasicAuthenticator::new("user1", "pass1").unwrap()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_request_headers_and_version() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(MockResponse::json(&serde_json::json!({"value": "ok"})));
        let client = client(&mock, Some("2018-03-19"));

        let builder = client
            .request(Method::GET, "/v3/classifiers/{classifier_id}", "GetClassifier")
            .unwrap()
            .path_param("classifier_id", "dogs_1477088859");
        let response: DetailedResponse<Echo> = client.execute_json(builder).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.result.value, "ok");

        let request = mock.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://example.com/api/v3/classifiers/dogs_1477088859?version=2018-03-19"
        );
        assert_eq!(request.headers.get("accept").unwrap(), "application/json");
        assert_eq!(request.headers.get("authorization").unwrap(), "Basic dXNlcjE6cGFzczE=");
        assert_eq!(request.headers.get("x-watson-learning-opt-out").unwrap(), "true");
        assert_eq!(
            request.headers.get(ANALYTICS_HEADER).unwrap(),
            "service_name=test_service;service_version=V1;operation_id=GetClassifier"
        );
        assert!(request
            .headers
            .get("user-agent")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("integrations-watson/"));
    }

    #[tokio::test]
    async fn test_caller_authorization_is_replaced() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(MockResponse::empty(200));
        let client = client(&mock, None);

        let builder = client
            .request(Method::DELETE, "/v1/classifiers/abc", "DeleteClassifier")
            .unwrap()
            .header("Authorization", "Bearer caller")
            .unwrap();
        client.execute_empty(builder).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.headers.get_all("authorization").iter().count(), 1);
        assert_eq!(request.headers.get("authorization").unwrap(), "Basic dXNlcjE6cGFzczE=");
    }

    #[tokio::test]
    async fn test_bad_json_is_deserialization_error() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(MockResponse::bytes(b"not json".to_vec(), "text/plain"));
        let client = client(&mock, None);

        let builder = client.request(Method::GET, "/v1/classifiers", "ListClassifiers").unwrap();
        let error = client.execute_json::<Echo>(builder).await.unwrap_err();
        match error {
            WatsonError::Deserialization { body, .. } => assert_eq!(body, "not json"),
            other => panic!("expected deserialization error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_bytes() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(MockResponse::bytes(vec![0xff, 0xd8, 0xff], "image/jpeg"));
        let client = client(&mock, Some("2019-02-11"));

        let builder = client.request(Method::GET, "/v4/collections/c/images/i/jpeg", "GetJpegImage").unwrap();
        let response = client.execute_bytes(builder).await.unwrap();
        assert_eq!(&response.result[..], &[0xff, 0xd8, 0xff]);
        assert_eq!(response.header("content-type"), Some("image/jpeg"));
    }

    #[tokio::test]
    async fn test_error_response() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(MockResponse::error(500, "Internal failure"));
        let client = client(&mock, None);

        let builder = client.request(Method::GET, "/v1/classifiers", "ListClassifiers").unwrap();
        let error = client.execute_json::<Echo>(builder).await.unwrap_err();
        assert_eq!(error.status_code(), Some(500));
        assert!(error.to_string().contains("Internal failure"));
    }

    #[tokio::test]
    async fn test_require_version() {
        let mock = Arc::new(MockHttpTransport::new());
        assert!(client(&mock, Some("2019-02-11")).require_version().is_ok());
        assert!(client(&mock, Some("")).require_version().is_err());
        assert!(client(&mock, None).require_version().is_err());
    }

    #[tokio::test]
    async fn test_retry_is_layered_from_config() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(MockResponse::error(503, "busy"));
        mock.add_response(MockResponse::json(&serde_json::json!({"value": "ok"})));

        let config = ServiceConfig::builder("test_service", "https://example.com/api")
            .retry(
                RetryConfig::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_jitter(0.0),
            )
            .build()
            .unwrap();
        let client = ServiceClient::with_transport(
            config,
            "V1",
            mock.clone(),
            Arc::new(BasicAuthenticator::new("user1", "pass1").unwrap()),
        )
        .unwrap();

        let builder = client.request(Method::GET, "/v1/classifiers", "ListClassifiers").unwrap();
        let response = client.execute_json::<Echo>(builder).await.unwrap();
        assert_eq!(response.result.value, "ok");
        assert_eq!(mock.get_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(
            MockResponse::json(&serde_json::json!({"value": "late"}))
                .with_delay(Duration::from_millis(100)),
        );
        let client = client(&mock, None).with_deadline(Duration::from_millis(20));

        let builder = client.request(Method::GET, "/v1/classifiers", "ListClassifiers").unwrap();
        let error = client.execute_json::<Echo>(builder).await.unwrap_err();
        assert!(matches!(
            error,
            WatsonError::DeadlineExceeded { deadline } if deadline == Duration::from_millis(20)
        ));
    }
}
