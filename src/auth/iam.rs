//! IBM Cloud IAM authentication.
//!
//! Exchanges an API key for an access token at `<iam_url>/identity/token`,
//! caches it, and refreshes it once less than 20% of its lifetime remains.

use super::{check_credential, AuthenticationType, Authenticator};
use crate::config::{DEFAULT_IAM_URL, DEFAULT_TIMEOUT};
use crate::errors::{WatsonError, WatsonResult};
use crate::transport::{HttpTransport, ReqwestTransport, RequestBuilder};
use async_trait::async_trait;
use base64::Engine;
use http::header::{HeaderValue, AUTHORIZATION};
use http::{HeaderMap, Method};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const RESPONSE_TYPE: &str = "cloud_iam";
const TOKEN_PATH: &str = "/identity/token";

/// Fraction of the token lifetime that must remain for it to be reused.
const REFRESH_WINDOW: f64 = 0.2;

/// Token response from the IAM token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IamTokenResponse {
    /// The access token sent as `Bearer`
    pub access_token: String,
    /// Refresh token (unused; a new API key exchange is done instead)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Token type, normally `Bearer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Lifetime in seconds
    pub expires_in: i64,
    /// Expiry as a Unix timestamp
    pub expiration: i64,
}

struct CachedToken {
    access_token: SecretString,
    expiration: i64,
    refresh_time: i64,
}

impl CachedToken {
    fn from_response(response: IamTokenResponse) -> Self {
        let buffer = (response.expires_in as f64 * REFRESH_WINDOW) as i64;
        Self {
            access_token: SecretString::new(response.access_token),
            expiration: response.expiration,
            refresh_time: response.expiration - buffer,
        }
    }

    fn is_fresh(&self, now: i64) -> bool {
        now < self.refresh_time && now < self.expiration
    }
}

/// Authenticator that obtains bearer tokens from IBM Cloud IAM
pub struct IamAuthenticator {
    apikey: SecretString,
    url: String,
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    scope: Option<String>,
    transport: Arc<dyn HttpTransport>,
    token: Mutex<Option<CachedToken>>,
}

impl IamAuthenticator {
    /// Creates a new builder
    pub fn builder() -> IamAuthenticatorBuilder {
        IamAuthenticatorBuilder::default()
    }

    /// Create an authenticator for an API key using the default IAM endpoint
    pub fn new(apikey: impl Into<String>) -> WatsonResult<Self> {
        Self::builder().apikey(apikey).build()
    }

    /// The IAM endpoint host
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Return a valid access token, fetching a new one when needed.
    ///
    /// The cache lock is held across the fetch so concurrent callers wait for
    /// one refresh instead of each requesting a token.
    pub async fn access_token(&self) -> WatsonResult<String> {
        let mut cached = self.token.lock().await;
        let now = chrono::Utc::now().timestamp();

        if let Some(token) = cached.as_ref() {
            if token.is_fresh(now) {
                return Ok(token.access_token.expose_secret().clone());
            }
        }

        debug!(url = %self.url, "requesting IAM access token");
        let response = self.request_token().await?;
        let token = CachedToken::from_response(response);
        let access_token = token.access_token.expose_secret().clone();
        *cached = Some(token);
        Ok(access_token)
    }

    async fn request_token(&self) -> WatsonResult<IamTokenResponse> {
        let body = {
            let mut form = url::form_urlencoded::Serializer::new(String::new());
            form.append_pair("grant_type", GRANT_TYPE)
                .append_pair("apikey", self.apikey.expose_secret())
                .append_pair("response_type", RESPONSE_TYPE);
            if let Some(scope) = &self.scope {
                form.append_pair("scope", scope);
            }
            form.finish()
        };

        let mut builder = RequestBuilder::new(Method::POST, Url::parse(&self.url)?, TOKEN_PATH)
            .header("Accept", "application/json")?
            .text(body, "application/x-www-form-urlencoded")?;

        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            let credentials = format!("{}:{}", id, secret.expose_secret());
            let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
            builder = builder.header(AUTHORIZATION.as_str(), format!("Basic {}", encoded))?;
        }

        let response = self
            .transport
            .send(builder.build()?)
            .await
            .map_err(|e| WatsonError::Authentication {
                message: format!("IAM token request failed: {}", e),
            })?;

        serde_json::from_slice::<IamTokenResponse>(&response.body).map_err(|e| {
            WatsonError::Authentication {
                message: format!("Invalid IAM token response: {}", e),
            }
        })
    }
}

impl std::fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("apikey", &"[REDACTED]")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .finish()
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    fn authentication_type(&self) -> AuthenticationType {
        AuthenticationType::Iam
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> WatsonResult<()> {
        let token = self.access_token().await?;
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                WatsonError::Authentication {
                    message: format!("IAM returned an unusable token: {}", e),
                }
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    fn validate(&self) -> WatsonResult<()> {
        check_credential("apikey", self.apikey.expose_secret())?;
        match (&self.client_id, &self.client_secret) {
            (Some(_), None) | (None, Some(_)) => Err(WatsonError::configuration(
                "client_id and client_secret must be set together",
            )),
            _ => Ok(()),
        }
    }
}

/// Builder for [`IamAuthenticator`].
#[derive(Default)]
pub struct IamAuthenticatorBuilder {
    apikey: Option<String>,
    url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    disable_ssl_verification: bool,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl IamAuthenticatorBuilder {
    /// Sets the API key.
    pub fn apikey(mut self, apikey: impl Into<String>) -> Self {
        self.apikey = Some(apikey.into());
        self
    }

    /// Sets the IAM endpoint host (default `https://iam.cloud.ibm.com`).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the client id sent as Basic auth on token requests.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the client secret sent as Basic auth on token requests.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets the token scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Disables TLS certificate checks on token requests.
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Uses a custom transport for token requests.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the authenticator.
    pub fn build(self) -> WatsonResult<IamAuthenticator> {
        let apikey = self
            .apikey
            .ok_or_else(|| WatsonError::configuration("apikey is required"))?;

        let url = self
            .url
            .unwrap_or_else(|| DEFAULT_IAM_URL.to_string())
            .trim_end_matches('/')
            .trim_end_matches(TOKEN_PATH)
            .to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(WatsonError::configuration(
                "IAM URL must start with http:// or https://",
            ));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_options(
                DEFAULT_TIMEOUT,
                self.disable_ssl_verification,
            )?),
        };

        let authenticator = IamAuthenticator {
            apikey: SecretString::new(apikey),
            url,
            client_id: self.client_id,
            client_secret: self.client_secret.map(SecretString::new),
            scope: self.scope,
            transport,
            token: Mutex::new(None),
        };
        authenticator.validate()?;
        Ok(authenticator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockHttpTransport, MockResponse};

    fn token_response(token: &str, expires_in: i64, expires_after: i64) -> MockResponse {
        let now = chrono::Utc::now().timestamp();
        MockResponse::json(&IamTokenResponse {
            access_token: token.to_string(),
            refresh_token: Some("refresh".to_string()),
            token_type: Some("Bearer".to_string()),
            expires_in,
            expiration: now + expires_after,
        })
    }

    fn authenticator(mock: &Arc<MockHttpTransport>) -> IamAuthenticator {
        IamAuthenticator::builder()
            .apikey("my-api-key")
            .url("https://iam.example.com")
            .transport(mock.clone())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_token_is_fetched_and_cached() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(token_response("token-1", 3600, 3600));
        let auth = authenticator(&mock);

        let mut headers = HeaderMap::new();
        auth.authenticate(&mut headers).await.unwrap();
        auth.authenticate(&mut headers).await.unwrap();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer token-1");
        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].url, "https://iam.example.com/identity/token");

        let body = String::from_utf8(requests[0].body.clone().unwrap()).unwrap();
        assert!(body.contains("grant_type=urn%3Aibm%3Aparams%3Aoauth%3Agrant-type%3Aapikey"));
        assert!(body.contains("apikey=my-api-key"));
        assert!(body.contains("response_type=cloud_iam"));
        assert!(requests[0].headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_token_refreshed_inside_refresh_window() {
        let mock = Arc::new(MockHttpTransport::new());
        // 100s left of a 3600s lifetime is under the 20% window.
        mock.add_response(token_response("token-1", 3600, 100));
        mock.add_response(token_response("token-2", 3600, 3600));
        let auth = authenticator(&mock);

        assert_eq!(auth.access_token().await.unwrap(), "token-1");
        assert_eq!(auth.access_token().await.unwrap(), "token-2");
        assert_eq!(auth.access_token().await.unwrap(), "token-2");
        assert_eq!(mock.get_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_client_credentials_sent_as_basic() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(token_response("token-1", 3600, 3600));
        let auth = IamAuthenticator::builder()
            .apikey("my-api-key")
            .client_id("bx")
            .client_secret("bx")
            .transport(mock.clone())
            .build()
            .unwrap();

        auth.access_token().await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.url, "https://iam.cloud.ibm.com/identity/token");
        assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Basic Yng6Yng=");
        assert_eq!(
            request.headers.get("content-type").unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert!(request.body.is_some());
    }

    #[tokio::test]
    async fn test_token_failure_is_authentication_error() {
        let mock = Arc::new(MockHttpTransport::new());
        mock.add_response(MockResponse::error(400, "Provided API key could not be found"));
        let auth = authenticator(&mock);

        let mut headers = HeaderMap::new();
        let error = auth.authenticate(&mut headers).await.unwrap_err();
        match error {
            WatsonError::Authentication { message } => {
                assert!(message.contains("Provided API key could not be found"))
            }
            other => panic!("expected authentication error, got {:?}", other),
        }
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_token_future_is_send() {
        fn assert_send<T: Send>(_: T) {}
        let authenticator = IamAuthenticator::new("my-api-key").unwrap();
        assert_send(authenticator.access_token());
        let mut headers = HeaderMap::new();
        assert_send(authenticator.authenticate(&mut headers));
    }

    #[test]
    fn test_builder_validation() {
        assert!(IamAuthenticator::builder().build().is_err());
        assert!(IamAuthenticator::new("").is_err());
        assert!(IamAuthenticator::new("{apikey}").is_err());
        assert!(IamAuthenticator::builder()
            .apikey("key")
            .client_id("only-id")
            .build()
            .is_err());
        assert!(IamAuthenticator::builder()
            .apikey("key")
            .url("iam.cloud.ibm.com")
            .build()
            .is_err());
    }

    #[test]
    fn test_url_normalized() {
        let auth = IamAuthenticator::builder()
            .apikey("key")
            .url("https://iam.example.com/identity/token/")
            .build()
            .unwrap();
        assert_eq!(auth.url(), "https://iam.example.com");
    }
}
