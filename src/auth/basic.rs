use super::{check_credential, AuthenticationType, Authenticator};
use crate::errors::{WatsonError, WatsonResult};
use async_trait::async_trait;
use base64::Engine;
use http::header::{HeaderValue, AUTHORIZATION};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

/// HTTP Basic authentication with a username and password
pub struct BasicAuthenticator {
    username: String,
    password: SecretString,
}

impl BasicAuthenticator {
    /// Create a new basic authenticator, rejecting empty or placeholder values
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> WatsonResult<Self> {
        let authenticator = Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        };
        authenticator.validate()?;
        Ok(authenticator)
    }

    /// The configured username
    pub fn username(&self) -> &str {
        &self.username
    }

    fn header_value(&self) -> WatsonResult<HeaderValue> {
        let credentials = format!("{}:{}", self.username, self.password.expose_secret());
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        let mut value =
            HeaderValue::from_str(&format!("Basic {}", encoded)).map_err(|e| WatsonError::Internal {
                message: format!("Invalid basic auth header: {}", e),
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> AuthenticationType {
        AuthenticationType::Basic
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> WatsonResult<()> {
        headers.insert(AUTHORIZATION, self.header_value()?);
        Ok(())
    }

    fn validate(&self) -> WatsonResult<()> {
        check_credential("username", &self.username)?;
        check_credential("password", self.password.expose_secret())
    }
}
