use super::{check_credential, AuthenticationType, Authenticator};
use crate::errors::{WatsonError, WatsonResult};
use async_trait::async_trait;
use http::header::{HeaderValue, AUTHORIZATION};
use http::HeaderMap;
use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};

/// Bearer authentication with a token managed by the caller.
///
/// The token can be swapped with [`set_token`](Self::set_token) when the
/// caller refreshes it out of band.
pub struct BearerTokenAuthenticator {
    token: RwLock<SecretString>,
}

impl BearerTokenAuthenticator {
    /// Create a new bearer token authenticator
    pub fn new(token: impl Into<String>) -> WatsonResult<Self> {
        let token = token.into();
        check_credential("bearer token", &token)?;
        Ok(Self {
            token: RwLock::new(SecretString::new(token)),
        })
    }

    /// Replace the token used for subsequent requests
    pub fn set_token(&self, token: impl Into<String>) -> WatsonResult<()> {
        let token = token.into();
        check_credential("bearer token", &token)?;
        *self.token.write() = SecretString::new(token);
        Ok(())
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> AuthenticationType {
        AuthenticationType::BearerToken
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> WatsonResult<()> {
        let value = format!("Bearer {}", self.token.read().expose_secret());
        let mut header = HeaderValue::from_str(&value).map_err(|e| WatsonError::Internal {
            message: format!("Invalid bearer auth header: {}", e),
        })?;
        header.set_sensitive(true);
        headers.insert(AUTHORIZATION, header);
        Ok(())
    }

    fn validate(&self) -> WatsonResult<()> {
        check_credential("bearer token", self.token.read().expose_secret())
    }
}
