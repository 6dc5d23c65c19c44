//! Authentication for Watson services.
//!
//! Every request passes through an [`Authenticator`], which writes exactly one
//! `Authorization` header (or none, for [`NoAuthAuthenticator`]).

mod basic;
mod bearer;
mod iam;

pub use basic::BasicAuthenticator;
pub use bearer::BearerTokenAuthenticator;
pub use iam::{IamAuthenticator, IamAuthenticatorBuilder, IamTokenResponse};

use crate::config::{env_key, env_value};
use crate::errors::{WatsonError, WatsonResult};
use async_trait::async_trait;
use http::HeaderMap;
use std::str::FromStr;
use std::sync::Arc;

/// Supported authentication schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationType {
    /// HTTP Basic with username and password
    Basic,
    /// Static bearer token supplied by the caller
    BearerToken,
    /// Bearer token obtained from IBM Cloud IAM with an API key
    Iam,
    /// No Authorization header
    NoAuth,
}

impl AuthenticationType {
    /// Name used in `<SERVICE>_AUTH_TYPE`
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthenticationType::Basic => "basic",
            AuthenticationType::BearerToken => "bearerToken",
            AuthenticationType::Iam => "iam",
            AuthenticationType::NoAuth => "noAuth",
        }
    }
}

impl FromStr for AuthenticationType {
    type Err = WatsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(AuthenticationType::Basic),
            "bearertoken" => Ok(AuthenticationType::BearerToken),
            "iam" => Ok(AuthenticationType::Iam),
            "noauth" => Ok(AuthenticationType::NoAuth),
            other => Err(WatsonError::configuration(format!(
                "Unrecognized authentication type: {}",
                other
            ))),
        }
    }
}

/// Adds credentials to outgoing requests
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// The scheme this authenticator implements
    fn authentication_type(&self) -> AuthenticationType;

    /// Write the `Authorization` header, replacing any existing one
    async fn authenticate(&self, headers: &mut HeaderMap) -> WatsonResult<()>;

    /// Check the configured credentials without any I/O
    fn validate(&self) -> WatsonResult<()>;
}

/// Sends requests without credentials
#[derive(Debug, Default, Clone)]
pub struct NoAuthAuthenticator;

impl NoAuthAuthenticator {
    /// Create a new no-op authenticator
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> AuthenticationType {
        AuthenticationType::NoAuth
    }

    async fn authenticate(&self, _headers: &mut HeaderMap) -> WatsonResult<()> {
        Ok(())
    }

    fn validate(&self) -> WatsonResult<()> {
        Ok(())
    }
}

/// Rejects empty credentials and values still wrapped in `{}` or quotes,
/// which usually means a placeholder was copied verbatim.
pub(crate) fn check_credential(name: &str, value: &str) -> WatsonResult<()> {
    if value.is_empty() {
        return Err(WatsonError::configuration(format!("{} cannot be empty", name)));
    }
    let bad_first = value.starts_with('{') || value.starts_with('"');
    let bad_last = value.ends_with('}') || value.ends_with('"');
    if bad_first || bad_last {
        return Err(WatsonError::configuration(format!(
            "{} must not start or end with braces or quotes; remove them from the value",
            name
        )));
    }
    Ok(())
}

/// Build an authenticator from `<SERVICE>_*` environment variables.
///
/// # Environment Variables
///
/// - `SERVICE_AUTH_TYPE`: `basic`, `bearerToken`, `iam` or `noAuth`
///   (defaults to `iam` when `SERVICE_APIKEY` is set)
/// - `SERVICE_USERNAME`, `SERVICE_PASSWORD` for `basic`
/// - `SERVICE_BEARER_TOKEN` for `bearerToken`
/// - `SERVICE_APIKEY`, `SERVICE_AUTH_URL`, `SERVICE_CLIENT_ID`,
///   `SERVICE_CLIENT_SECRET` for `iam`
pub fn authenticator_from_env(service_name: &str) -> WatsonResult<Arc<dyn Authenticator>> {
    let auth_type = match env_value(service_name, "AUTH_TYPE") {
        Some(raw) => raw.parse::<AuthenticationType>()?,
        None if env_value(service_name, "APIKEY").is_some() => AuthenticationType::Iam,
        None => {
            return Err(WatsonError::configuration(format!(
                "No credentials found: set {} or {}",
                env_key(service_name, "AUTH_TYPE"),
                env_key(service_name, "APIKEY")
            )))
        }
    };

    let required = |suffix: &str| {
        env_value(service_name, suffix).ok_or_else(|| {
            WatsonError::configuration(format!(
                "{} is required for {} authentication",
                env_key(service_name, suffix),
                auth_type.as_str()
            ))
        })
    };

    let authenticator: Arc<dyn Authenticator> = match auth_type {
        AuthenticationType::Basic => Arc::new(BasicAuthenticator::new(
            required("USERNAME")?,
            required("PASSWORD")?,
        )?),
        AuthenticationType::BearerToken => {
            Arc::new(BearerTokenAuthenticator::new(required("BEARER_TOKEN")?)?)
        }
        AuthenticationType::Iam => {
            let mut builder = IamAuthenticator::builder().apikey(required("APIKEY")?);
            if let Some(url) = env_value(service_name, "AUTH_URL") {
                builder = builder.url(url);
            }
            if let Some(client_id) = env_value(service_name, "CLIENT_ID") {
                builder = builder.client_id(client_id);
            }
            if let Some(client_secret) = env_value(service_name, "CLIENT_SECRET") {
                builder = builder.client_secret(client_secret);
            }
            if let Some(disable) = env_value(service_name, "AUTH_DISABLE_SSL") {
                builder = builder.disable_ssl_verification(disable.eq_ignore_ascii_case("true"));
            }
            Arc::new(builder.build()?)
        }
        AuthenticationType::NoAuth => Arc::new(NoAuthAuthenticator::new()),
    };

    Ok(authenticator)
}
