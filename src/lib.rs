//! # IBM Watson API Client
//!
//! Typed async clients for IBM Watson services.
//!
//! ## Services
//!
//! - Natural Language Classifier v1: [`NaturalLanguageClassifierV1`]
//! - Visual Recognition v3: [`VisualRecognitionV3`]
//! - Visual Recognition v4: [`VisualRecognitionV4`]
//! - Tone Analyzer v3: [`ToneAnalyzerV3`]
//!
//! ## Features
//!
//! - One async method per endpoint, each taking a typed options struct
//! - Basic, bearer-token and IAM authentication, configurable from the environment
//! - Multipart uploads from memory or streamed from any `AsyncRead`
//! - Per-call deadlines and opt-in transport retries
//! - Structured logging with `tracing`; credentials are never logged
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_watson::services::natural_language_classifier::{
//!     ClassifyOptions, NaturalLanguageClassifierService,
//! };
//! use integrations_watson::{IamAuthenticator, NaturalLanguageClassifierV1};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NaturalLanguageClassifierV1::config_builder().build()?;
//!     let authenticator = Arc::new(IamAuthenticator::new("my-api-key")?);
//!     let service = NaturalLanguageClassifierV1::new(config, authenticator)?;
//!
//!     // Or from NATURAL_LANGUAGE_CLASSIFIER_* environment variables
//!     // let service = NaturalLanguageClassifierV1::from_env()?;
//!
//!     let response = service
//!         .classify(ClassifyOptions::new("10D41B-nlc-1", "How hot will it be today?"))
//!         .await?;
//!     println!("{:?}", response.result.top_class);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `auth` - Authenticators and environment-based selection
//! - `client` - Shared request pipeline and response envelope
//! - `config` - Service configuration and builder
//! - `errors` - Error types and taxonomy
//! - `observability` - Logging setup and header redaction
//! - `resilience` - Opt-in retry transport
//! - `services` - Service implementations
//! - `transport` - HTTP transport, request builder and multipart bodies

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod resilience;
pub mod services;
pub mod transport;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use auth::{
    authenticator_from_env, AuthenticationType, Authenticator, BasicAuthenticator,
    BearerTokenAuthenticator, IamAuthenticator, NoAuthAuthenticator,
};
pub use client::{DetailedResponse, ServiceClient};
pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use errors::{ErrorCategory, ValidationDetail, WatsonError, WatsonResult};
pub use observability::{init_logging, LogFormat, LogLevel, LoggingConfig};
pub use resilience::{RetryConfig, RetryingTransport};
pub use transport::{FileData, HttpTransport, MultipartForm, ReqwestTransport};

pub use services::natural_language_classifier::{
    NaturalLanguageClassifierService, NaturalLanguageClassifierV1,
};
pub use services::tone_analyzer::{ToneAnalyzerService, ToneAnalyzerV3};
pub use services::visual_recognition_v3::{VisualRecognitionV3, VisualRecognitionV3Service};
pub use services::visual_recognition_v4::{VisualRecognitionV4, VisualRecognitionV4Service};
