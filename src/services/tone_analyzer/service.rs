//! Tone Analyzer v3 service implementation.

use super::options::{ToneChatOptions, ToneOptions};
use super::types::{ToneAnalysis, ToneChatInput, ToneContent, UtteranceAnalyses};
use super::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL, SERVICE_VERSION};
use crate::auth::{authenticator_from_env, Authenticator};
use crate::client::{DetailedResponse, ServiceClient};
use crate::config::{ServiceConfig, ServiceConfigBuilder};
use crate::errors::WatsonResult;
use crate::services::required;
use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use std::time::Duration;

/// Tone Analyzer operations
#[async_trait]
pub trait ToneAnalyzerService: Send + Sync {
    /// Analyze general tone of a document and, by default, of its sentences
    async fn tone(&self, options: ToneOptions) -> WatsonResult<DetailedResponse<ToneAnalysis>>;

    /// Analyze customer-engagement tone of the utterances in a conversation
    async fn tone_chat(&self, options: ToneChatOptions) -> WatsonResult<DetailedResponse<UtteranceAnalyses>>;
}

/// Client for Tone Analyzer v3
#[derive(Clone, Debug)]
pub struct ToneAnalyzerV3 {
    client: ServiceClient,
}

impl ToneAnalyzerV3 {
    /// Configuration builder preset with this service's name, URL and version date
    pub fn config_builder(version: impl Into<String>) -> ServiceConfigBuilder {
        ServiceConfig::builder(DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL).version(version)
    }

    /// Create a new client. The configuration must carry a version date.
    pub fn new(config: ServiceConfig, authenticator: Arc<dyn Authenticator>) -> WatsonResult<Self> {
        Self::from_client(ServiceClient::new(config, SERVICE_VERSION, authenticator)?)
    }

    /// Create a client from `TONE_ANALYZER_*` environment variables
    pub fn from_env(version: impl Into<String>) -> WatsonResult<Self> {
        let config = Self::config_builder(version).apply_env()?.build()?;
        let authenticator = authenticator_from_env(DEFAULT_SERVICE_NAME)?;
        Self::new(config, authenticator)
    }

    /// Wrap an existing service client
    pub fn from_client(client: ServiceClient) -> WatsonResult<Self> {
        client.require_version()?;
        Ok(Self { client })
    }

    /// A copy whose calls fail once `deadline` elapses
    pub fn with_deadline(&self, deadline: Duration) -> Self {
        Self {
            client: self.client.with_deadline(deadline),
        }
    }

    /// The underlying service client
    pub fn client(&self) -> &ServiceClient {
        &self.client
    }
}

#[async_trait]
impl ToneAnalyzerService for ToneAnalyzerV3 {
    async fn tone(&self, options: ToneOptions) -> WatsonResult<DetailedResponse<ToneAnalysis>> {
        options.validate()?;
        let content = required(options.tone_input, "tone_input")?;

        let builder = self
            .client
            .request(Method::POST, "/v3/tone", "Tone")?
            .query_opt("sentences", options.sentences)
            .query_list("tones", options.tones.as_deref())
            .header_opt("Content-Language", options.content_language.as_deref())?
            .header_opt("Accept-Language", options.accept_language.as_deref())?;

        let content_type = content.content_type();
        let builder = match content {
            ToneContent::Json(input) => builder.json(&input)?,
            ToneContent::Text(body) | ToneContent::Html(body) => builder.text(body, content_type)?,
        }
        .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn tone_chat(&self, options: ToneChatOptions) -> WatsonResult<DetailedResponse<UtteranceAnalyses>> {
        options.validate()?;
        let utterances = required(options.utterances, "utterances")?;

        let builder = self
            .client
            .request(Method::POST, "/v3/tone_chat", "ToneChat")?
            .header_opt("Content-Language", options.content_language.as_deref())?
            .header_opt("Accept-Language", options.accept_language.as_deref())?
            .json(&ToneChatInput {
                utterances: &utterances,
            })?
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WatsonError;
    use crate::mocks::{MockHttpTransport, MockResponse, MockServiceBuilder};
    use crate::services::tone_analyzer::Utterance;
    use pretty_assertions::assert_eq;

    const VERSION: &str = "2017-09-21";

    fn service(responses: Vec<MockResponse>) -> (ToneAnalyzerV3, Arc<MockHttpTransport>) {
        let mut builder = MockServiceBuilder::new().with_version(VERSION);
        for response in responses {
            builder = builder.with_response(response);
        }
        builder
            .build(DEFAULT_SERVICE_NAME, SERVICE_VERSION, ToneAnalyzerV3::from_client)
            .unwrap()
    }

    fn analysis_json() -> serde_json::Value {
        serde_json::json!({
            "document_tone": {"tones": [{"score": 0.6165, "tone_id": "sadness", "tone_name": "Sadness"}]}
        })
    }

    #[tokio::test]
    async fn test_tone_json() {
        let (service, transport) = service(vec![MockResponse::json(&analysis_json())]);

        let response = service
            .tone(
                ToneOptions::json("Team, I know that times are tough!")
                    .with_sentences(false)
                    .with_tones(vec!["emotion".to_string(), "language".to_string()])
                    .with_content_language("en")
                    .with_accept_language("fr"),
            )
            .await
            .unwrap();

        assert_eq!(
            response.result.document_tone.tones.unwrap()[0].tone_id,
            "sadness"
        );
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path(), "/api/v3/tone");
        assert_eq!(
            request.query_pairs(),
            vec![
                ("version".to_string(), VERSION.to_string()),
                ("sentences".to_string(), "false".to_string()),
                ("tones".to_string(), "emotion,language".to_string()),
            ]
        );
        assert_eq!(request.headers.get("content-type").unwrap(), "application/json");
        assert_eq!(request.headers.get("content-language").unwrap(), "en");
        assert_eq!(request.headers.get("accept-language").unwrap(), "fr");
        assert_eq!(
            request.json().unwrap(),
            serde_json::json!({"text": "Team, I know that times are tough!"})
        );
    }

    #[tokio::test]
    async fn test_tone_plain_text_and_html() {
        let (service, transport) = service(vec![
            MockResponse::json(&analysis_json()),
            MockResponse::json(&analysis_json()),
        ]);

        service.tone(ToneOptions::text("I am happy")).await.unwrap();
        service.tone(ToneOptions::html("<p>I am happy</p>")).await.unwrap();

        let requests = transport.get_requests();
        assert_eq!(requests[0].headers.get("content-type").unwrap(), "text/plain");
        assert_eq!(requests[0].body.as_deref(), Some(&b"I am happy"[..]));
        assert_eq!(requests[1].headers.get("content-type").unwrap(), "text/html");
        assert_eq!(requests[1].body.as_deref(), Some(&b"<p>I am happy</p>"[..]));
        assert!(requests[1].query("sentences").is_none());
    }

    #[tokio::test]
    async fn test_tone_chat() {
        let (service, transport) = service(vec![MockResponse::json(&serde_json::json!({
            "utterances_tone": [{
                "utterance_id": 0,
                "utterance_text": "Hello, I'm having a problem with your product.",
                "tones": [{"score": 0.686361, "tone_id": "polite", "tone_name": "Polite"}]
            }]
        }))]);

        let response = service
            .tone_chat(ToneChatOptions::new(vec![
                Utterance::new("Hello, I'm having a problem with your product.").with_user("customer"),
                Utterance::new("OK, let me know what's going on, please.").with_user("agent"),
            ]))
            .await
            .unwrap();

        assert_eq!(response.result.utterances_tone[0].tones[0].tone_id, "polite");
        let request = transport.last_request().unwrap();
        assert_eq!(request.path(), "/api/v3/tone_chat");
        assert_eq!(
            request.json().unwrap()["utterances"][1],
            serde_json::json!({"text": "OK, let me know what's going on, please.", "user": "agent"})
        );
    }

    #[tokio::test]
    async fn test_tone_chat_validation_sends_nothing() {
        let (service, transport) = service(vec![]);

        let error = service.tone_chat(ToneChatOptions::default()).await.unwrap_err();

        assert!(matches!(error, WatsonError::Validation { .. }));
        assert!(transport.get_requests().is_empty());
    }
}
