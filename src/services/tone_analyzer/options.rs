//! Options for Tone Analyzer v3 operations.

use super::types::{ToneContent, ToneInput, Utterance};
use crate::errors::{RequiredFields, WatsonResult};
use std::collections::BTreeMap;

/// Options for `tone`
#[derive(Debug, Clone, Default)]
pub struct ToneOptions {
    /// Content to analyze
    pub tone_input: Option<ToneContent>,
    /// Set to `false` to skip sentence-level analysis
    pub sentences: Option<bool>,
    /// Tones to return when using the `2016-05-19` version: `emotion`, `language`, `social`
    pub tones: Option<Vec<String>>,
    /// Language of the input content, e.g. `en` or `fr`
    pub content_language: Option<String>,
    /// Language of the returned tone names
    pub accept_language: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ToneOptions {
    /// Create options with the required content set
    pub fn new(tone_input: ToneContent) -> Self {
        Self {
            tone_input: Some(tone_input),
            ..Default::default()
        }
    }

    /// Analyze text sent as a JSON document
    pub fn json(text: impl Into<String>) -> Self {
        Self::new(ToneContent::Json(ToneInput::new(text)))
    }

    /// Analyze text sent as `text/plain`
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ToneContent::Text(text.into()))
    }

    /// Analyze HTML sent as `text/html`
    pub fn html(html: impl Into<String>) -> Self {
        Self::new(ToneContent::Html(html.into()))
    }

    /// Turn sentence-level analysis on or off
    pub fn with_sentences(mut self, sentences: bool) -> Self {
        self.sentences = Some(sentences);
        self
    }

    /// Restrict the returned tones
    pub fn with_tones(mut self, tones: Vec<String>) -> Self {
        self.tones = Some(tones);
        self
    }

    /// Set the input language
    pub fn with_content_language(mut self, content_language: impl Into<String>) -> Self {
        self.content_language = Some(content_language.into());
        self
    }

    /// Set the output language
    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("ToneOptions")
            .value("tone_input", &self.tone_input)
            .finish()
    }
}

/// Options for `tone_chat`
#[derive(Debug, Clone, Default)]
pub struct ToneChatOptions {
    /// Utterances to analyze
    pub utterances: Option<Vec<Utterance>>,
    /// Language of the input content; only `en` is supported
    pub content_language: Option<String>,
    /// Language of the returned tone names
    pub accept_language: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ToneChatOptions {
    /// Create options with the required fields set
    pub fn new(utterances: Vec<Utterance>) -> Self {
        Self {
            utterances: Some(utterances),
            ..Default::default()
        }
    }

    /// Set the input language
    pub fn with_content_language(mut self, content_language: impl Into<String>) -> Self {
        self.content_language = Some(content_language.into());
        self
    }

    /// Set the output language
    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("ToneChatOptions")
            .list("utterances", &self.utterances)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_requires_input() {
        assert!(ToneOptions::default().validate().is_err());
        assert!(ToneOptions::text("I am happy").validate().is_ok());
    }

    #[test]
    fn test_tone_chat_requires_utterances() {
        assert!(ToneChatOptions::new(vec![]).validate().is_err());
        assert!(ToneChatOptions::new(vec![Utterance::new("Hello")]).validate().is_ok());
    }
}
