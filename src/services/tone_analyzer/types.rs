//! Types for Tone Analyzer v3.

use serde::{Deserialize, Serialize};

/// Plain text input for `tone`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToneInput {
    /// The input content to analyze
    pub text: String,
}

impl ToneInput {
    /// Wrap the text to analyze
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Content to analyze with `tone`
#[derive(Debug, Clone, PartialEq)]
pub enum ToneContent {
    /// Sent as `application/json`
    Json(ToneInput),
    /// Sent as `text/plain`
    Text(String),
    /// Sent as `text/html`
    Html(String),
}

impl ToneContent {
    /// Content type of the request body
    pub fn content_type(&self) -> &'static str {
        match self {
            ToneContent::Json(_) => "application/json",
            ToneContent::Text(_) => "text/plain",
            ToneContent::Html(_) => "text/html",
        }
    }
}

/// One utterance in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Utterance {
    /// An utterance contributed by a user in the conversation
    pub text: String,
    /// A string that identifies the user who contributed the utterance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Utterance {
    /// Create an utterance
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user: None,
        }
    }

    /// Attribute the utterance to a user
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// Request payload for `tone_chat`
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ToneChatInput<'a> {
    pub utterances: &'a [Utterance],
}

/// The score for a tone from the input content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToneScore {
    /// The score for the tone, in the range of 0.5 to 1
    pub score: f64,
    /// The unique, non-localized identifier of the tone, e.g. `joy`
    pub tone_id: String,
    /// The user-visible, localized name of the tone
    pub tone_name: String,
}

/// The category for a tone from the input content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToneCategory {
    /// Scores for the tones in the category
    #[serde(default)]
    pub tones: Vec<ToneScore>,
    /// The unique, non-localized identifier of the category
    pub category_id: String,
    /// The user-visible, localized name of the category
    pub category_name: String,
}

/// Results of the analysis for the full input content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentAnalysis {
    /// Tones whose scores are at least 0.5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tones: Option<Vec<ToneScore>>,
    /// Results for each category of tones, returned by `tones=...` with `2016-05-19`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_categories: Option<Vec<ToneCategory>>,
    /// A warning about the input, e.g. that it exceeded 128 KB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Results of the analysis for one sentence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentenceAnalysis {
    /// The unique identifier of a sentence of the input content
    pub sentence_id: i64,
    /// The text of the input sentence
    pub text: String,
    /// Tones whose scores are at least 0.5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tones: Option<Vec<ToneScore>>,
    /// Results for each category of tones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_categories: Option<Vec<ToneCategory>>,
    /// Offset of the first character of the sentence in the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_from: Option<i64>,
    /// Offset of the last character of the sentence in the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_to: Option<i64>,
}

/// The tone analysis results
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToneAnalysis {
    /// Results for the full input content
    pub document_tone: DocumentAnalysis,
    /// Results for each sentence, when sentence-level analysis is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentences_tone: Option<Vec<SentenceAnalysis>>,
}

/// The score for an utterance from the input content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToneChatScore {
    /// The score for the tone, in the range of 0.5 to 1
    pub score: f64,
    /// The unique, non-localized identifier of the tone, e.g. `excited`
    pub tone_id: String,
    /// The user-visible, localized name of the tone
    pub tone_name: String,
}

/// Results for one utterance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UtteranceAnalysis {
    /// The unique identifier of the utterance, zero-based
    pub utterance_id: i64,
    /// The text of the utterance
    pub utterance_text: String,
    /// Tones whose scores are at least 0.5
    #[serde(default)]
    pub tones: Vec<ToneChatScore>,
    /// Why the utterance could not be analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The results of the analysis for the utterances of the input content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UtteranceAnalyses {
    /// Results for each utterance
    #[serde(default)]
    pub utterances_tone: Vec<UtteranceAnalysis>,
    /// A warning about the input, e.g. that it exceeded 50 utterances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
