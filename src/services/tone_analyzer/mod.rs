//! Tone Analyzer v3.
//!
//! Detects emotional and language tones in written text, and
//! customer-engagement tones in conversations.

mod options;
mod service;
mod types;

pub use options::{ToneChatOptions, ToneOptions};
pub use service::{ToneAnalyzerService, ToneAnalyzerV3};
pub use types::{
    DocumentAnalysis, SentenceAnalysis, ToneAnalysis, ToneCategory, ToneChatScore, ToneContent,
    ToneInput, ToneScore, Utterance, UtteranceAnalyses, UtteranceAnalysis,
};

/// Service name used for configuration and analytics
pub const DEFAULT_SERVICE_NAME: &str = "tone_analyzer";

/// Default service endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://gateway.watsonplatform.net/tone-analyzer/api";

pub(crate) const SERVICE_VERSION: &str = "V3";
