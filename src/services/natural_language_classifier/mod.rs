//! Natural Language Classifier v1.
//!
//! Trains classifiers on short phrases and returns the best-matching classes
//! for new text.

mod options;
mod service;
mod types;

pub use options::{
    ClassifyCollectionOptions, ClassifyOptions, CreateClassifierOptions, DeleteClassifierOptions,
    GetClassifierOptions, ListClassifiersOptions,
};
pub use service::{NaturalLanguageClassifierService, NaturalLanguageClassifierV1};
pub use types::{
    Classification, ClassificationCollection, ClassifiedClass, Classifier, ClassifierList,
    ClassifierStatus, ClassifyInput, CollectionItem,
};

/// Service name used for configuration and analytics
pub const DEFAULT_SERVICE_NAME: &str = "natural_language_classifier";

/// Default service endpoint
pub const DEFAULT_SERVICE_URL: &str =
    "https://gateway.watsonplatform.net/natural-language-classifier/api";

pub(crate) const SERVICE_VERSION: &str = "V1";
