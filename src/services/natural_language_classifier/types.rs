//! Types for the Natural Language Classifier service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request payload for classify
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifyInput {
    /// The submitted phrase. Maximum length is 2048 characters.
    pub text: String,
}

impl ClassifyInput {
    /// Create a new input phrase
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Request payload for classify_collection
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClassifyCollectionInput<'a> {
    pub collection: &'a [ClassifyInput],
}

/// Class and confidence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedClass {
    /// A decimal percentage that represents the confidence that the service has in this class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Class label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Response from the classifier for a phrase
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    /// Unique identifier for this classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_id: Option<String>,
    /// Link to the classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The submitted phrase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The class with the highest confidence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_class: Option<String>,
    /// An array of up to ten class-confidence pairs sorted in descending order of confidence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<ClassifiedClass>>,
}

/// Classification result for one phrase of a collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionItem {
    /// The submitted phrase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The class with the highest confidence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_class: Option<String>,
    /// Class-confidence pairs sorted in descending order of confidence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<ClassifiedClass>>,
}

/// Response from the classifier for multiple phrases
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassificationCollection {
    /// Unique identifier for this classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_id: Option<String>,
    /// Link to the classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Classification results for each phrase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<Vec<CollectionItem>>,
}

/// Training state of a classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifierStatus {
    /// The classifier does not exist
    #[serde(rename = "Non Existent")]
    NonExistent,
    /// Training is in progress
    Training,
    /// Training failed
    Failed,
    /// Ready to classify
    Available,
    /// Temporarily unavailable
    Unavailable,
    /// A status this client does not know about
    #[serde(other)]
    Unknown,
}

/// A text classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classifier {
    /// User-supplied name for the classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Link to the classifier
    pub url: String,
    /// The state of the classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClassifierStatus>,
    /// Unique identifier for this classifier
    pub classifier_id: String,
    /// Date and time (UTC) the classifier was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Additional detail about the status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    /// The language used for the classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// List of available classifiers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassifierList {
    /// The classifiers available to the user. Returns an empty array if no classifiers are available.
    #[serde(default)]
    pub classifiers: Vec<Classifier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_deserialize() {
        let json = r#"{
            "classifier_id": "10D41B-nlc-1",
            "name": "weather",
            "language": "en",
            "created": "2015-08-24T18:42:25.324Z",
            "url": "https://gateway.watsonplatform.net/natural-language-classifier/api/v1/classifiers/10D41B-nlc-1",
            "status": "Non Existent",
            "status_description": "The classifier instance is gone."
        }"#;
        let classifier: Classifier = serde_json::from_str(json).unwrap();
        assert_eq!(classifier.classifier_id, "10D41B-nlc-1");
        assert_eq!(classifier.status, Some(ClassifierStatus::NonExistent));
        assert!(classifier.created.is_some());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let classifier: Classifier =
            serde_json::from_str(r#"{"classifier_id":"x","url":"u","status":"Deleting"}"#).unwrap();
        assert_eq!(classifier.status, Some(ClassifierStatus::Unknown));
    }

    #[test]
    fn test_classification_skips_missing_fields() {
        let classification = Classification {
            classifier_id: Some("xxx".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&classification).unwrap();
        assert_eq!(json, serde_json::json!({"classifier_id": "xxx"}));
    }
}
