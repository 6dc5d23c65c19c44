//! Types for Visual Recognition v3.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about what might have caused a failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorInfo {
    /// HTTP status code
    pub code: i64,
    /// Human-readable error description
    pub description: String,
    /// Codified error string, such as `limit_exceeded`
    pub error_id: String,
}

/// Information about something that went wrong
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningInfo {
    /// Codified warning string, such as `limit_reached`
    pub warning_id: String,
    /// Information about the error
    pub description: String,
}

/// Result of a class within a classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassResult {
    /// Name of the class
    #[serde(rename = "class")]
    pub class_name: String,
    /// Confidence score for the property in the range of 0 to 1
    pub score: f64,
    /// Knowledge graph of the property, e.g. `/fruit/pome/apple/eating apple/Granny Smith`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hierarchy: Option<String>,
}

/// Classifier and score combination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierResult {
    /// Name of the classifier
    pub name: String,
    /// ID of a classifier identified in the image
    pub classifier_id: String,
    /// Classes within the classifier
    #[serde(default)]
    pub classes: Vec<ClassResult>,
}

/// Results for one image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedImage {
    /// Source of the image before any redirects. Not returned when the image is uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Fully resolved URL of the image after redirects are followed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
    /// Relative path of the image file if uploaded directly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Why the image could not be processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    /// The classifiers
    #[serde(default)]
    pub classifiers: Vec<ClassifierResult>,
}

/// Results for all images
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedImages {
    /// Number of custom classes identified in the images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_classes: Option<i64>,
    /// Number of images processed for the API call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_processed: Option<i64>,
    /// Classified images
    #[serde(default)]
    pub images: Vec<ClassifiedImage>,
    /// Information about what might cause less than optimal output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<WarningInfo>>,
}

/// Age information about a face
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaceAge {
    /// Estimated minimum age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Estimated maximum age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    /// Confidence score in the range of 0 to 1
    pub score: f64,
}

/// Gender information about a face
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaceGender {
    /// Gender identified by the face, `MALE` or `FEMALE`
    pub gender: String,
    /// The word for the gender in the language requested by `Accept-Language`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_label: Option<String>,
    /// Confidence score in the range of 0 to 1
    pub score: f64,
}

/// Position of a face in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FaceLocation {
    /// Width in pixels of the face region
    pub width: f64,
    /// Height in pixels of the face region
    pub height: f64,
    /// X-position of the top-left pixel of the face region
    pub left: f64,
    /// Y-position of the top-left pixel of the face region
    pub top: f64,
}

/// Information about a face
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Face {
    /// Age information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<FaceAge>,
    /// Gender information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<FaceGender>,
    /// Location of the face
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_location: Option<FaceLocation>,
}

/// Information about faces in one image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageWithFaces {
    /// Faces detected in the image
    #[serde(default)]
    pub faces: Vec<Face>,
    /// Relative path of the image file if uploaded directly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Source of the image before any redirects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Fully resolved URL of the image after redirects are followed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
    /// Why the image could not be processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Results for all faces
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectedFaces {
    /// Number of images processed for the API call
    pub images_processed: i64,
    /// The images
    #[serde(default)]
    pub images: Vec<ImageWithFaces>,
    /// Information about what might cause less than optimal output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<WarningInfo>>,
}

/// A category within a classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Class {
    /// The name of the class
    #[serde(rename = "class")]
    pub class_name: String,
}

/// Training status of a classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierStatus {
    /// Ready to classify
    Ready,
    /// Initial training in progress
    Training,
    /// Retraining in progress
    Retraining,
    /// Training failed
    Failed,
    /// A status this client does not know about
    #[serde(other)]
    Unknown,
}

/// Information about a classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classifier {
    /// ID of a classifier identified in the image
    pub classifier_id: String,
    /// Name of the classifier
    pub name: String,
    /// Unique ID of the account who owns the classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Training status of the classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClassifierStatus>,
    /// Whether the classifier can be downloaded as a Core ML model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_ml_enabled: Option<bool>,
    /// If the classifier status is `failed`, the reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Date and time in UTC the classifier was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Classes that define a classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<Class>>,
    /// Date and time in UTC the classifier was last retrained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrained: Option<DateTime<Utc>>,
    /// Date and time in UTC the classifier was updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// A container for the list of classifiers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Classifiers {
    /// List of classifiers
    #[serde(default)]
    pub classifiers: Vec<Classifier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_classifier_status_is_tolerated() {
        let classifier: Classifier = serde_json::from_str(
            r#"{"classifier_id":"dogs_1","name":"dogs","status":"archived"}"#,
        )
        .unwrap();
        assert_eq!(classifier.status, Some(ClassifierStatus::Unknown));

        let ready: ClassifierStatus = serde_json::from_str(r#""ready""#).unwrap();
        assert_eq!(ready, ClassifierStatus::Ready);
    }

    #[test]
    fn test_classified_images_deserialize() {
        let json = r#"{
            "custom_classes": 0,
            "images_processed": 1,
            "images": [{
                "source_url": "https://example.com/fruitbowl.jpg",
                "resolved_url": "https://example.com/fruitbowl.jpg",
                "classifiers": [{
                    "name": "default",
                    "classifier_id": "default",
                    "classes": [
                        {"class": "banana", "score": 0.562, "type_hierarchy": "/fruit/banana"},
                        {"class": "fruit", "score": 0.788}
                    ]
                }]
            }]
        }"#;
        let result: ClassifiedImages = serde_json::from_str(json).unwrap();
        let classes = &result.images[0].classifiers[0].classes;
        assert_eq!(classes[0].class_name, "banana");
        assert_eq!(classes[0].type_hierarchy.as_deref(), Some("/fruit/banana"));
        assert_eq!(classes[1].score, 0.788);
    }

    #[test]
    fn test_classifier_status() {
        let json = r#"{"classifier_id": "dogs_1477088859", "name": "dogs", "status": "retraining"}"#;
        let classifier: Classifier = serde_json::from_str(json).unwrap();
        assert_eq!(classifier.status, Some(ClassifierStatus::Retraining));
        assert!(classifier.classes.is_none());
    }

    #[test]
    fn test_face_with_error_image() {
        let json = r#"{
            "images_processed": 1,
            "images": [{
                "faces": [],
                "error": {"code": 400, "description": "Image size limit exceeded", "error_id": "input_error"}
            }]
        }"#;
        let faces: DetectedFaces = serde_json::from_str(json).unwrap();
        assert_eq!(faces.images[0].error.as_ref().unwrap().code, 400);
    }
}
