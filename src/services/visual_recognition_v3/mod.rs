//! Visual Recognition v3.
//!
//! Classifies images with built-in or custom classifiers and detects faces.
//! Custom classifiers are trained from .zip archives of example images.

mod options;
mod service;
mod types;

pub use options::{
    ClassifyOptions, CreateClassifierOptions, DeleteClassifierOptions, DeleteUserDataOptions,
    DetectFacesOptions, GetClassifierOptions, GetCoreMlModelOptions, ListClassifiersOptions,
    UpdateClassifierOptions,
};
pub use service::{VisualRecognitionV3, VisualRecognitionV3Service};
pub use types::{
    Class, ClassResult, ClassifiedImage, ClassifiedImages, Classifier, ClassifierResult,
    ClassifierStatus, Classifiers, DetectedFaces, ErrorInfo, Face, FaceAge, FaceGender,
    FaceLocation, ImageWithFaces, WarningInfo,
};

/// Service name used for configuration and analytics
pub const DEFAULT_SERVICE_NAME: &str = "watson_vision_combined";

/// Default service endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://gateway.watsonplatform.net/visual-recognition/api";

pub(crate) const SERVICE_VERSION: &str = "V3";
