//! Visual Recognition v4.
//!
//! Object detection against user-trained collections. Collections hold
//! images and bounding-box training data; `train` builds a model from them
//! and `analyze` runs it.

mod options;
mod service;
mod types;

pub use options::{
    AddImageTrainingDataOptions, AddImagesOptions, AnalyzeOptions, CollectionOptions,
    CreateCollectionOptions, DeleteCollectionOptions, DeleteImageOptions, DeleteObjectOptions,
    DeleteUserDataOptions, GetCollectionOptions, GetImageDetailsOptions, GetJpegImageOptions,
    GetModelFileOptions, GetObjectMetadataOptions, GetTrainingUsageOptions, ImageOptions,
    ListCollectionsOptions, ListImagesOptions, ListObjectMetadataOptions, ObjectOptions,
    TrainOptions, UpdateCollectionOptions, UpdateObjectMetadataOptions,
};
pub use service::{VisualRecognitionV4, VisualRecognitionV4Service};
pub use types::{
    AnalyzeResponse, Collection, CollectionObjects, CollectionsList, DetectedObjects, ErrorTarget,
    Image, ImageDetails, ImageDetailsList, ImageDimensions, ImageError, ImageSize, ImageSource,
    ImageSourceType, ImageSummary, ImageSummaryList, Location, ObjectDetail, ObjectMetadata,
    ObjectMetadataList, ObjectTrainingStatus, TrainingDataObject, TrainingDataObjects,
    TrainingEvent, TrainingEventStatus, TrainingEvents, TrainingStatus, UpdateObjectMetadata,
    Warning,
};

/// Service name used for configuration and analytics
pub const DEFAULT_SERVICE_NAME: &str = "watson_vision_combined";

/// Default service endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://gateway.watsonplatform.net/visual-recognition/api";

/// Feature name for object detection
pub const FEATURE_OBJECTS: &str = "objects";

/// Model format accepted by `get_model_file`
pub const MODEL_FORMAT_RSCNN: &str = "rscnn";

pub(crate) const SERVICE_VERSION: &str = "V4";
