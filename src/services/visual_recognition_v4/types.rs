//! Types for Visual Recognition v4.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Results for all images
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeResponse {
    /// Analyzed images
    #[serde(default)]
    pub images: Vec<Image>,
    /// Information about what might cause less than optimal output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
    /// A unique identifier of the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Details about an image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// Where the image came from
    pub source: ImageSource,
    /// Height and width of the image
    pub dimensions: ImageDimensions,
    /// Detected objects
    pub objects: DetectedObjects,
    /// Problems processing this image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ImageError>>,
}

/// Kind of image source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSourceType {
    /// Uploaded file
    File,
    /// Fetched from a URL
    Url,
    /// A source type this client does not know about
    #[serde(other)]
    Unknown,
}

/// The source type of the image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageSource {
    /// The source type of the image
    #[serde(rename = "type")]
    pub source_type: ImageSourceType,
    /// Name of the image file if uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Name of the .zip file of images if uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_filename: Option<String>,
    /// Source of the image before any redirects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Fully resolved URL of the image after redirects are followed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
}

/// Height and width of an image
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageDimensions {
    /// Height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    /// Width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
}

/// Container for the list of collections that have objects detected in an image
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectedObjects {
    /// The collections with identified objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<CollectionObjects>>,
}

/// Objects detected by one collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionObjects {
    /// The identifier of the collection
    pub collection_id: String,
    /// The identified objects in a collection
    #[serde(default)]
    pub objects: Vec<ObjectDetail>,
}

/// Details about an object in the collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectDetail {
    /// The label for the object
    pub object: String,
    /// Defines the location of the bounding box around the object
    pub location: Location,
    /// Confidence score for the object in the range of 0 to 1
    pub score: f64,
}

/// Bounding box of an object, in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// Y-position of the top-left pixel of the bounding box
    pub top: i64,
    /// X-position of the top-left pixel of the bounding box
    pub left: i64,
    /// Width in pixels of the bounding box
    pub width: i64,
    /// Height in pixels of the bounding box
    pub height: i64,
}

impl Location {
    /// Create a bounding box
    pub fn new(top: i64, left: i64, width: i64, height: i64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// Field or parameter an image error refers to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorTarget {
    /// The parameter or property that is the focus of the problem
    #[serde(rename = "type")]
    pub target_type: String,
    /// The property that is identified with the problem
    pub name: String,
}

/// Details about an error processing one image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageError {
    /// Identifier of the problem, e.g. `invalid_image_url`
    pub code: String,
    /// An explanation of the problem with possible solutions
    pub message: String,
    /// A URL for more information about the solution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    /// Details about the specific area of the problem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ErrorTarget>,
}

/// Details about a problem performing the request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warning {
    /// Identifier of the problem, e.g. `invalid_field`
    pub code: String,
    /// An explanation of the problem with possible solutions
    pub message: String,
    /// A URL for more information about the solution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Training status for the objects in a collection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObjectTrainingStatus {
    /// Whether you can analyze images in the collection with the objects feature
    pub ready: bool,
    /// Whether training is in progress
    pub in_progress: bool,
    /// Whether there are changes to the training data since the most recent training
    pub data_changed: bool,
    /// Whether the most recent training failed
    pub latest_failed: bool,
    /// Details about the training
    pub description: String,
}

/// Training status information for the collection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainingStatus {
    /// Training status for the objects in the collection
    pub objects: ObjectTrainingStatus,
}

/// Details about a collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// The identifier of the collection
    pub collection_id: String,
    /// The name of the collection
    pub name: String,
    /// The description of the collection
    #[serde(default)]
    pub description: String,
    /// Date and time in UTC the collection was created
    pub created: DateTime<Utc>,
    /// Date and time in UTC the collection was most recently updated
    pub updated: DateTime<Utc>,
    /// Number of images in the collection
    pub image_count: i64,
    /// Training status information for the collection
    pub training_status: TrainingStatus,
}

/// A container for the list of collections
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CollectionsList {
    /// The collections in this service instance
    #[serde(default)]
    pub collections: Vec<Collection>,
}

/// Details about the training data of an image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingDataObject {
    /// The name of the object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Defines the location of the bounding box around the object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl TrainingDataObject {
    /// Label a bounding box
    pub fn new(object: impl Into<String>, location: Location) -> Self {
        Self {
            object: Some(object.into()),
            location: Some(location),
        }
    }
}

/// Training data for all objects in an image
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainingDataObjects {
    /// Training data for specific objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<TrainingDataObject>>,
}

/// Details about an image in a collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageDetails {
    /// The identifier of the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Date and time in UTC the image was most recently updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Date and time in UTC the image was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Where the image came from
    pub source: ImageSource,
    /// Height and width of the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ImageDimensions>,
    /// Problems processing this image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ImageError>>,
    /// Training data for all objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_data: Option<TrainingDataObjects>,
}

/// List of information about the images
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageDetailsList {
    /// The images in the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageDetails>>,
    /// Information about what might cause less than optimal output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
    /// A unique identifier of the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Basic information about an image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageSummary {
    /// The identifier of the image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Date and time in UTC the image was most recently updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// List of images
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageSummaryList {
    /// The images in the collection
    #[serde(default)]
    pub images: Vec<ImageSummary>,
}

/// Basic information about an object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectMetadata {
    /// The name of the object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Number of bounding boxes with this object name in the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// List of objects
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObjectMetadataList {
    /// Number of unique named objects in the collection
    pub object_count: i64,
    /// The objects in the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<ObjectMetadata>>,
}

/// Result of renaming an object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateObjectMetadata {
    /// The updated name of the object
    pub object: String,
    /// Number of bounding boxes in the collection with the updated object name
    pub count: i64,
}

/// Outcome of a training event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingEventStatus {
    /// Training failed
    Failed,
    /// Training succeeded
    Succeeded,
    /// A status this client does not know about
    #[serde(other)]
    Unknown,
}

/// Details about the training event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingEvent {
    /// Trained object type. Only `objects` is supported.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Identifier of the trained collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Date and time in UTC when training on the collection finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
    /// Training status of the training event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrainingEventStatus>,
    /// Number of images in the training event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_count: Option<i64>,
}

/// Details about the training events
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainingEvents {
    /// Start time of the training usage query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// End time of the training usage query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Total number of training events that completed in the queried period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_events: Option<i64>,
    /// Total number of images that were used in training
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_images: Option<i64>,
    /// Completed training events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<TrainingEvent>>,
}

/// Size of an image returned by `get_jpeg_image`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    /// Original image, converted to JPEG
    #[default]
    Full,
    /// Thumbnail of at most 200 pixels on the longest side
    Thumbnail,
}

impl ImageSize {
    /// Wire value of the `size` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Full => "full",
            ImageSize::Thumbnail => "thumbnail",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of create and update collection requests
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CollectionBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_status: Option<&'a TrainingStatus>,
}

/// Body of an object rename request
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ObjectNameBody<'a> {
    pub object: &'a str,
}

/// Body of an add training data request
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TrainingDataBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<&'a [TrainingDataObject]>,
}

/// Formats a date as the service expects in query strings
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
