//! Options for Visual Recognition v4 operations.

use super::types::{ImageSize, TrainingDataObject, TrainingStatus};
use crate::errors::{RequiredFields, WatsonResult};
use crate::transport::FileData;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Options for `analyze`
///
/// Images are sent as repeated `images_file` and `image_url` parts.
#[derive(Debug, Default)]
pub struct AnalyzeOptions {
    /// IDs of the collections to analyze
    pub collection_ids: Option<Vec<String>>,
    /// The features to analyze, e.g. `objects`
    pub features: Option<Vec<String>>,
    /// Image files to analyze
    pub images_file: Vec<FileData>,
    /// URLs of images to analyze
    pub image_url: Vec<String>,
    /// Minimum score a feature must have to be returned
    pub threshold: Option<f32>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl AnalyzeOptions {
    /// Create options with the required fields set
    pub fn new(collection_ids: Vec<String>, features: Vec<String>) -> Self {
        Self {
            collection_ids: Some(collection_ids),
            features: Some(features),
            ..Default::default()
        }
    }

    /// Add an image file
    pub fn with_images_file(mut self, images_file: FileData) -> Self {
        self.images_file.push(images_file);
        self
    }

    /// Add an image URL
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url.push(image_url.into());
        self
    }

    /// Set the minimum feature score
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("AnalyzeOptions")
            .list("collection_ids", &self.collection_ids)
            .list("features", &self.features)
            .finish()
    }
}

/// Options for `create_collection`
#[derive(Debug, Clone, Default)]
pub struct CreateCollectionOptions {
    /// The name of the collection
    pub name: Option<String>,
    /// The description of the collection
    pub description: Option<String>,
    /// Training status information for the collection
    pub training_status: Option<TrainingStatus>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl CreateCollectionOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the training status
    pub fn with_training_status(mut self, training_status: TrainingStatus) -> Self {
        self.training_status = Some(training_status);
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `list_collections`
#[derive(Debug, Clone, Default)]
pub struct ListCollectionsOptions {
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ListCollectionsOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for operations addressing one collection:
/// `get_collection`, `delete_collection`, `list_images`,
/// `list_object_metadata` and `train`
#[derive(Debug, Clone, Default)]
pub struct CollectionOptions {
    /// The identifier of the collection
    pub collection_id: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl CollectionOptions {
    /// Create options with the required fields set
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("CollectionOptions")
            .string("collection_id", &self.collection_id)
            .finish()
    }
}

/// Options for `get_collection`
pub type GetCollectionOptions = CollectionOptions;
/// Options for `delete_collection`
pub type DeleteCollectionOptions = CollectionOptions;
/// Options for `list_images`
pub type ListImagesOptions = CollectionOptions;
/// Options for `list_object_metadata`
pub type ListObjectMetadataOptions = CollectionOptions;
/// Options for `train`
pub type TrainOptions = CollectionOptions;

/// Options for `update_collection`
///
/// Unset fields keep their current values.
#[derive(Debug, Clone, Default)]
pub struct UpdateCollectionOptions {
    /// The identifier of the collection
    pub collection_id: Option<String>,
    /// The new name of the collection
    pub name: Option<String>,
    /// The new description of the collection
    pub description: Option<String>,
    /// Training status information for the collection
    pub training_status: Option<TrainingStatus>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl UpdateCollectionOptions {
    /// Create options with the required fields set
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            ..Default::default()
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the training status
    pub fn with_training_status(mut self, training_status: TrainingStatus) -> Self {
        self.training_status = Some(training_status);
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("UpdateCollectionOptions")
            .string("collection_id", &self.collection_id)
            .finish()
    }
}

/// Options for `get_model_file`
#[derive(Debug, Clone, Default)]
pub struct GetModelFileOptions {
    /// The identifier of the collection
    pub collection_id: Option<String>,
    /// The feature for the model, e.g. `objects`
    pub feature: Option<String>,
    /// The format of the returned model, e.g. `rscnn`
    pub model_format: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl GetModelFileOptions {
    /// Create options with the required fields set
    pub fn new(
        collection_id: impl Into<String>,
        feature: impl Into<String>,
        model_format: impl Into<String>,
    ) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            feature: Some(feature.into()),
            model_format: Some(model_format.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("GetModelFileOptions")
            .string("collection_id", &self.collection_id)
            .string("feature", &self.feature)
            .string("model_format", &self.model_format)
            .finish()
    }
}

/// Options for `add_images`
#[derive(Debug, Default)]
pub struct AddImagesOptions {
    /// The identifier of the collection
    pub collection_id: Option<String>,
    /// Image files to add
    pub images_file: Vec<FileData>,
    /// URLs of images to add
    pub image_url: Vec<String>,
    /// Training data for a single image, as a JSON document
    pub training_data: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl AddImagesOptions {
    /// Create options with the required fields set
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            ..Default::default()
        }
    }

    /// Add an image file
    pub fn with_images_file(mut self, images_file: FileData) -> Self {
        self.images_file.push(images_file);
        self
    }

    /// Add an image URL
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url.push(image_url.into());
        self
    }

    /// Set the training data JSON
    pub fn with_training_data(mut self, training_data: impl Into<String>) -> Self {
        self.training_data = Some(training_data.into());
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("AddImagesOptions")
            .string("collection_id", &self.collection_id)
            .finish()
    }
}

/// Options for operations addressing one image:
/// `get_image_details` and `delete_image`
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    /// The identifier of the collection
    pub collection_id: Option<String>,
    /// The identifier of the image
    pub image_id: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ImageOptions {
    /// Create options with the required fields set
    pub fn new(collection_id: impl Into<String>, image_id: impl Into<String>) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            image_id: Some(image_id.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("ImageOptions")
            .string("collection_id", &self.collection_id)
            .string("image_id", &self.image_id)
            .finish()
    }
}

/// Options for `get_image_details`
pub type GetImageDetailsOptions = ImageOptions;
/// Options for `delete_image`
pub type DeleteImageOptions = ImageOptions;

/// Options for `get_jpeg_image`
#[derive(Debug, Clone, Default)]
pub struct GetJpegImageOptions {
    /// The identifier of the collection
    pub collection_id: Option<String>,
    /// The identifier of the image
    pub image_id: Option<String>,
    /// The image size; the service defaults to `full`
    pub size: Option<ImageSize>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl GetJpegImageOptions {
    /// Create options with the required fields set
    pub fn new(collection_id: impl Into<String>, image_id: impl Into<String>) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            image_id: Some(image_id.into()),
            ..Default::default()
        }
    }

    /// Set the image size
    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("GetJpegImageOptions")
            .string("collection_id", &self.collection_id)
            .string("image_id", &self.image_id)
            .finish()
    }
}

/// Options for operations addressing one object:
/// `get_object_metadata` and `delete_object`
#[derive(Debug, Clone, Default)]
pub struct ObjectOptions {
    /// The identifier of the collection
    pub collection_id: Option<String>,
    /// The name of the object
    pub object: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl ObjectOptions {
    /// Create options with the required fields set
    pub fn new(collection_id: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            object: Some(object.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("ObjectOptions")
            .string("collection_id", &self.collection_id)
            .string("object", &self.object)
            .finish()
    }
}

/// Options for `get_object_metadata`
pub type GetObjectMetadataOptions = ObjectOptions;
/// Options for `delete_object`
pub type DeleteObjectOptions = ObjectOptions;

/// Options for `update_object_metadata`
#[derive(Debug, Clone, Default)]
pub struct UpdateObjectMetadataOptions {
    /// The identifier of the collection
    pub collection_id: Option<String>,
    /// The current name of the object
    pub object: Option<String>,
    /// The new name of the object
    pub new_object: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl UpdateObjectMetadataOptions {
    /// Create options with the required fields set
    pub fn new(
        collection_id: impl Into<String>,
        object: impl Into<String>,
        new_object: impl Into<String>,
    ) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            object: Some(object.into()),
            new_object: Some(new_object.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("UpdateObjectMetadataOptions")
            .string("collection_id", &self.collection_id)
            .string("object", &self.object)
            .string("new_object", &self.new_object)
            .finish()
    }
}

/// Options for `add_image_training_data`
#[derive(Debug, Clone, Default)]
pub struct AddImageTrainingDataOptions {
    /// The identifier of the collection
    pub collection_id: Option<String>,
    /// The identifier of the image
    pub image_id: Option<String>,
    /// Training data for specific objects
    pub objects: Option<Vec<TrainingDataObject>>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl AddImageTrainingDataOptions {
    /// Create options with the required fields set
    pub fn new(collection_id: impl Into<String>, image_id: impl Into<String>) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            image_id: Some(image_id.into()),
            ..Default::default()
        }
    }

    /// Set the training objects
    pub fn with_objects(mut self, objects: Vec<TrainingDataObject>) -> Self {
        self.objects = Some(objects);
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("AddImageTrainingDataOptions")
            .string("collection_id", &self.collection_id)
            .string("image_id", &self.image_id)
            .finish()
    }
}

/// Options for `get_training_usage`
#[derive(Debug, Clone, Default)]
pub struct GetTrainingUsageOptions {
    /// Earliest day to include training events
    pub start_time: Option<NaiveDate>,
    /// Most recent day to include training events
    pub end_time: Option<NaiveDate>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl GetTrainingUsageOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first day
    pub fn with_start_time(mut self, start_time: NaiveDate) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the last day
    pub fn with_end_time(mut self, end_time: NaiveDate) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Options for `delete_user_data`
#[derive(Debug, Clone, Default)]
pub struct DeleteUserDataOptions {
    /// The customer ID for which all data is to be deleted
    pub customer_id: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
}

impl DeleteUserDataOptions {
    /// Create options with the required fields set
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Check that required fields are set
    pub fn validate(&self) -> WatsonResult<()> {
        RequiredFields::new("DeleteUserDataOptions")
            .string("customer_id", &self.customer_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WatsonError;

    #[test]
    fn test_analyze_requires_collections_and_features() {
        let error = AnalyzeOptions::new(vec![], vec!["objects".to_string()])
            .validate()
            .unwrap_err();
        match error {
            WatsonError::Validation { details, .. } => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "collection_ids");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(AnalyzeOptions::default().validate().is_err());
    }

    #[test]
    fn test_model_file_requires_all_fields() {
        assert!(GetModelFileOptions::new("c", "objects", "rscnn").validate().is_ok());
        let options = GetModelFileOptions {
            collection_id: Some("c".to_string()),
            ..Default::default()
        };
        match options.validate().unwrap_err() {
            WatsonError::Validation { details, .. } => assert_eq!(details.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_path_options() {
        assert!(ImageOptions::new("c", "").validate().is_err());
        assert!(ObjectOptions::new("c", "giraffe").validate().is_ok());
        assert!(UpdateObjectMetadataOptions::new("c", "giraffe", "").validate().is_err());
        assert!(CollectionOptions::default().validate().is_err());
    }
}
