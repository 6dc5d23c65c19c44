//! Visual Recognition v4 service implementation.

use super::options::{
    AddImageTrainingDataOptions, AddImagesOptions, AnalyzeOptions, CollectionOptions,
    CreateCollectionOptions, DeleteUserDataOptions, GetJpegImageOptions, GetModelFileOptions,
    GetTrainingUsageOptions, ImageOptions, ListCollectionsOptions, ObjectOptions,
    UpdateCollectionOptions, UpdateObjectMetadataOptions,
};
use super::types::{
    format_date, AnalyzeResponse, Collection, CollectionBody, CollectionsList, ImageDetails,
    ImageDetailsList, ImageSummaryList, ObjectMetadata, ObjectMetadataList, ObjectNameBody,
    TrainingDataBody, TrainingDataObjects, TrainingEvents, UpdateObjectMetadata,
};
use super::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL, SERVICE_VERSION};
use crate::auth::{authenticator_from_env, Authenticator};
use crate::client::{DetailedResponse, ServiceClient};
use crate::config::{ServiceConfig, ServiceConfigBuilder};
use crate::errors::WatsonResult;
use crate::services::required;
use crate::transport::{FileData, MultipartForm};
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use std::sync::Arc;
use std::time::Duration;

/// Visual Recognition v4 operations
#[async_trait]
pub trait VisualRecognitionV4Service: Send + Sync {
    /// Analyze images by URL, by file, or both against your own collection
    async fn analyze(&self, options: AnalyzeOptions) -> WatsonResult<DetailedResponse<AnalyzeResponse>>;

    /// Create a collection that can be used to store images
    async fn create_collection(
        &self,
        options: CreateCollectionOptions,
    ) -> WatsonResult<DetailedResponse<Collection>>;

    /// Retrieve a list of collections for the service instance
    async fn list_collections(
        &self,
        options: ListCollectionsOptions,
    ) -> WatsonResult<DetailedResponse<CollectionsList>>;

    /// Get details of one collection
    async fn get_collection(&self, options: CollectionOptions) -> WatsonResult<DetailedResponse<Collection>>;

    /// Update the name or description of a collection
    async fn update_collection(
        &self,
        options: UpdateCollectionOptions,
    ) -> WatsonResult<DetailedResponse<Collection>>;

    /// Delete a collection from the service instance
    async fn delete_collection(&self, options: CollectionOptions) -> WatsonResult<DetailedResponse<()>>;

    /// Download a model that you can deploy to detect objects in images
    async fn get_model_file(&self, options: GetModelFileOptions) -> WatsonResult<DetailedResponse<Bytes>>;

    /// Add images to a collection by URL, by file, or both
    async fn add_images(&self, options: AddImagesOptions) -> WatsonResult<DetailedResponse<ImageDetailsList>>;

    /// Retrieve a list of images in a collection
    async fn list_images(&self, options: CollectionOptions) -> WatsonResult<DetailedResponse<ImageSummaryList>>;

    /// Get the details of an image in a collection
    async fn get_image_details(&self, options: ImageOptions) -> WatsonResult<DetailedResponse<ImageDetails>>;

    /// Delete one image from a collection
    async fn delete_image(&self, options: ImageOptions) -> WatsonResult<DetailedResponse<()>>;

    /// Download a JPEG representation of an image
    async fn get_jpeg_image(&self, options: GetJpegImageOptions) -> WatsonResult<DetailedResponse<Bytes>>;

    /// Retrieve a list of object names in a collection
    async fn list_object_metadata(
        &self,
        options: CollectionOptions,
    ) -> WatsonResult<DetailedResponse<ObjectMetadataList>>;

    /// Rename an object across all images in a collection
    async fn update_object_metadata(
        &self,
        options: UpdateObjectMetadataOptions,
    ) -> WatsonResult<DetailedResponse<UpdateObjectMetadata>>;

    /// Get the number of bounding boxes for a single object in a collection
    async fn get_object_metadata(&self, options: ObjectOptions) -> WatsonResult<DetailedResponse<ObjectMetadata>>;

    /// Delete one object from a collection
    async fn delete_object(&self, options: ObjectOptions) -> WatsonResult<DetailedResponse<()>>;

    /// Start training on images in a collection
    async fn train(&self, options: CollectionOptions) -> WatsonResult<DetailedResponse<Collection>>;

    /// Add, update, or delete training data for an image
    async fn add_image_training_data(
        &self,
        options: AddImageTrainingDataOptions,
    ) -> WatsonResult<DetailedResponse<TrainingDataObjects>>;

    /// Information about completed training events
    async fn get_training_usage(
        &self,
        options: GetTrainingUsageOptions,
    ) -> WatsonResult<DetailedResponse<TrainingEvents>>;

    /// Delete all data associated with a specified customer ID
    async fn delete_user_data(&self, options: DeleteUserDataOptions) -> WatsonResult<DetailedResponse<()>>;
}

/// Client for Visual Recognition v4
#[derive(Clone, Debug)]
pub struct VisualRecognitionV4 {
    client: ServiceClient,
}

impl VisualRecognitionV4 {
    /// Configuration builder preset with this service's name, URL and version date
    pub fn config_builder(version: impl Into<String>) -> ServiceConfigBuilder {
        ServiceConfig::builder(DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL).version(version)
    }

    /// Create a new client. The configuration must carry a version date.
    pub fn new(config: ServiceConfig, authenticator: Arc<dyn Authenticator>) -> WatsonResult<Self> {
        Self::from_client(ServiceClient::new(config, SERVICE_VERSION, authenticator)?)
    }

    /// Create a client from `WATSON_VISION_COMBINED_*` environment variables
    pub fn from_env(version: impl Into<String>) -> WatsonResult<Self> {
        let config = Self::config_builder(version).apply_env()?.build()?;
        let authenticator = authenticator_from_env(DEFAULT_SERVICE_NAME)?;
        Self::new(config, authenticator)
    }

    /// Wrap an existing service client
    pub fn from_client(client: ServiceClient) -> WatsonResult<Self> {
        client.require_version()?;
        Ok(Self { client })
    }

    /// A copy whose calls fail once `deadline` elapses
    pub fn with_deadline(&self, deadline: Duration) -> Self {
        Self {
            client: self.client.with_deadline(deadline),
        }
    }

    /// The underlying service client
    pub fn client(&self) -> &ServiceClient {
        &self.client
    }
}

fn add_images_parts(mut form: MultipartForm, images_file: Vec<FileData>, image_url: Vec<String>) -> MultipartForm {
    for file in images_file {
        form = form.file("images_file", file, "images_file");
    }
    for url in image_url {
        form = form.text("image_url", url);
    }
    form
}

#[async_trait]
impl VisualRecognitionV4Service for VisualRecognitionV4 {
    async fn analyze(&self, options: AnalyzeOptions) -> WatsonResult<DetailedResponse<AnalyzeResponse>> {
        options.validate()?;
        let collection_ids = required(options.collection_ids, "collection_ids")?;
        let features = required(options.features, "features")?;

        let mut form = MultipartForm::new()
            .text("collection_ids", collection_ids.join(","))
            .text("features", features.join(","));
        form = add_images_parts(form, options.images_file, options.image_url);
        if let Some(threshold) = options.threshold {
            form = form.text("threshold", threshold.to_string());
        }

        let builder = self
            .client
            .request(Method::POST, "/v4/analyze", "Analyze")?
            .multipart(form)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn create_collection(
        &self,
        options: CreateCollectionOptions,
    ) -> WatsonResult<DetailedResponse<Collection>> {
        let body = CollectionBody {
            name: options.name.as_deref(),
            description: options.description.as_deref(),
            training_status: options.training_status.as_ref(),
        };

        let builder = self
            .client
            .request(Method::POST, "/v4/collections", "CreateCollection")?
            .json(&body)?
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn list_collections(
        &self,
        options: ListCollectionsOptions,
    ) -> WatsonResult<DetailedResponse<CollectionsList>> {
        let builder = self
            .client
            .request(Method::GET, "/v4/collections", "ListCollections")?
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn get_collection(&self, options: CollectionOptions) -> WatsonResult<DetailedResponse<Collection>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::GET, "/v4/collections/{collection_id}", "GetCollection")?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn update_collection(
        &self,
        options: UpdateCollectionOptions,
    ) -> WatsonResult<DetailedResponse<Collection>> {
        options.validate()?;
        let body = CollectionBody {
            name: options.name.as_deref(),
            description: options.description.as_deref(),
            training_status: options.training_status.as_ref(),
        };

        let builder = self
            .client
            .request(Method::POST, "/v4/collections/{collection_id}", "UpdateCollection")?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .json(&body)?
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn delete_collection(&self, options: CollectionOptions) -> WatsonResult<DetailedResponse<()>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::DELETE, "/v4/collections/{collection_id}", "DeleteCollection")?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .headers(&options.headers)?;

        self.client.execute_empty(builder).await
    }

    async fn get_model_file(&self, options: GetModelFileOptions) -> WatsonResult<DetailedResponse<Bytes>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::GET, "/v4/collections/{collection_id}/model", "GetModelFile")?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .query("feature", required(options.feature, "feature")?)
            .query("model_format", required(options.model_format, "model_format")?)
            .header("Accept", "application/octet-stream")?
            .headers(&options.headers)?;

        self.client.execute_bytes(builder).await
    }

    async fn add_images(&self, options: AddImagesOptions) -> WatsonResult<DetailedResponse<ImageDetailsList>> {
        options.validate()?;
        let mut form = add_images_parts(MultipartForm::new(), options.images_file, options.image_url);
        if let Some(training_data) = options.training_data {
            form = form.text("training_data", training_data);
        }

        let builder = self
            .client
            .request(Method::POST, "/v4/collections/{collection_id}/images", "AddImages")?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .multipart(form)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn list_images(&self, options: CollectionOptions) -> WatsonResult<DetailedResponse<ImageSummaryList>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::GET, "/v4/collections/{collection_id}/images", "ListImages")?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn get_image_details(&self, options: ImageOptions) -> WatsonResult<DetailedResponse<ImageDetails>> {
        options.validate()?;
        let builder = self
            .client
            .request(
                Method::GET,
                "/v4/collections/{collection_id}/images/{image_id}",
                "GetImageDetails",
            )?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .path_param("image_id", required(options.image_id, "image_id")?)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn delete_image(&self, options: ImageOptions) -> WatsonResult<DetailedResponse<()>> {
        options.validate()?;
        let builder = self
            .client
            .request(
                Method::DELETE,
                "/v4/collections/{collection_id}/images/{image_id}",
                "DeleteImage",
            )?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .path_param("image_id", required(options.image_id, "image_id")?)
            .headers(&options.headers)?;

        self.client.execute_empty(builder).await
    }

    async fn get_jpeg_image(&self, options: GetJpegImageOptions) -> WatsonResult<DetailedResponse<Bytes>> {
        options.validate()?;
        let builder = self
            .client
            .request(
                Method::GET,
                "/v4/collections/{collection_id}/images/{image_id}/jpeg",
                "GetJpegImage",
            )?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .path_param("image_id", required(options.image_id, "image_id")?)
            .query_opt("size", options.size)
            .header("Accept", "image/jpeg")?
            .headers(&options.headers)?;

        self.client.execute_bytes(builder).await
    }

    async fn list_object_metadata(
        &self,
        options: CollectionOptions,
    ) -> WatsonResult<DetailedResponse<ObjectMetadataList>> {
        options.validate()?;
        let builder = self
            .client
            .request(
                Method::GET,
                "/v4/collections/{collection_id}/objects",
                "ListObjectMetadata",
            )?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn update_object_metadata(
        &self,
        options: UpdateObjectMetadataOptions,
    ) -> WatsonResult<DetailedResponse<UpdateObjectMetadata>> {
        options.validate()?;
        let new_object = required(options.new_object, "new_object")?;

        let builder = self
            .client
            .request(
                Method::POST,
                "/v4/collections/{collection_id}/objects/{object}",
                "UpdateObjectMetadata",
            )?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .path_param("object", required(options.object, "object")?)
            .json(&ObjectNameBody { object: &new_object })?
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn get_object_metadata(&self, options: ObjectOptions) -> WatsonResult<DetailedResponse<ObjectMetadata>> {
        options.validate()?;
        let builder = self
            .client
            .request(
                Method::GET,
                "/v4/collections/{collection_id}/objects/{object}",
                "GetObjectMetadata",
            )?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .path_param("object", required(options.object, "object")?)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn delete_object(&self, options: ObjectOptions) -> WatsonResult<DetailedResponse<()>> {
        options.validate()?;
        let builder = self
            .client
            .request(
                Method::DELETE,
                "/v4/collections/{collection_id}/objects/{object}",
                "DeleteObject",
            )?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .path_param("object", required(options.object, "object")?)
            .headers(&options.headers)?;

        self.client.execute_empty(builder).await
    }

    async fn train(&self, options: CollectionOptions) -> WatsonResult<DetailedResponse<Collection>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::POST, "/v4/collections/{collection_id}/train", "Train")?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn add_image_training_data(
        &self,
        options: AddImageTrainingDataOptions,
    ) -> WatsonResult<DetailedResponse<TrainingDataObjects>> {
        options.validate()?;
        let body = TrainingDataBody {
            objects: options.objects.as_deref(),
        };

        let builder = self
            .client
            .request(
                Method::POST,
                "/v4/collections/{collection_id}/images/{image_id}/training_data",
                "AddImageTrainingData",
            )?
            .path_param("collection_id", required(options.collection_id, "collection_id")?)
            .path_param("image_id", required(options.image_id, "image_id")?)
            .json(&body)?
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn get_training_usage(
        &self,
        options: GetTrainingUsageOptions,
    ) -> WatsonResult<DetailedResponse<TrainingEvents>> {
        let builder = self
            .client
            .request(Method::GET, "/v4/training_usage", "GetTrainingUsage")?
            .query_opt("start_time", options.start_time.map(format_date))
            .query_opt("end_time", options.end_time.map(format_date))
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn delete_user_data(&self, options: DeleteUserDataOptions) -> WatsonResult<DetailedResponse<()>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::DELETE, "/v4/user_data", "DeleteUserData")?
            .query("customer_id", required(options.customer_id, "customer_id")?)
            .headers(&options.headers)?;

        self.client.execute_empty(builder).await
    }
}
