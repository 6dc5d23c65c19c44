//! Visual Recognition v3 service implementation.

use super::options::{
    ClassifyOptions, CreateClassifierOptions, DeleteClassifierOptions, DeleteUserDataOptions,
    DetectFacesOptions, GetClassifierOptions, GetCoreMlModelOptions, ListClassifiersOptions,
    UpdateClassifierOptions,
};
use super::types::{ClassifiedImages, Classifier, Classifiers, DetectedFaces};
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
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Visual Recognition v3 operations
#[async_trait]
pub trait VisualRecognitionV3Service: Send + Sync {
    /// Classify images with built-in or custom classifiers
    async fn classify(&self, options: ClassifyOptions) -> WatsonResult<DetailedResponse<ClassifiedImages>>;

    /// Analyze and get data about faces in images
    async fn detect_faces(&self, options: DetectFacesOptions) -> WatsonResult<DetailedResponse<DetectedFaces>>;

    /// Train a new multi-faceted classifier on uploaded image data
    async fn create_classifier(
        &self,
        options: CreateClassifierOptions,
    ) -> WatsonResult<DetailedResponse<Classifier>>;

    /// Retrieve a list of classifiers
    async fn list_classifiers(
        &self,
        options: ListClassifiersOptions,
    ) -> WatsonResult<DetailedResponse<Classifiers>>;

    /// Retrieve information about a custom classifier
    async fn get_classifier(&self, options: GetClassifierOptions) -> WatsonResult<DetailedResponse<Classifier>>;

    /// Update a custom classifier by adding new positive or negative classes or new images
    async fn update_classifier(
        &self,
        options: UpdateClassifierOptions,
    ) -> WatsonResult<DetailedResponse<Classifier>>;

    /// Delete a classifier
    async fn delete_classifier(&self, options: DeleteClassifierOptions) -> WatsonResult<DetailedResponse<()>>;

    /// Download a custom classifier as a Core ML model file
    async fn get_core_ml_model(&self, options: GetCoreMlModelOptions) -> WatsonResult<DetailedResponse<Bytes>>;

    /// Delete all data associated with a specified customer ID
    async fn delete_user_data(&self, options: DeleteUserDataOptions) -> WatsonResult<DetailedResponse<()>>;
}

/// Client for Visual Recognition v3
#[derive(Clone, Debug)]
pub struct VisualRecognitionV3 {
    client: ServiceClient,
}

impl VisualRecognitionV3 {
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

/// Adds `<class>_positive_examples` parts and the negative examples part
fn add_examples(
    mut form: MultipartForm,
    positive_examples: BTreeMap<String, FileData>,
    negative_examples: Option<FileData>,
    negative_examples_filename: Option<String>,
) -> MultipartForm {
    for (class_name, examples) in positive_examples {
        let field = format!("{}_positive_examples", class_name);
        form = form.file(field, examples, &class_name);
    }
    if let Some(examples) = negative_examples {
        let filename = negative_examples_filename.unwrap_or_else(|| "negative_examples".to_string());
        form = form.file("negative_examples", examples.or_filename(filename), "negative_examples");
    }
    form
}

#[async_trait]
impl VisualRecognitionV3Service for VisualRecognitionV3 {
    async fn classify(&self, options: ClassifyOptions) -> WatsonResult<DetailedResponse<ClassifiedImages>> {
        let mut form = MultipartForm::new();
        if let Some(images_file) = options.images_file {
            form = form.file("images_file", images_file, "images_file");
        }
        if let Some(url) = options.url {
            form = form.text("url", url);
        }
        if let Some(threshold) = options.threshold {
            form = form.text("threshold", threshold.to_string());
        }
        if let Some(owners) = options.owners {
            form = form.text("owners", owners.join(","));
        }
        if let Some(classifier_ids) = options.classifier_ids {
            form = form.text("classifier_ids", classifier_ids.join(","));
        }

        let builder = self
            .client
            .request(Method::POST, "/v3/classify", "Classify")?
            .header_opt("Accept-Language", options.accept_language.as_deref())?
            .multipart(form)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn detect_faces(&self, options: DetectFacesOptions) -> WatsonResult<DetailedResponse<DetectedFaces>> {
        let mut form = MultipartForm::new();
        if let Some(images_file) = options.images_file {
            form = form.file("images_file", images_file, "images_file");
        }
        if let Some(url) = options.url {
            form = form.text("url", url);
        }

        let builder = self
            .client
            .request(Method::POST, "/v3/detect_faces", "DetectFaces")?
            .header_opt("Accept-Language", options.accept_language.as_deref())?
            .multipart(form)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn create_classifier(
        &self,
        options: CreateClassifierOptions,
    ) -> WatsonResult<DetailedResponse<Classifier>> {
        options.validate()?;
        let form = MultipartForm::new().text("name", required(options.name, "name")?);
        let form = add_examples(
            form,
            options.positive_examples,
            options.negative_examples,
            options.negative_examples_filename,
        );

        let builder = self
            .client
            .request(Method::POST, "/v3/classifiers", "CreateClassifier")?
            .multipart(form)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn list_classifiers(
        &self,
        options: ListClassifiersOptions,
    ) -> WatsonResult<DetailedResponse<Classifiers>> {
        let builder = self
            .client
            .request(Method::GET, "/v3/classifiers", "ListClassifiers")?
            .query_opt("verbose", options.verbose)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn get_classifier(&self, options: GetClassifierOptions) -> WatsonResult<DetailedResponse<Classifier>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::GET, "/v3/classifiers/{classifier_id}", "GetClassifier")?
            .path_param("classifier_id", required(options.classifier_id, "classifier_id")?)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn update_classifier(
        &self,
        options: UpdateClassifierOptions,
    ) -> WatsonResult<DetailedResponse<Classifier>> {
        options.validate()?;
        let form = add_examples(
            MultipartForm::new(),
            options.positive_examples,
            options.negative_examples,
            options.negative_examples_filename,
        );

        let builder = self
            .client
            .request(Method::POST, "/v3/classifiers/{classifier_id}", "UpdateClassifier")?
            .path_param("classifier_id", required(options.classifier_id, "classifier_id")?)
            .multipart(form)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn delete_classifier(&self, options: DeleteClassifierOptions) -> WatsonResult<DetailedResponse<()>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::DELETE, "/v3/classifiers/{classifier_id}", "DeleteClassifier")?
            .path_param("classifier_id", required(options.classifier_id, "classifier_id")?)
            .headers(&options.headers)?;

        self.client.execute_empty(builder).await
    }

    async fn get_core_ml_model(&self, options: GetCoreMlModelOptions) -> WatsonResult<DetailedResponse<Bytes>> {
        options.validate()?;
        let builder = self
            .client
            .request(
                Method::GET,
                "/v3/classifiers/{classifier_id}/core_ml_model",
                "GetCoreMlModel",
            )?
            .path_param("classifier_id", required(options.classifier_id, "classifier_id")?)
            .header("Accept", "application/octet-stream")?
            .headers(&options.headers)?;

        self.client.execute_bytes(builder).await
    }

    async fn delete_user_data(&self, options: DeleteUserDataOptions) -> WatsonResult<DetailedResponse<()>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::DELETE, "/v3/user_data", "DeleteUserData")?
            .query("customer_id", required(options.customer_id, "customer_id")?)
            .headers(&options.headers)?;

        self.client.execute_empty(builder).await
    }
}
