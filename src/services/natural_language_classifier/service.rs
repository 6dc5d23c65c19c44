//! Natural Language Classifier service implementation.

use super::options::{
    ClassifyCollectionOptions, ClassifyOptions, CreateClassifierOptions, DeleteClassifierOptions,
    GetClassifierOptions, ListClassifiersOptions,
};
use super::types::{
    Classification, ClassificationCollection, Classifier, ClassifierList, ClassifyCollectionInput,
    ClassifyInput,
};
use super::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL, SERVICE_VERSION};
use crate::auth::{authenticator_from_env, Authenticator};
use crate::client::{DetailedResponse, ServiceClient};
use crate::config::{ServiceConfig, ServiceConfigBuilder};
use crate::errors::WatsonResult;
use crate::services::required;
use crate::transport::MultipartForm;
use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use std::time::Duration;

/// Natural Language Classifier operations
#[async_trait]
pub trait NaturalLanguageClassifierService: Send + Sync {
    /// Returns label information for the input. The status must be `Available`
    /// before you can use the classifier to classify text.
    async fn classify(&self, options: ClassifyOptions) -> WatsonResult<DetailedResponse<Classification>>;

    /// Returns label information for multiple phrases (up to 30).
    async fn classify_collection(
        &self,
        options: ClassifyCollectionOptions,
    ) -> WatsonResult<DetailedResponse<ClassificationCollection>>;

    /// Sends data to create and train a classifier and returns information about the new classifier.
    async fn create_classifier(
        &self,
        options: CreateClassifierOptions,
    ) -> WatsonResult<DetailedResponse<Classifier>>;

    /// Returns an empty array if no classifiers are available.
    async fn list_classifiers(
        &self,
        options: ListClassifiersOptions,
    ) -> WatsonResult<DetailedResponse<ClassifierList>>;

    /// Returns status and other information about a classifier.
    async fn get_classifier(&self, options: GetClassifierOptions) -> WatsonResult<DetailedResponse<Classifier>>;

    /// Deletes a classifier.
    async fn delete_classifier(&self, options: DeleteClassifierOptions) -> WatsonResult<DetailedResponse<()>>;
}

/// Client for Natural Language Classifier v1
#[derive(Clone, Debug)]
pub struct NaturalLanguageClassifierV1 {
    client: ServiceClient,
}

impl NaturalLanguageClassifierV1 {
    /// Configuration builder preset with this service's name and URL
    pub fn config_builder() -> ServiceConfigBuilder {
        ServiceConfig::builder(DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL)
    }

    /// Create a new Natural Language Classifier client
    pub fn new(config: ServiceConfig, authenticator: Arc<dyn Authenticator>) -> WatsonResult<Self> {
        Ok(Self::from_client(ServiceClient::new(
            config,
            SERVICE_VERSION,
            authenticator,
        )?))
    }

    /// Create a client from `NATURAL_LANGUAGE_CLASSIFIER_*` environment variables
    pub fn from_env() -> WatsonResult<Self> {
        let config = Self::config_builder().apply_env()?.build()?;
        let authenticator = authenticator_from_env(DEFAULT_SERVICE_NAME)?;
        Self::new(config, authenticator)
    }

    /// Wrap an existing service client
    pub fn from_client(client: ServiceClient) -> Self {
        Self { client }
    }

    /// A copy whose calls fail once `deadline` elapses
    pub fn with_deadline(&self, deadline: Duration) -> Self {
        Self::from_client(self.client.with_deadline(deadline))
    }

    /// The underlying service client
    pub fn client(&self) -> &ServiceClient {
        &self.client
    }
}

#[async_trait]
impl NaturalLanguageClassifierService for NaturalLanguageClassifierV1 {
    async fn classify(&self, options: ClassifyOptions) -> WatsonResult<DetailedResponse<Classification>> {
        options.validate()?;
        let body = ClassifyInput::new(required(options.text, "text")?);

        let builder = self
            .client
            .request(Method::POST, "/v1/classifiers/{classifier_id}/classify", "Classify")?
            .path_param("classifier_id", required(options.classifier_id, "classifier_id")?)
            .json(&body)?
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn classify_collection(
        &self,
        options: ClassifyCollectionOptions,
    ) -> WatsonResult<DetailedResponse<ClassificationCollection>> {
        options.validate()?;
        let collection = required(options.collection, "collection")?;

        let builder = self
            .client
            .request(
                Method::POST,
                "/v1/classifiers/{classifier_id}/classify_collection",
                "ClassifyCollection",
            )?
            .path_param("classifier_id", required(options.classifier_id, "classifier_id")?)
            .json(&ClassifyCollectionInput {
                collection: &collection,
            })?
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn create_classifier(
        &self,
        options: CreateClassifierOptions,
    ) -> WatsonResult<DetailedResponse<Classifier>> {
        options.validate()?;
        let metadata = required(options.training_metadata, "training_metadata")?;
        let data = required(options.training_data, "training_data")?;

        let form = MultipartForm::new()
            .file(
                "training_metadata",
                metadata.or_content_type("application/json"),
                "training_metadata",
            )
            .file("training_data", data.or_content_type("text/csv"), "training_data");

        let builder = self
            .client
            .request(Method::POST, "/v1/classifiers", "CreateClassifier")?
            .multipart(form)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn list_classifiers(
        &self,
        options: ListClassifiersOptions,
    ) -> WatsonResult<DetailedResponse<ClassifierList>> {
        let builder = self
            .client
            .request(Method::GET, "/v1/classifiers", "ListClassifiers")?
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn get_classifier(&self, options: GetClassifierOptions) -> WatsonResult<DetailedResponse<Classifier>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::GET, "/v1/classifiers/{classifier_id}", "GetClassifier")?
            .path_param("classifier_id", required(options.classifier_id, "classifier_id")?)
            .headers(&options.headers)?;

        self.client.execute_json(builder).await
    }

    async fn delete_classifier(&self, options: DeleteClassifierOptions) -> WatsonResult<DetailedResponse<()>> {
        options.validate()?;
        let builder = self
            .client
            .request(Method::DELETE, "/v1/classifiers/{classifier_id}", "DeleteClassifier")?
            .path_param("classifier_id", required(options.classifier_id, "classifier_id")?)
            .headers(&options.headers)?;

        self.client.execute_empty(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WatsonError;
    use crate::mocks::{MockResponse, MockServiceBuilder};
    use crate::transport::FileData;
    use pretty_assertions::assert_eq;

    fn service(responses: Vec<MockResponse>) -> (NaturalLanguageClassifierV1, Arc<crate::mocks::MockHttpTransport>) {
        let mut builder = MockServiceBuilder::new();
        for response in responses {
            builder = builder.with_response(response);
        }
        builder
            .build(DEFAULT_SERVICE_NAME, SERVICE_VERSION, |client| {
                Ok(NaturalLanguageClassifierV1::from_client(client))
            })
            .unwrap()
    }

    #[tokio::test]
    async fn test_classify() {
        let (service, transport) = service(vec![MockResponse::json(&serde_json::json!({
            "classifier_id": "xxx",
            "top_class": "temperature",
            "classes": [{"class_name": "temperature", "confidence": 0.98}]
        }))]);

        let response = service
            .classify(ClassifyOptions::new("exampleString", "How hot will it be today?"))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.result.classifier_id.as_deref(), Some("xxx"));
        assert_eq!(response.result.top_class.as_deref(), Some("temperature"));

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path(), "/api/v1/classifiers/exampleString/classify");
        assert!(request.query_pairs().is_empty());
        assert_eq!(
            request.json().unwrap(),
            serde_json::json!({"text": "How hot will it be today?"})
        );
        assert_eq!(
            request.headers.get("x-ibmcloud-sdk-analytics").unwrap(),
            "service_name=natural_language_classifier;service_version=V1;operation_id=Classify"
        );
    }

    #[tokio::test]
    async fn test_classify_validation_sends_nothing() {
        let (service, transport) = service(vec![]);

        let error = service
            .classify(ClassifyOptions {
                text: Some("hi".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(error, WatsonError::Validation { .. }));
        assert!(transport.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_classify_collection() {
        let (service, transport) = service(vec![MockResponse::json(&serde_json::json!({
            "classifier_id": "xxx",
            "collection": [
                {"text": "How hot will it be today?", "top_class": "temperature"},
                {"text": "Is it hot outside?", "top_class": "temperature"}
            ]
        }))]);

        let response = service
            .classify_collection(ClassifyCollectionOptions::new(
                "xxx",
                vec![
                    ClassifyInput::new("How hot will it be today?"),
                    ClassifyInput::new("Is it hot outside?"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.result.collection.unwrap().len(), 2);
        let request = transport.last_request().unwrap();
        assert_eq!(request.path(), "/api/v1/classifiers/xxx/classify_collection");
        assert_eq!(
            request.json().unwrap(),
            serde_json::json!({"collection": [
                {"text": "How hot will it be today?"},
                {"text": "Is it hot outside?"}
            ]})
        );
    }

    #[tokio::test]
    async fn test_create_classifier_multipart() {
        let (service, transport) = service(vec![MockResponse::json(&serde_json::json!({
            "classifier_id": "10D41B-nlc-1",
            "url": "https://watson.test/api/v1/classifiers/10D41B-nlc-1",
            "status": "Training"
        }))
        .with_status(200)]);

        let response = service
            .create_classifier(CreateClassifierOptions::new(
                FileData::from_bytes(r#"{"language":"en","name":"weather"}"#),
                FileData::from_bytes("How hot will it be today?,temperature\n"),
            ))
            .await
            .unwrap();

        assert_eq!(response.result.classifier_id, "10D41B-nlc-1");
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path(), "/api/v1/classifiers");
        assert_eq!(
            request.parts.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["training_metadata", "training_data"]
        );
        assert_eq!(request.parts[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(request.parts[1].content_type.as_deref(), Some("text/csv"));
    }

    #[tokio::test]
    async fn test_list_and_get_classifier() {
        let classifier = serde_json::json!({
            "classifier_id": "abc",
            "url": "https://watson.test/api/v1/classifiers/abc",
            "status": "Available"
        });
        let (service, transport) = service(vec![
            MockResponse::json(&serde_json::json!({"classifiers": [classifier.clone()]})),
            MockResponse::json(&classifier),
        ]);

        let list = service.list_classifiers(ListClassifiersOptions::new()).await.unwrap();
        assert_eq!(list.result.classifiers.len(), 1);

        let got = service.get_classifier(GetClassifierOptions::new("abc")).await.unwrap();
        assert_eq!(got.result.classifier_id, "abc");

        let requests = transport.get_requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path(), "/api/v1/classifiers");
        assert_eq!(requests[1].path(), "/api/v1/classifiers/abc");
    }

    #[tokio::test]
    async fn test_delete_classifier() {
        let (service, transport) = service(vec![MockResponse::json(&serde_json::json!({}))]);

        let response = service
            .delete_classifier(DeleteClassifierOptions::new("abc").with_header("X-Test", "1"))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path(), "/api/v1/classifiers/abc");
        assert_eq!(request.headers.get("x-test").unwrap(), "1");
    }

    #[tokio::test]
    async fn test_error_response() {
        let (service, _) = service(vec![MockResponse::error(404, "Classifier not found")]);

        let error = service
            .get_classifier(GetClassifierOptions::new("missing"))
            .await
            .unwrap_err();
        match error {
            WatsonError::Api { status, message, .. } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Classifier not found");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }
}
