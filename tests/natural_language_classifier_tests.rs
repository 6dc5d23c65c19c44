//! Integration tests for Natural Language Classifier v1.

mod common;

use common::*;
use integrations_watson::services::natural_language_classifier::{
    ClassifyCollectionOptions, ClassifyInput, ClassifyOptions, CreateClassifierOptions,
    DeleteClassifierOptions, ListClassifiersOptions,
};
use integrations_watson::{
    FileData, NaturalLanguageClassifierService, NaturalLanguageClassifierV1, WatsonError,
};
use pretty_assertions::assert_eq;
use tokio_test::{assert_err, assert_ok};
use wiremock::MockServer;

fn service(server: &MockServer) -> NaturalLanguageClassifierV1 {
    let config = against(NaturalLanguageClassifierV1::config_builder(), server)
        .build()
        .unwrap();
    NaturalLanguageClassifierV1::new(config, basic_authenticator()).unwrap()
}

#[tokio::test]
async fn test_classify() {
    let server = setup_mock_server().await;
    mock_with_auth("POST", "/v1/classifiers/exampleString/classify")
        .respond_with(success_response(serde_json::json!({
            "classifier_id": "xxx",
            "top_class": "temperature",
            "classes": [{"class_name": "temperature", "confidence": 0.98}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = assert_ok!(
        service(&server)
            .classify(ClassifyOptions::new("exampleString", "How hot will it be today?"))
            .await
    );

    assert_eq!(response.status_code, 200);
    assert_eq!(response.result.classifier_id.as_deref(), Some("xxx"));
    assert_eq!(response.result.top_class.as_deref(), Some("temperature"));

    let requests = received(&server).await;
    assert_eq!(header_value(&requests[0], "content-type"), Some("application/json"));
    assert_eq!(header_value(&requests[0], "accept"), Some("application/json"));
    assert!(header_value(&requests[0], "x-ibmcloud-sdk-analytics")
        .unwrap()
        .contains("operation_id=Classify"));
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&requests[0].body).unwrap(),
        serde_json::json!({"text": "How hot will it be today?"})
    );
}

#[tokio::test]
async fn test_classify_collection() {
    let server = setup_mock_server().await;
    mock_with_auth("POST", "/v1/classifiers/abc/classify_collection")
        .respond_with(success_response(serde_json::json!({
            "classifier_id": "abc",
            "collection": [
                {"text": "How hot will it be today?", "top_class": "temperature"},
                {"text": "Is it windy?", "top_class": "conditions"}
            ]
        })))
        .mount(&server)
        .await;

    let response = service(&server)
        .classify_collection(ClassifyCollectionOptions::new(
            "abc",
            vec![
                ClassifyInput::new("How hot will it be today?"),
                ClassifyInput::new("Is it windy?"),
            ],
        ))
        .await
        .unwrap();

    let collection = response.result.collection.unwrap();
    assert_eq!(collection.len(), 2);
    assert_eq!(collection[1].top_class.as_deref(), Some("conditions"));
}

#[tokio::test]
async fn test_create_classifier_sends_multipart() {
    let server = setup_mock_server().await;
    mock_with_auth("POST", "/v1/classifiers")
        .respond_with(success_response(serde_json::json!({
            "classifier_id": "new-id",
            "url": "https://gateway.watsonplatform.net/natural-language-classifier/api/v1/classifiers/new-id",
            "status": "Training"
        })))
        .mount(&server)
        .await;

    let response = service(&server)
        .create_classifier(CreateClassifierOptions::new(
            FileData::from_bytes(r#"{"language":"en","name":"weather"}"#),
            FileData::from_bytes("How hot will it be today?,temperature\n"),
        ))
        .await
        .unwrap();

    assert_eq!(response.result.classifier_id, "new-id");

    let requests = received(&server).await;
    assert!(header_value(&requests[0], "content-type")
        .unwrap()
        .starts_with("multipart/form-data; boundary="));
    let body = body_text(&requests[0]);
    assert!(body.contains(r#"name="training_metadata""#));
    assert!(body.contains(r#"name="training_data""#));
    assert!(body.contains("text/csv"));
    assert!(body.find("training_metadata").unwrap() < body.find("training_data").unwrap());
}

#[tokio::test]
async fn test_list_classifiers() {
    let server = setup_mock_server().await;
    mock_with_auth("GET", "/v1/classifiers")
        .respond_with(success_response(serde_json::json!({
            "classifiers": [
                {"classifier_id": "a", "url": "https://x/a", "name": "first"},
                {"classifier_id": "b", "url": "https://x/b"}
            ]
        })))
        .mount(&server)
        .await;

    let response = service(&server)
        .list_classifiers(ListClassifiersOptions::new())
        .await
        .unwrap();

    assert_eq!(response.result.classifiers.len(), 2);
    assert_eq!(response.result.classifiers[0].name.as_deref(), Some("first"));
}

#[tokio::test]
async fn test_delete_classifier() {
    let server = setup_mock_server().await;
    mock_with_auth("DELETE", "/v1/classifiers/abc")
        .respond_with(success_response(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let response = service(&server)
        .delete_classifier(DeleteClassifierOptions::new("abc").with_header("X-Test", "yes"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(header_value(&received(&server).await[0], "x-test"), Some("yes"));
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let server = setup_mock_server().await;
    mock_with_auth("GET", "/v1/classifiers")
        .respond_with(error_response(
            500,
            serde_json::json!({"code": 500, "error": "Internal Server Error"}),
        ))
        .mount(&server)
        .await;

    let error = assert_err!(
        service(&server)
            .list_classifiers(ListClassifiersOptions::new())
            .await
    );

    match error {
        WatsonError::Api { status, message, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
            assert!(body.contains("Internal Server Error"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_error_sends_no_request() {
    let server = setup_mock_server().await;

    let error = assert_err!(
        service(&server)
            .classify(ClassifyOptions {
                classifier_id: Some("abc".to_string()),
                ..Default::default()
            })
            .await
    );

    assert!(matches!(error, WatsonError::Validation { .. }));
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn test_classify_collection_survives_echo() {
    let server = setup_mock_server().await;
    mock_with_auth("POST", "/v1/classifiers/abc/classify_collection")
        .respond_with(EchoJson)
        .mount(&server)
        .await;

    let phrases = vec!["How hot will it be today?", "Is it windy?"];
    let response = service(&server)
        .classify_collection(ClassifyCollectionOptions::new(
            "abc",
            phrases.iter().map(|text| ClassifyInput::new(*text)).collect(),
        ))
        .await
        .unwrap();

    let echoed: Vec<_> = response
        .result
        .collection
        .unwrap()
        .into_iter()
        .map(|item| item.text.unwrap())
        .collect();
    assert_eq!(echoed, phrases);
}

#[tokio::test]
async fn test_dot_segment_classifier_id_sends_no_request() {
    let server = setup_mock_server().await;

    for classifier_id in [".", ".."] {
        let error = assert_err!(
            service(&server)
                .delete_classifier(DeleteClassifierOptions::new(classifier_id))
                .await
        );
        assert!(matches!(error, WatsonError::Validation { .. }));
    }

    assert!(received(&server).await.is_empty());
}
