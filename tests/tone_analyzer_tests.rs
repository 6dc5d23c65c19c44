//! Integration tests for Tone Analyzer v3.

mod common;

use common::*;
use integrations_watson::services::tone_analyzer::{ToneChatOptions, ToneOptions, Utterance};
use integrations_watson::{ToneAnalyzerService, ToneAnalyzerV3};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string, header, query_param};
use wiremock::MockServer;

const VERSION: &str = "2017-09-21";

fn service(server: &MockServer) -> ToneAnalyzerV3 {
    let config = against(ToneAnalyzerV3::config_builder(VERSION), server)
        .header("X-Watson-Learning-Opt-Out", "true")
        .build()
        .unwrap();
    ToneAnalyzerV3::new(config, basic_authenticator()).unwrap()
}

#[tokio::test]
async fn test_tone_plain_text() {
    let server = setup_mock_server().await;
    mock_with_auth("POST", "/v3/tone")
        .and(query_param("version", VERSION))
        .and(query_param("sentences", "false"))
        .and(header("Content-Type", "text/plain"))
        .and(header("X-Watson-Learning-Opt-Out", "true"))
        .and(body_string("I am very happy. It is a good day."))
        .respond_with(success_response(serde_json::json!({
            "document_tone": {
                "tones": [{"score": 0.875529, "tone_id": "joy", "tone_name": "Joy"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = service(&server)
        .tone(ToneOptions::text("I am very happy. It is a good day.").with_sentences(false))
        .await
        .unwrap();

    let tones = response.result.document_tone.tones.unwrap();
    assert_eq!(tones[0].tone_id, "joy");
    assert!(response.result.sentences_tone.is_none());
}

#[tokio::test]
async fn test_tone_json_with_tones_filter() {
    let server = setup_mock_server().await;
    mock_with_auth("POST", "/v3/tone")
        .and(query_param("tones", "emotion,social"))
        .and(header("Content-Type", "application/json"))
        .respond_with(success_response(serde_json::json!({
            "document_tone": {
                "tone_categories": [{
                    "category_id": "emotion_tone",
                    "category_name": "Emotion Tone",
                    "tones": [{"score": 0.1, "tone_id": "anger", "tone_name": "Anger"}]
                }]
            }
        })))
        .mount(&server)
        .await;

    let response = service(&server)
        .tone(
            ToneOptions::json("Team, I know that times are tough!")
                .with_tones(vec!["emotion".to_string(), "social".to_string()]),
        )
        .await
        .unwrap();

    let categories = response.result.document_tone.tone_categories.unwrap();
    assert_eq!(categories[0].category_id, "emotion_tone");
}

#[tokio::test]
async fn test_tone_chat() {
    let server = setup_mock_server().await;
    mock_with_auth("POST", "/v3/tone_chat")
        .and(header("Content-Language", "en"))
        .respond_with(success_response(serde_json::json!({
            "utterances_tone": [
                {
                    "utterance_id": 0,
                    "utterance_text": "Hello, I'm having a problem with your product.",
                    "tones": [{"score": 0.686361, "tone_id": "polite", "tone_name": "Polite"}]
                },
                {
                    "utterance_id": 1,
                    "utterance_text": "OK, let me know what's going on, please.",
                    "tones": []
                }
            ]
        })))
        .mount(&server)
        .await;

    let response = service(&server)
        .tone_chat(
            ToneChatOptions::new(vec![
                Utterance::new("Hello, I'm having a problem with your product.").with_user("customer"),
                Utterance::new("OK, let me know what's going on, please.").with_user("agent"),
            ])
            .with_content_language("en"),
        )
        .await
        .unwrap();

    assert_eq!(response.result.utterances_tone.len(), 2);
    assert!(response.result.utterances_tone[1].tones.is_empty());

    let body: serde_json::Value =
        serde_json::from_slice(&received(&server).await[0].body).unwrap();
    assert_eq!(body["utterances"][0]["user"], "customer");
}
