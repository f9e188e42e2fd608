use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use crate::client::GeminiClient;
use crate::config::GeminiSettings;
use crate::discovery::ModelCatalog;
use crate::error::GeneratorError;

use super::parsing::extract_json_payload;
use super::{FALLBACK_MODELS, PlanGenerator, candidate_models};

const PLAN_JSON: &str = r#"{"milestones":[],"tasks":[]}"#;

fn generator_for(server: &MockServer) -> PlanGenerator {
    let settings = GeminiSettings {
        api_key: "test-key".to_string(),
        base_url: server.url("/v1"),
        default_model: "gemini-1.5-flash".to_string(),
        timeout_secs: 5,
        user_agent: "stride/test".to_string(),
    };
    let client = GeminiClient::new(&settings).unwrap();
    let catalog = Arc::new(ModelCatalog::new(client.clone(), Duration::from_secs(300)));
    PlanGenerator::new(client, catalog, settings.default_model)
}

fn completion_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            {"content": {"parts": [{"text": text}]}}
        ]
    })
}

fn discovery_body(models: &[&str]) -> serde_json::Value {
    let models: Vec<_> = models
        .iter()
        .map(|name| {
            json!({
                "name": format!("models/{name}"),
                "supportedGenerationMethods": ["generateContent"]
            })
        })
        .collect();
    json!({ "models": models })
}

#[test]
fn candidate_list_puts_default_first_and_dedupes() {
    let discovered = vec![
        "gemini-1.5-flash".to_string(),
        "gemini-1.5-pro".to_string(),
    ];
    let candidates = candidate_models("gemini-1.5-flash", &discovered);
    assert_eq!(candidates, vec!["gemini-1.5-flash", "gemini-1.5-pro"]);
}

#[test]
fn candidate_list_caps_discovered_models_at_three() {
    let discovered: Vec<String> = (1..=5).map(|n| format!("gemini-exp-{n}")).collect();
    let candidates = candidate_models("gemini-1.5-flash", &discovered);
    assert_eq!(
        candidates,
        vec![
            "gemini-1.5-flash",
            "gemini-exp-1",
            "gemini-exp-2",
            "gemini-exp-3"
        ]
    );
}

#[test]
fn empty_discovery_substitutes_fixed_fallbacks() {
    let candidates = candidate_models("gemini-2.0-flash", &[]);
    assert_eq!(candidates.len(), 1 + FALLBACK_MODELS.len());
    assert_eq!(candidates[0], "gemini-2.0-flash");
    assert_eq!(candidates[1..], FALLBACK_MODELS.map(String::from));
}

#[test]
fn extraction_unwraps_tagged_code_fences() {
    let fenced = format!("```json\n{PLAN_JSON}\n```");
    assert_eq!(extract_json_payload(&fenced), PLAN_JSON);
    assert_eq!(extract_json_payload(PLAN_JSON), PLAN_JSON);
}

#[test]
fn extraction_unwraps_bare_code_fences() {
    let fenced = format!("```\n{PLAN_JSON}\n```");
    assert_eq!(extract_json_payload(&fenced), PLAN_JSON);
}

#[test]
fn extraction_cuts_surrounding_prose() {
    let wrapped = format!("Here is your plan:\n{PLAN_JSON}\nGood luck!");
    assert_eq!(extract_json_payload(&wrapped), PLAN_JSON);
}

#[test]
fn extraction_is_greedy_to_the_last_brace() {
    let two_objects = r#"{"a":1} and {"b":2}"#;
    assert_eq!(extract_json_payload(two_objects), two_objects);
}

#[test]
fn extraction_without_braces_returns_stripped_text() {
    assert_eq!(extract_json_payload("no json here"), "no json here");
    assert_eq!(extract_json_payload("```\nno json here\n```"), "no json here");
}

#[tokio::test]
async fn first_successful_candidate_short_circuits() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/models");
            then.status(200)
                .json_body(discovery_body(&["gemini-1.5-pro"]));
        })
        .await;
    let default_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/models/gemini-1.5-flash:generateContent");
            then.status(200)
                .json_body(completion_body(&format!("```json\n{PLAN_JSON}\n```")));
        })
        .await;
    let second_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/models/gemini-1.5-pro:generateContent");
            then.status(200).json_body(completion_body(PLAN_JSON));
        })
        .await;

    let generator = generator_for(&server);
    let payload = generator.generate("break down my goal").await.unwrap();

    assert_eq!(payload, PLAN_JSON);
    default_mock.assert_hits_async(1).await;
    second_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn failed_candidate_advances_to_the_next() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/models");
            then.status(200)
                .json_body(discovery_body(&["gemini-1.5-pro"]));
        })
        .await;
    let default_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/models/gemini-1.5-flash:generateContent");
            then.status(500).body("internal error");
        })
        .await;
    let second_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/models/gemini-1.5-pro:generateContent");
            then.status(200).json_body(completion_body(PLAN_JSON));
        })
        .await;

    let generator = generator_for(&server);
    let payload = generator.generate("break down my goal").await.unwrap();

    assert_eq!(payload, PLAN_JSON);
    default_mock.assert_hits_async(1).await;
    second_mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn response_without_text_part_counts_as_candidate_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/models");
            then.status(200)
                .json_body(discovery_body(&["gemini-1.5-pro"]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/models/gemini-1.5-flash:generateContent");
            then.status(200).json_body(json!({"candidates": []}));
        })
        .await;
    let second_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/models/gemini-1.5-pro:generateContent");
            then.status(200).json_body(completion_body(PLAN_JSON));
        })
        .await;

    let generator = generator_for(&server);
    let payload = generator.generate("break down my goal").await.unwrap();

    assert_eq!(payload, PLAN_JSON);
    second_mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn exhaustion_reports_every_attempted_candidate() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/models");
            then.status(503).body("listing down");
        })
        .await;
    let generation_mock = server
        .mock_async(|when, then| {
            when.method(POST).path_contains(":generateContent");
            then.status(500).body("internal error");
        })
        .await;

    let generator = generator_for(&server);
    let err = generator.generate("break down my goal").await.unwrap_err();

    let GeneratorError::Exhausted { attempted } = err;
    let mut expected = vec!["gemini-1.5-flash".to_string()];
    expected.extend(FALLBACK_MODELS.map(String::from));
    assert_eq!(attempted, expected);
    generation_mock.assert_hits_async(4).await;
}
