//! Campaign composer flow tests
//!
//! Drives the draft state machine end to end against mock OpenAI and
//! webhook servers: drafting → generated → approved → sent, plus the
//! invariants that block dispatch.

use mockito::Matcher;
use serde_json::json;

use campanhaspro::app::ai::OpenAiClient;
use campanhaspro::app::webhook::dispatch_campaign;
use campanhaspro::shared::error::AppError;
use campanhaspro::shared::model::{AudienceFilter, CampaignDraft, CampaignPhase};

fn chat_completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
    .to_string()
}

#[test]
fn test_generation_returns_first_choice_content() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "gpt-4", "max_tokens": 500})),
            Matcher::Regex("Desconto de 30%".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_completion_body("🔥 Só hoje: 30% OFF em tudo!"))
        .create();

    let client = OpenAiClient::new("sk-test").with_base_url(server.url());
    let message = client
        .generate_campaign_message("Desconto de 30% em todos os produtos")
        .unwrap();

    assert_eq!(message, "🔥 Só hoje: 30% OFF em tudo!");
    mock.assert();
}

#[test]
fn test_generation_error_maps_to_friendly_api_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body(json!({"error": {"message": "Incorrect API key"}}).to_string())
        .create();

    let client = OpenAiClient::new("sk-bad").with_base_url(server.url());
    let error = client.generate_campaign_message("qualquer").unwrap_err();
    assert!(matches!(error, AppError::Api { status: 401, .. }));
    assert!(error.notification_text().contains("chave"));
}

#[test]
fn test_generation_rejects_malformed_response() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": []}).to_string())
        .create();

    let client = OpenAiClient::new("sk-test").with_base_url(server.url());
    let error = client.generate_campaign_message("qualquer").unwrap_err();
    assert!(matches!(error, AppError::Serialization { .. }));
}

#[test]
fn test_dispatch_posts_the_full_payload() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "message": "🔥 Só hoje: 30% OFF em tudo!",
                "filter": "product",
                "productType": "eletronicos",
                "userEmail": "ana@email.com",
            })),
            Matcher::Regex("timestamp".to_string()),
        ]))
        .with_status(200)
        .create();

    let mut draft = CampaignDraft::new();
    draft.set_generated("🔥 Só hoje: 30% OFF em tudo!".to_string());
    draft.set_approved(true);
    draft.filter = AudienceFilter::Product;
    draft.product_type = "eletronicos".to_string();

    let payload = draft
        .build_payload("ana@email.com", &server.url())
        .unwrap();
    dispatch_campaign(&server.url(), &payload).unwrap();
    draft.mark_sent();

    assert_eq!(draft.phase(), CampaignPhase::Sent);
    mock.assert();
}

#[test]
fn test_dispatch_is_fire_and_forget_even_on_http_error() {
    // The webhook's answer is ignored; only a network failure counts.
    let mut server = mockito::Server::new();
    let _mock = server.mock("POST", "/").with_status(500).create();

    let mut draft = CampaignDraft::new();
    draft.set_generated("msg".to_string());
    draft.set_approved(true);
    let payload = draft.build_payload("ana@email.com", &server.url()).unwrap();

    assert!(dispatch_campaign(&server.url(), &payload).is_ok());
}

#[test]
fn test_dispatch_network_failure_keeps_draft_approved() {
    let mut draft = CampaignDraft::new();
    draft.set_generated("msg".to_string());
    draft.set_approved(true);

    let dead_url = "http://127.0.0.1:1/webhook";
    let payload = draft.build_payload("ana@email.com", dead_url).unwrap();
    let error = dispatch_campaign(dead_url, &payload).unwrap_err();

    assert!(matches!(error, AppError::Network { .. }));
    // The draft never advanced; the user may retry
    assert_eq!(draft.phase(), CampaignPhase::Approved);
}

#[test]
fn test_unapproved_draft_never_reaches_dispatch() {
    let mut draft = CampaignDraft::new();
    draft.set_generated("msg".to_string());

    assert!(draft.build_payload("ana@email.com", "http://127.0.0.1:9/hook").is_err());
    assert!(!draft.can_send("http://127.0.0.1:9/hook"));
    assert_eq!(draft.phase(), CampaignPhase::Generated);
}
