//! Round trip through a chat handle against a mock proxy.
//!
//! Exercises the full binding: URL composition, header resolution, model-id
//! injection, and classification of the proxy's JSON error envelope.

use ollm_provider::{OllmError, OllmProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_request(prompt: &str) -> async_openai::types::CreateChatCompletionRequest {
    use async_openai::types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    };
    CreateChatCompletionRequest {
        messages: vec![ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
                name: None,
            },
        )],
        ..Default::default()
    }
}

#[tokio::test]
async fn chat_create_round_trip() {
    let server = MockServer::start().await;

    let completion = json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000u64,
        "model": "phala/llama-3.3-70b-instruct",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "pong" },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": {
            "prompt_tokens": 9,
            "completion_tokens": 1,
            "total_tokens": 10
        }
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        // The handle injects its bound model identifier into the request.
        .and(body_partial_json(
            json!({ "model": "phala/llama-3.3-70b-instruct" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OllmProvider::builder()
        .api_key("sk-test")
        .base_url(server.uri())
        .build();
    let model = provider.chat_model("phala/llama-3.3-70b-instruct");

    let response = model.create(chat_request("ping")).await.unwrap();
    assert_eq!(response.model, "phala/llama-3.3-70b-instruct");
    assert_eq!(
        response.choices[0].message.content.as_deref(),
        Some("pong")
    );
}

#[tokio::test]
async fn proxy_error_envelope_maps_to_api_error() {
    let server = MockServer::start().await;

    let envelope = json!({
        "error": {
            "message": "Invalid API key provided",
            "type": "auth_error",
            "param": null,
            "code": "invalid_api_key"
        }
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(envelope))
        .mount(&server)
        .await;

    let provider = OllmProvider::builder()
        .api_key("sk-bad")
        .base_url(server.uri())
        .build();
    let model = provider.chat_model("gpt-4o");

    let err = model.create(chat_request("ping")).await.unwrap_err();
    match err {
        OllmError::ApiError {
            message,
            error_type,
            ..
        } => {
            // `error.message` is the canonical failure string.
            assert_eq!(message, "Invalid API key provided");
            assert_eq!(error_type.as_deref(), Some("auth_error"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn custom_transport_is_used_for_requests() {
    let server = MockServer::start().await;

    let completion = json!({
        "id": "chatcmpl-456",
        "object": "chat.completion",
        "created": 1_700_000_000u64,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "ok" },
            "finish_reason": "stop",
            "logprobs": null
        }]
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("x-injected-by-transport", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion))
        .expect(1)
        .mount(&server)
        .await;

    // The override carries its own default headers: observing them on the
    // wire proves requests went through the caller-supplied client.
    let mut default_headers = reqwest::header::HeaderMap::new();
    default_headers.insert("x-injected-by-transport", "1".parse().unwrap());
    let transport = reqwest::Client::builder()
        .default_headers(default_headers)
        .build()
        .unwrap();

    let provider = OllmProvider::builder()
        .api_key("sk-test")
        .base_url(server.uri())
        .fetch(transport)
        .build();

    let response = provider
        .chat_model("gpt-4o")
        .create(chat_request("ping"))
        .await
        .unwrap();
    assert_eq!(response.choices[0].message.content.as_deref(), Some("ok"));
}
