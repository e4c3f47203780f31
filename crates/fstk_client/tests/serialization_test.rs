//! Tests for the chat completion request wire payload.
//!
//! The serialized key set must be exactly the required keys plus one key per
//! present optional field; absent optionals produce no key at all.

use fstk_client::to_chat_request;
use fstk_core::{ChatCompletionRequest, Message, Role};

fn minimal_request() -> ChatCompletionRequest {
    ChatCompletionRequest::builder()
        .model("gpt-5-nano")
        .messages(vec![Message::new(Role::User, "hi")])
        .build()
        .expect("valid request")
}

fn keys(value: &serde_json::Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("payload is a JSON object")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

#[test]
fn minimal_request_emits_exactly_the_required_keys() {
    let payload = serde_json::to_value(to_chat_request(&minimal_request())).expect("serializable");

    assert_eq!(keys(&payload), vec!["messages", "model", "stream"]);
    assert_eq!(payload["model"], "gpt-5-nano");
    assert_eq!(payload["stream"], false);
}

#[test]
fn messages_preserve_conversation_order() {
    let request = ChatCompletionRequest::builder()
        .model("gpt-5-nano")
        .messages(vec![
            Message::new(Role::System, "be brief"),
            Message::new(Role::User, "hi"),
            Message::new(Role::Assistant, "hello"),
            Message::new(Role::User, "bye"),
        ])
        .build()
        .expect("valid request");

    let payload = serde_json::to_value(to_chat_request(&request)).expect("serializable");
    let messages = payload["messages"].as_array().expect("messages array");

    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["content"], "hi");
    assert_eq!(messages[2]["role"], "assistant");
    assert_eq!(messages[3]["content"], "bye");
}

#[test]
fn each_optional_field_adds_exactly_its_own_key() {
    let with_temperature = ChatCompletionRequest::builder()
        .model("gpt-5-nano")
        .messages(vec![Message::new(Role::User, "hi")])
        .temperature(0.7f32)
        .build()
        .expect("valid request");
    let payload = serde_json::to_value(to_chat_request(&with_temperature)).expect("serializable");
    assert_eq!(keys(&payload), vec!["messages", "model", "stream", "temperature"]);
    assert!((payload["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);

    let with_top_p = ChatCompletionRequest::builder()
        .model("gpt-5-nano")
        .messages(vec![Message::new(Role::User, "hi")])
        .top_p(0.9f32)
        .build()
        .expect("valid request");
    let payload = serde_json::to_value(to_chat_request(&with_top_p)).expect("serializable");
    assert_eq!(keys(&payload), vec!["messages", "model", "stream", "top_p"]);

    let with_n = ChatCompletionRequest::builder()
        .model("gpt-5-nano")
        .messages(vec![Message::new(Role::User, "hi")])
        .n(2.0f32)
        .build()
        .expect("valid request");
    let payload = serde_json::to_value(to_chat_request(&with_n)).expect("serializable");
    assert_eq!(keys(&payload), vec!["messages", "model", "n", "stream"]);

    let with_max = ChatCompletionRequest::builder()
        .model("gpt-5-nano")
        .messages(vec![Message::new(Role::User, "hi")])
        .max_completion_tokens(256u32)
        .build()
        .expect("valid request");
    let payload = serde_json::to_value(to_chat_request(&with_max)).expect("serializable");
    assert_eq!(
        keys(&payload),
        vec!["max_completion_tokens", "messages", "model", "stream"]
    );
    assert_eq!(payload["max_completion_tokens"], 256);
}

#[test]
fn absent_optionals_are_never_null() {
    let payload =
        serde_json::to_string(&to_chat_request(&minimal_request())).expect("serializable");

    assert!(!payload.contains("null"));
    assert!(!payload.contains("temperature"));
    assert!(!payload.contains("top_p"));
    assert!(!payload.contains("max_completion_tokens"));
}

#[test]
fn end_to_end_scenario_body() {
    let payload =
        serde_json::to_value(to_chat_request(&minimal_request())).expect("serializable");
    let expected: serde_json::Value = serde_json::from_str(
        r#"{"model":"gpt-5-nano","stream":false,"messages":[{"role":"user","content":"hi"}]}"#,
    )
    .expect("valid JSON");

    assert_eq!(payload, expected);
}
