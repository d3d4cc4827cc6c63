use super::*;

#[test]
fn parse_text_reply() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "## 1. 核心创意\n..." },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let draft = parse_reply(&json).unwrap();
    assert_eq!(draft.text, "## 1. 核心创意\n...");
    assert_eq!(draft.model, "gpt-4o");
    assert!(!draft.truncated);
    assert_eq!(draft.usage, TokenUsage { input: 10, output: 5 });
}

#[test]
fn length_finish_is_truncated() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{ "message": { "content": "cut" }, "finish_reason": "length" }]
    })
    .to_string();
    let draft = parse_reply(&json).unwrap();
    assert!(draft.truncated);
    assert_eq!(draft.usage, TokenUsage::default());
}

#[test]
fn null_content_is_empty_text() {
    let json = serde_json::json!({
        "choices": [{ "message": { "content": null }, "finish_reason": "stop" }]
    })
    .to_string();
    assert_eq!(parse_reply(&json).unwrap().text, "");
}

#[test]
fn missing_choices_is_decode_error() {
    let json = serde_json::json!({ "model": "gpt-4o" }).to_string();
    let err = parse_reply(&json).unwrap_err();
    assert!(matches!(err, LlmError::Decode(ref msg) if msg.contains("no choices")));
}

#[test]
fn invalid_json_is_decode_error() {
    assert!(matches!(parse_reply("{").unwrap_err(), LlmError::Decode(_)));
}

#[test]
fn body_prepends_system_turn() {
    let request = DraftRequest { model: "gpt-4o", system: "sys", brief: "品牌片", max_tokens: 4096 };
    let json = serde_json::to_value(CompletionBody::new(&request)).unwrap();
    assert_eq!(json["max_tokens"], 4096);
    assert_eq!(
        json["messages"],
        serde_json::json!([
            { "role": "system", "content": "sys" },
            { "role": "user", "content": "品牌片" }
        ])
    );
}

#[test]
fn body_skips_blank_system() {
    let request = DraftRequest { model: "m", system: "  ", brief: "brief", max_tokens: 1 };
    let body = CompletionBody::new(&request);
    assert_eq!(body.messages.len(), 1);
    assert_eq!(body.messages[0].role, "user");
}

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(completions_endpoint("https://api.openai.com/v1"), "https://api.openai.com/v1/chat/completions");
    assert_eq!(completions_endpoint("https://gateway.test/v1/"), "https://gateway.test/v1/chat/completions");
}
