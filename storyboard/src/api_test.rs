use super::*;

#[test]
fn mode_serializes_lowercase() {
    let status = ServiceStatus { mode: GenerationMode::Live, model: Some("gpt-4o".into()) };
    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["mode"], "live");
    assert_eq!(json["model"], "gpt-4o");
}

#[test]
fn mode_parse_accepts_case_and_whitespace() {
    assert_eq!(GenerationMode::parse(" LIVE "), Some(GenerationMode::Live));
    assert_eq!(GenerationMode::parse("demo"), Some(GenerationMode::Demo));
    assert_eq!(GenerationMode::parse("offline"), None);
}

#[test]
fn mode_defaults_to_demo() {
    assert_eq!(GenerationMode::default(), GenerationMode::Demo);
    assert_eq!(GenerationMode::Demo.as_str(), "demo");
}

#[test]
fn footer_label_demo() {
    let status = ServiceStatus { mode: GenerationMode::Demo, model: None };
    assert_eq!(status.footer_label(), "Gemini 3 Flash Generation (Demo Mode)");
}

#[test]
fn footer_label_live_names_model() {
    let status = ServiceStatus { mode: GenerationMode::Live, model: Some("claude-sonnet-4-5".into()) };
    assert_eq!(status.footer_label(), "claude-sonnet-4-5 Generation");
}

#[test]
fn error_body_round_trips() {
    let raw = r#"{"message":"brief is empty","code":"E_EMPTY_BRIEF","retryable":false}"#;
    let body: ErrorBody = serde_json::from_str(raw).unwrap();
    assert_eq!(body.code, "E_EMPTY_BRIEF");
    assert!(!body.retryable);
}
