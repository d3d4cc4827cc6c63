use super::*;
use crate::config::ConfigError;
use crate::llm::config::{LlmConfig, LlmProviderKind};

#[test]
fn malformed_llm_variable_aborts_startup() {
    let err = ConfigError::Invalid { var: "GENERATE_MAX_TOKENS", value: "0".into() };
    assert!(matches!(live_llm(Err(err.into())), Err(LlmError::Config(_))));
}

#[test]
fn missing_key_leaves_generation_unavailable() {
    let result = live_llm(Err(LlmError::MissingApiKey { fallback: "ANTHROPIC_API_KEY" }));
    assert!(matches!(result, Ok(None)));
}

#[test]
fn configured_client_is_kept() {
    let client = LlmClient::from_config(&LlmConfig::new(LlmProviderKind::Anthropic, "k")).unwrap();
    let llm = live_llm(Ok(client)).unwrap().unwrap();
    assert_eq!(llm.model(), LlmProviderKind::Anthropic.default_model());
}
