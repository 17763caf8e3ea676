//! Tests for the generative provider registry and the canned provider

use qag_application::ports::registry::{
    GenerativeProviderConfig, list_generative_providers, resolve_generative_provider,
};
use qag_domain::ports::providers::GenerativeProvider;
use qag_providers::generative::{GenerationParams, NullGenerativeProvider};

#[tokio::test]
async fn test_null_provider_returns_canned_response_and_records_prompts() {
    let provider = NullGenerativeProvider::with_response(r#"[{"Test_ID":"TC-001"}]"#);

    let reply = provider
        .generate("system rules", "user question")
        .await
        .expect("generation");

    assert_eq!(reply, r#"[{"Test_ID":"TC-001"}]"#);
    assert_eq!(
        provider.prompts(),
        vec![("system rules".to_string(), "user question".to_string())]
    );
}

#[test]
fn test_every_backend_is_registered() {
    let names: Vec<&str> = list_generative_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    for expected in ["openai", "groq", "anthropic", "ollama", "null"] {
        assert!(names.contains(&expected), "{expected} missing from {names:?}");
    }
}

#[test]
fn test_hosted_backends_require_api_key() {
    for name in ["openai", "groq", "anthropic"] {
        let err = resolve_generative_provider(&GenerativeProviderConfig::new(name))
            .err()
            .expect("missing key");
        assert!(err.contains("api_key"), "{name}: {err}");
    }
}

#[test]
fn test_groq_defaults_to_versatile_model() {
    let provider =
        resolve_generative_provider(&GenerativeProviderConfig::new("groq").with_api_key("gsk-test"))
            .expect("groq resolves");
    assert_eq!(provider.model(), "llama-3.3-70b-versatile");
    assert_eq!(provider.provider_name(), "groq");
}

#[test]
fn test_generation_params_default_to_low_temperature() {
    let params = GenerationParams::from_config(&GenerativeProviderConfig::new("openai"));
    assert!((params.temperature - 0.1).abs() < f32::EPSILON);

    let params = GenerationParams::from_config(
        &GenerativeProviderConfig::new("openai")
            .with_temperature(0.7)
            .with_timeout_secs(5),
    );
    assert!((params.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(params.timeout.as_secs(), 5);
}

#[test]
fn test_unknown_provider_lists_alternatives() {
    let err = resolve_generative_provider(&GenerativeProviderConfig::new("gpt-local"))
        .err()
        .expect("unknown provider");
    assert!(err.contains("Available providers"));
}
