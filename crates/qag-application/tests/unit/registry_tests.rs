//! Tests for provider registries
//!
//! Uses `extern crate qag_providers` to force linkme registration of real
//! providers, then resolves and exercises them by name.

// Force linkme registration of all providers from qag-providers
extern crate qag_providers;

use qag_application::ports::registry::embedding::*;
use qag_application::ports::registry::generative::*;
use qag_application::ports::registry::vector_store::*;
use qag_application::ports::providers::{
    EmbeddingProvider, GenerativeProvider, VectorStoreAdmin, VectorStoreProvider,
};
use qag_domain::value_objects::{DistanceMetric, MetadataFilter};

// ============================================================================
// Embedding Registry Tests
// ============================================================================

#[cfg(test)]
mod embedding_registry_tests {
    use super::*;

    #[test]
    fn test_list_providers_includes_builtins() {
        let names: Vec<&str> = list_embedding_providers().iter().map(|(n, _)| *n).collect();
        for expected in ["null", "openai", "ollama"] {
            assert!(names.contains(&expected), "missing '{expected}' in {names:?}");
        }
    }

    #[tokio::test]
    async fn test_resolve_null_provider_honours_dimensions() {
        let config = EmbeddingProviderConfig::new("null").with_dimensions(16);
        let provider = resolve_embedding_provider(&config).expect("null provider");

        assert_eq!(provider.provider_name(), "null");
        assert_eq!(provider.dimensions(), 16);
        let embedding = provider.embed("login form").await.expect("embed");
        assert_eq!(embedding.vector.len(), 16);
    }

    #[test]
    fn test_openai_requires_api_key() {
        let result = resolve_embedding_provider(&EmbeddingProviderConfig::new("openai"));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_provider_lists_available() {
        let Err(message) = resolve_embedding_provider(&EmbeddingProviderConfig::new("word2vec"))
        else {
            panic!("unknown provider resolved");
        };
        assert!(message.contains("word2vec"));
        assert!(message.contains("null"));
    }
}

// ============================================================================
// Vector Store Registry Tests
// ============================================================================

#[cfg(test)]
mod vector_store_registry_tests {
    use super::*;

    #[test]
    fn test_list_providers_includes_builtins() {
        let names: Vec<&str> = list_vector_store_providers().iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"in_memory"));
        assert!(names.contains(&"filesystem"));
    }

    #[tokio::test]
    async fn test_resolve_in_memory_store() {
        let config = VectorStoreProviderConfig::new("in_memory")
            .with_dimensions(8)
            .with_metric(DistanceMetric::Euclidean);
        let store = resolve_vector_store_provider(&config).expect("in_memory store");

        assert_eq!(store.provider_name(), "in_memory");
        assert_eq!(store.dimensions(), 8);
        assert_eq!(store.metric(), DistanceMetric::Euclidean);
        assert_eq!(store.count(&MetadataFilter::any()).await.expect("count"), 0);
    }

    #[test]
    fn test_in_memory_requires_dimensions() {
        let result = resolve_vector_store_provider(&VectorStoreProviderConfig::new("in_memory"));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_filesystem_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = VectorStoreProviderConfig::new("filesystem")
            .with_uri(dir.path().to_string_lossy())
            .with_dimensions(4);
        let store = resolve_vector_store_provider(&config).expect("filesystem store");
        assert_eq!(store.provider_name(), "filesystem");
    }
}

// ============================================================================
// Generative Registry Tests
// ============================================================================

#[cfg(test)]
mod generative_registry_tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = GenerativeProviderConfig::new("groq")
            .with_model("llama-3.3-70b-versatile")
            .with_api_key("secret")
            .with_temperature(0.2)
            .with_max_tokens(2048)
            .with_timeout_secs(45);

        assert_eq!(config.provider, "groq");
        assert_eq!(config.model.as_deref(), Some("llama-3.3-70b-versatile"));
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_tokens, Some(2048));
        assert_eq!(config.timeout_secs, Some(45));
    }

    #[test]
    fn test_list_providers_includes_builtins() {
        let names: Vec<&str> = list_generative_providers().iter().map(|(n, _)| *n).collect();
        for expected in ["null", "openai", "groq", "anthropic", "ollama"] {
            assert!(names.contains(&expected), "missing '{expected}' in {names:?}");
        }
    }

    #[tokio::test]
    async fn test_resolve_null_with_canned_response() {
        let config = GenerativeProviderConfig::new("null").with_extra("response", "[]\n");
        let provider = resolve_generative_provider(&config).expect("null provider");
        assert_eq!(provider.generate("sys", "user").await.expect("generate"), "[]\n");
    }

    #[test]
    fn test_hosted_providers_require_api_key() {
        for name in ["openai", "groq", "anthropic"] {
            let result = resolve_generative_provider(&GenerativeProviderConfig::new(name));
            assert!(result.is_err(), "'{name}' resolved without a key");
        }
    }

    #[test]
    fn test_hosted_provider_resolves_with_key() {
        let config = GenerativeProviderConfig::new("groq").with_api_key("gsk-test");
        let provider = resolve_generative_provider(&config).expect("groq provider");
        assert_eq!(provider.provider_name(), "groq");
        assert_eq!(provider.model(), "llama-3.3-70b-versatile");
    }
}
