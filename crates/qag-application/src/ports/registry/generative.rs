//! Generative Provider Registry
//!
//! Auto-registration system for generative model providers using linkme
//! distributed slices.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::providers::GenerativeProvider;

/// Configuration for generative provider creation
#[derive(Debug, Clone, Default)]
pub struct GenerativeProviderConfig {
    /// Provider name (e.g., "openai", "groq", "anthropic", "ollama", "null")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Upper bound on generated tokens
    pub max_tokens: Option<u32>,
    /// HTTP request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl GenerativeProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the token limit
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the HTTP timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for generative providers
pub struct GenerativeProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&GenerativeProviderConfig) -> Result<Arc<dyn GenerativeProvider>, String>,
}

#[linkme::distributed_slice]
pub static GENERATIVE_PROVIDERS: [GenerativeProviderEntry] = [..];

/// Resolve generative provider by name from registry
pub fn resolve_generative_provider(
    config: &GenerativeProviderConfig,
) -> Result<Arc<dyn GenerativeProvider>, String> {
    let provider_name = &config.provider;

    for entry in GENERATIVE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = GENERATIVE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown generative provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered generative providers
pub fn list_generative_providers() -> Vec<(&'static str, &'static str)> {
    GENERATIVE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
