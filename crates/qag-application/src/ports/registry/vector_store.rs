//! Vector Store Provider Registry
//!
//! Auto-registration system for vector store providers using linkme
//! distributed slices.

use std::collections::HashMap;
use std::sync::Arc;

use qag_domain::value_objects::DistanceMetric;

use crate::ports::providers::VectorStoreProvider;

/// Configuration for vector store provider creation
///
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct VectorStoreProviderConfig {
    /// Provider name (e.g., "filesystem", "in_memory")
    pub provider: String,
    /// Storage location (directory for file-backed stores)
    pub uri: Option<String>,
    /// Embedding dimensions; must match the embedder
    pub dimensions: Option<usize>,
    /// Distance metric, fixed for the store's lifetime
    pub metric: DistanceMetric,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl VectorStoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the distance metric
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for vector store providers
pub struct VectorStoreProviderEntry {
    /// Unique provider name (e.g., "filesystem", "in_memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&VectorStoreProviderConfig) -> Result<Arc<dyn VectorStoreProvider>, String>,
}

#[linkme::distributed_slice]
pub static VECTOR_STORE_PROVIDERS: [VectorStoreProviderEntry] = [..];

/// Resolve vector store provider by name from registry
pub fn resolve_vector_store_provider(
    config: &VectorStoreProviderConfig,
) -> Result<Arc<dyn VectorStoreProvider>, String> {
    let provider_name = &config.provider;

    for entry in VECTOR_STORE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    // List available providers for helpful error message
    let available: Vec<&str> = VECTOR_STORE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown vector store provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered vector store providers
pub fn list_vector_store_providers() -> Vec<(&'static str, &'static str)> {
    VECTOR_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
