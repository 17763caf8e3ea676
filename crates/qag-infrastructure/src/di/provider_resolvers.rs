//! Provider Resolvers
//!
//! Translate configuration sections into registry configs and resolve them.
//!
//! ```text
//! AppConfig → *ProviderConfig → linkme registry → Arc<dyn Provider>
//! ```

use crate::config::{AppConfig, EmbeddingConfig, GenerativeConfig, MarkupConfig, VectorStoreConfig};
use qag_application::ports::providers::{
    EmbeddingProvider, GenerativeProvider, MarkupRepository, TextChunker, VectorStoreProvider,
};
use qag_application::ports::registry::{
    EmbeddingProviderConfig, GenerativeProviderConfig, VectorStoreProviderConfig,
    resolve_embedding_provider, resolve_generative_provider, resolve_vector_store_provider,
};
use qag_domain::error::{Error, Result};
use qag_providers::chunking::resolve_chunker;
use qag_providers::markup::{FilesystemMarkupRepository, InMemoryMarkupRepository};
use std::sync::Arc;

/// Registry config for the embedding section
pub fn embedding_registry_config(config: &EmbeddingConfig) -> EmbeddingProviderConfig {
    let mut registry = EmbeddingProviderConfig::new(&config.provider)
        .with_timeout_secs(config.timeout_secs);
    registry.model.clone_from(&config.model);
    registry.api_key.clone_from(&config.api_key);
    registry.base_url.clone_from(&config.base_url);
    registry.dimensions = config.dimensions;
    registry
}

/// Registry config for the vector store section
///
/// An unset dimension follows the embedding provider.
pub fn vector_store_registry_config(
    config: &VectorStoreConfig,
    embedding_dimensions: usize,
) -> VectorStoreProviderConfig {
    VectorStoreProviderConfig::new(&config.provider)
        .with_uri(config.path.to_string_lossy())
        .with_dimensions(config.dimensions.unwrap_or(embedding_dimensions))
        .with_metric(config.metric)
}

/// Registry config for the generative section
pub fn generative_registry_config(config: &GenerativeConfig) -> GenerativeProviderConfig {
    let mut registry = GenerativeProviderConfig::new(&config.provider)
        .with_temperature(config.temperature)
        .with_max_tokens(config.max_tokens)
        .with_timeout_secs(config.timeout_secs);
    registry.model.clone_from(&config.model);
    registry.api_key.clone_from(&config.api_key);
    registry.base_url.clone_from(&config.base_url);
    if let Some(response) = &config.response {
        registry = registry.with_extra("response", response);
    }
    registry
}

/// Resolve the configured embedding provider
pub fn resolve_embedding(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    resolve_embedding_provider(&embedding_registry_config(&config.embedding))
        .map_err(|e| Error::config(format!("Embedding: {e}")))
}

/// Resolve the configured vector store for a given embedding dimension
pub fn resolve_vector_store(
    config: &AppConfig,
    embedding_dimensions: usize,
) -> Result<Arc<dyn VectorStoreProvider>> {
    resolve_vector_store_provider(&vector_store_registry_config(
        &config.vector_store,
        embedding_dimensions,
    ))
    .map_err(|e| Error::config(format!("VectorStore: {e}")))
}

/// Resolve the configured generative provider
pub fn resolve_generative(config: &AppConfig) -> Result<Arc<dyn GenerativeProvider>> {
    resolve_generative_provider(&generative_registry_config(&config.generative))
        .map_err(|e| Error::config(format!("Generative: {e}")))
}

/// Resolve the configured chunking strategy
pub fn resolve_text_chunker(config: &AppConfig) -> Result<Arc<dyn TextChunker>> {
    resolve_chunker(&config.chunking.strategy)
}

/// Build the configured markup repository
pub fn resolve_markup(config: &MarkupConfig) -> Result<Arc<dyn MarkupRepository>> {
    match config.provider.as_str() {
        "filesystem" => Ok(Arc::new(FilesystemMarkupRepository::new(&config.path))),
        "in_memory" => Ok(Arc::new(InMemoryMarkupRepository::new())),
        other => Err(Error::config(format!(
            "Markup: unknown repository '{other}' (expected filesystem or in_memory)"
        ))),
    }
}
