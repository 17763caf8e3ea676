//! Ollama Embedding Provider
//!
//! Implements the EmbeddingProvider port using Ollama's local embedding API.
//! Supports local embedding models like nomic-embed-text and all-minilm.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use qag_domain::error::{Error, Result};
use qag_domain::ports::providers::EmbeddingProvider;
use qag_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OLLAMA_DEFAULT, EMBEDDING_DIMENSION_OLLAMA_MINILM,
    EMBEDDING_DIMENSION_OLLAMA_MXBAI, EMBEDDING_DIMENSION_OLLAMA_NOMIC, OLLAMA_DEFAULT_URL,
};
use crate::embedding::helpers::{constructor, parse_embedding_array};
use crate::utils::{ApiKind, HttpResponseUtils, map_send_error};

/// Ollama embedding provider
///
/// Receives its HTTP client via constructor injection.
pub struct OllamaEmbeddingProvider {
    base_url: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl OllamaEmbeddingProvider {
    /// Create a new Ollama embedding provider
    ///
    /// # Arguments
    /// * `base_url` - Ollama server URL (e.g., "http://localhost:11434")
    /// * `model` - Model name (e.g., "nomic-embed-text")
    /// * `dimensions` - Override for models the provider does not know
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        model: String,
        dimensions: Option<usize>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let dimensions = dimensions.unwrap_or_else(|| Self::known_dimensions(&model));
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            dimensions,
            timeout,
            http_client,
        }
    }

    fn known_dimensions(model: &str) -> usize {
        match model {
            "nomic-embed-text" => EMBEDDING_DIMENSION_OLLAMA_NOMIC,
            "all-minilm" => EMBEDDING_DIMENSION_OLLAMA_MINILM,
            "mxbai-embed-large" => EMBEDDING_DIMENSION_OLLAMA_MXBAI,
            _ => EMBEDDING_DIMENSION_OLLAMA_DEFAULT,
        }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fetch embedding for a single text
    async fn fetch_single_embedding(&self, text: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": text,
            "stream": false
        });

        let response = self
            .http_client
            .post(format!("{}/api/embeddings", self.base_url))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(map_send_error(ApiKind::Embedding, "Ollama", self.timeout))?;

        HttpResponseUtils::check_and_parse(response, ApiKind::Embedding, "Ollama").await
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        // Ollama's embeddings endpoint takes one prompt per request
        let mut results = Vec::with_capacity(texts.len());
        for (i, text) in texts.iter().enumerate() {
            let response_data = self.fetch_single_embedding(text).await?;
            let embedding = response_data.get("embedding").ok_or_else(|| {
                Error::embedding("Invalid response format: missing embedding array")
            })?;
            results.push(parse_embedding_array(
                embedding,
                &self.model,
                self.dimensions,
                &format!("text {i}"),
            )?);
        }
        Ok(results)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use qag_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

use crate::utils::build_http_client;

/// Factory function for creating Ollama embedding provider instances.
fn ollama_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let base_url = constructor::get_effective_url(config.base_url.as_deref(), OLLAMA_DEFAULT_URL);
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| "nomic-embed-text".to_string());
    let timeout = constructor::timeout_or_default(config.timeout_secs);
    let http_client = build_http_client(timeout)?;

    Ok(Arc::new(OllamaEmbeddingProvider::new(
        base_url,
        model,
        config.dimensions,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "ollama",
    description: "Ollama local embedding provider (nomic-embed-text, all-minilm, etc.)",
    factory: ollama_factory,
};
