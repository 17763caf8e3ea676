use crate::error::{Error, Result};
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text Embedding Interface
///
/// Maps texts to fixed-dimension vectors, one per input and in input order.
/// The dimension is constant for an instance, and batching never changes
/// the vector produced for a given text.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item.
///
/// # Example
///
/// ```ignore
/// let embedding = provider.embed("Discount code SAVE15 applies 15% off").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
///
/// let texts = vec!["first chunk".to_string(), "second chunk".to_string()];
/// let embeddings = provider.embed_batch(&texts).await?;
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of every embedding produced by this provider
    fn dimensions(&self) -> usize;

    /// Provider identifier (e.g., "openai", "ollama", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
