//! Unit tests for the embedding port default methods

use async_trait::async_trait;
use qag_domain::ports::EmbeddingProvider;
use qag_domain::{Embedding, Result};

struct LengthEmbedder;

#[async_trait]
impl EmbeddingProvider for LengthEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|t| Embedding::new(vec![t.len() as f32, 1.0], "length"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn provider_name(&self) -> &str {
        "length"
    }
}

struct EmptyEmbedder;

#[async_trait]
impl EmbeddingProvider for EmptyEmbedder {
    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(Vec::new())
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn provider_name(&self) -> &str {
        "empty"
    }
}

#[tokio::test]
async fn test_embed_delegates_to_batch() {
    let embedding = LengthEmbedder.embed("abcd").await.expect("embed");
    assert_eq!(embedding.vector, vec![4.0, 1.0]);
    assert_eq!(embedding.dimensions, 2);
    assert!(LengthEmbedder.health_check().await.is_ok());
}

#[tokio::test]
async fn test_embed_reports_missing_result() {
    let err = EmptyEmbedder.embed("abcd").await.expect_err("no embedding");
    assert!(err.to_string().contains("No embedding returned"));
}
