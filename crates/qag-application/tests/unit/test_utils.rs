//! Shared collaborators for use case tests
//!
//! Real offline providers from `qag-providers`, plus a few embedders that
//! count, fail or stall on demand.

use async_trait::async_trait;
use qag_application::ports::providers::{ChunkingOptions, EmbeddingProvider};
use qag_application::use_cases::{KnowledgeBaseServiceImpl, KnowledgeBaseSettings};
use qag_domain::error::{Error, Result};
use qag_domain::value_objects::{DistanceMetric, Embedding, SessionId};
use qag_providers::chunking::TokenWindowChunker;
use qag_providers::embedding::NullEmbeddingProvider;
use qag_providers::vector_store::InMemoryVectorStoreProvider;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const DIMS: usize = 64;

pub fn session(id: &str) -> SessionId {
    SessionId::new(id).expect("valid session")
}

/// `n` whitespace-separated tokens `w0 .. w{n-1}`
pub fn words(n: usize) -> String {
    (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

pub fn store() -> Arc<InMemoryVectorStoreProvider> {
    Arc::new(InMemoryVectorStoreProvider::new(DIMS, DistanceMetric::Cosine))
}

pub fn settings(chunk_size: usize, overlap: usize, batch_size: usize) -> KnowledgeBaseSettings {
    KnowledgeBaseSettings {
        chunking: ChunkingOptions::new(chunk_size, overlap).expect("valid options"),
        batch_size,
        ..KnowledgeBaseSettings::default()
    }
}

pub fn knowledge_base(
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<InMemoryVectorStoreProvider>,
    settings: KnowledgeBaseSettings,
) -> KnowledgeBaseServiceImpl {
    KnowledgeBaseServiceImpl::new(Arc::new(TokenWindowChunker::new()), embedder, store, settings)
        .expect("compatible collaborators")
}

/// Null embedder that counts batches and texts
pub struct CountingEmbedder {
    inner: NullEmbeddingProvider,
    pub batches: AtomicUsize,
    pub texts: AtomicUsize,
}

impl CountingEmbedder {
    pub fn new() -> Self {
        Self {
            inner: NullEmbeddingProvider::with_dimensions(DIMS),
            batches: AtomicUsize::new(0),
            texts: AtomicUsize::new(0),
        }
    }

    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for CountingEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        self.texts.fetch_add(texts.len(), Ordering::SeqCst);
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        DIMS
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

/// Fails any batch containing the marker token
pub struct PoisonedEmbedder {
    inner: NullEmbeddingProvider,
    marker: &'static str,
}

impl PoisonedEmbedder {
    pub fn new(marker: &'static str) -> Self {
        Self {
            inner: NullEmbeddingProvider::with_dimensions(DIMS),
            marker,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for PoisonedEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.iter().any(|t| t.contains(self.marker)) {
            return Err(Error::embedding("service unavailable"));
        }
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        DIMS
    }

    fn provider_name(&self) -> &str {
        "poisoned"
    }
}

/// Never answers within any reasonable deadline
pub struct StalledEmbedder;

#[async_trait]
impl EmbeddingProvider for StalledEmbedder {
    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Embedding>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }

    fn dimensions(&self) -> usize {
        DIMS
    }

    fn provider_name(&self) -> &str {
        "stalled"
    }
}
