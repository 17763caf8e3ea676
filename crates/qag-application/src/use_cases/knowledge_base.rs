//! Knowledge Base Builder Use Case
//!
//! chunk → embed (batched) → attach metadata → insert, one document at a
//! time so a failing document never takes the rest of the batch with it.

use crate::ports::providers::{ChunkingOptions, EmbeddingProvider, TextChunker, VectorStoreProvider};
use crate::ports::services::{
    BuildReport, BuildStatus, KnowledgeBaseServiceInterface, RejectedChunk, SkippedDocument,
};
use crate::use_cases::with_deadline;
use qag_domain::constants::DEFAULT_EMBEDDING_BATCH_SIZE;
use qag_domain::entities::{Chunk, SourceDocument};
use qag_domain::error::{Error, Result};
use qag_domain::value_objects::{MetadataFilter, SessionId, VectorRecord};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tunables of the knowledge base builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeBaseSettings {
    /// Chunk window budget
    pub chunking: ChunkingOptions,
    /// Texts per embedding call
    pub batch_size: usize,
    /// Deadline for one embedding call
    pub embed_timeout: Duration,
}

impl Default for KnowledgeBaseSettings {
    fn default() -> Self {
        Self {
            chunking: ChunkingOptions::default(),
            batch_size: DEFAULT_EMBEDDING_BATCH_SIZE,
            embed_timeout: Duration::from_secs(30),
        }
    }
}

/// Accumulator for build progress and failures
struct BuildProgress {
    chunks_produced: usize,
    chunks_added: usize,
    skipped: Vec<SkippedDocument>,
    rejected: Vec<RejectedChunk>,
}

impl BuildProgress {
    fn new() -> Self {
        Self {
            chunks_produced: 0,
            chunks_added: 0,
            skipped: Vec::new(),
            rejected: Vec::new(),
        }
    }

    fn record_skip(&mut self, source: &str, error: impl std::fmt::Display) {
        warn!(source, error = %error, "Skipping document");
        self.skipped.push(SkippedDocument {
            source: source.to_string(),
            reason: error.to_string(),
        });
    }

    fn into_report(self) -> BuildReport {
        let status = if self.chunks_produced == 0 {
            BuildStatus::NoChunks
        } else if self.chunks_added == 0 {
            BuildStatus::Failed
        } else {
            BuildStatus::Ok
        };
        BuildReport {
            status,
            chunks_added: self.chunks_added,
            skipped: self.skipped,
            rejected: self.rejected,
        }
    }
}

/// Knowledge base builder - orchestrates chunking, embedding and storage
pub struct KnowledgeBaseServiceImpl {
    chunker: Arc<dyn TextChunker>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    settings: KnowledgeBaseSettings,
}

impl KnowledgeBaseServiceImpl {
    /// Create a builder with injected collaborators
    pub fn new(
        chunker: Arc<dyn TextChunker>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store_provider: Arc<dyn VectorStoreProvider>,
        settings: KnowledgeBaseSettings,
    ) -> Result<Self> {
        settings.chunking.validate()?;
        if settings.batch_size == 0 {
            return Err(Error::invalid_argument("embedding batch size must be at least 1"));
        }
        if embedding_provider.dimensions() != vector_store_provider.dimensions() {
            return Err(Error::config(format!(
                "embedding provider '{}' produces {} dimensions but vector store '{}' holds {}",
                embedding_provider.provider_name(),
                embedding_provider.dimensions(),
                vector_store_provider.provider_name(),
                vector_store_provider.dimensions()
            )));
        }
        Ok(Self {
            chunker,
            embedding_provider,
            vector_store_provider,
            settings,
        })
    }

    /// Cut a document into chunks owned by `session`
    fn chunk_document(&self, document: &SourceDocument, session: &SessionId) -> Result<Vec<Chunk>> {
        let pieces = self.chunker.chunk(&document.text, &self.settings.chunking)?;
        pieces
            .into_iter()
            .enumerate()
            .map(|(ordinal, text)| {
                let ordinal = u32::try_from(ordinal).map_err(|_| {
                    Error::ingestion(&document.source, "document produced too many chunks")
                })?;
                Ok(Chunk::new(
                    text,
                    &document.source,
                    document.doc_type,
                    ordinal,
                    session,
                ))
            })
            .collect()
    }

    /// Embed chunk texts in batches, never issuing an empty batch
    async fn embed_chunks(&self, chunks: &[Chunk]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(chunks.len());
        for batch in chunks.chunks(self.settings.batch_size) {
            let texts: Vec<String> = batch.iter().map(|c| c.text.clone()).collect();
            let embeddings = with_deadline(
                "embedding",
                self.settings.embed_timeout,
                self.embedding_provider.embed_batch(&texts),
            )
            .await?;
            if embeddings.len() != texts.len() {
                return Err(Error::embedding(format!(
                    "provider '{}' returned {} embeddings for {} texts",
                    self.embedding_provider.provider_name(),
                    embeddings.len(),
                    texts.len()
                )));
            }
            vectors.extend(embeddings.into_iter().map(|e| e.vector));
        }
        Ok(vectors)
    }

    /// Process one document end to end
    async fn index_document(
        &self,
        document: &SourceDocument,
        session: &SessionId,
        progress: &mut BuildProgress,
    ) {
        let chunks = match self.chunk_document(document, session) {
            Ok(chunks) => chunks,
            Err(e) => {
                progress.record_skip(&document.source, e);
                return;
            }
        };
        if chunks.is_empty() {
            debug!(source = %document.source, "Document produced no chunks");
            return;
        }
        progress.chunks_produced += chunks.len();

        let vectors = match self.embed_chunks(&chunks).await {
            Ok(vectors) => vectors,
            Err(e) => {
                progress.record_skip(&document.source, e);
                return;
            }
        };

        let records: Vec<VectorRecord> = chunks
            .iter()
            .zip(vectors)
            .map(|(chunk, vector)| VectorRecord::new(chunk.text.clone(), vector, chunk.metadata()))
            .collect();

        match self.vector_store_provider.insert(records).await {
            Ok(report) => {
                progress.chunks_added += report.accepted_count();
                progress
                    .rejected
                    .extend(report.rejected.into_iter().map(|r| RejectedChunk {
                        source: document.source.clone(),
                        chunk_index: chunks
                            .get(r.index)
                            .map_or(u32::MAX, |chunk| chunk.ordinal),
                        reason: r.reason,
                    }));
                debug!(
                    source = %document.source,
                    chunks = report.accepted.len(),
                    "Document committed"
                );
            }
            Err(e) => progress.record_skip(&document.source, e),
        }
    }
}

#[async_trait::async_trait]
impl KnowledgeBaseServiceInterface for KnowledgeBaseServiceImpl {
    async fn build(
        &self,
        documents: &[SourceDocument],
        session: &SessionId,
    ) -> Result<BuildReport> {
        let mut progress = BuildProgress::new();

        for document in documents {
            if document.is_blank() {
                debug!(source = %document.source, "Skipping blank document");
                continue;
            }
            self.index_document(document, session, &mut progress).await;
        }

        let report = progress.into_report();
        info!(
            session_id = %session,
            documents = documents.len(),
            chunks = report.chunks_added,
            skipped = report.skipped.len(),
            status = ?report.status,
            "Knowledge base build finished"
        );
        Ok(report)
    }

    async fn delete_session(&self, session: &SessionId) -> Result<usize> {
        let removed = self
            .vector_store_provider
            .delete_by_filter(&MetadataFilter::for_session(session))
            .await?;
        info!(session_id = %session, removed, "Session records deleted");
        Ok(removed)
    }

    async fn session_size(&self, session: &SessionId) -> Result<usize> {
        self.vector_store_provider
            .count(&MetadataFilter::for_session(session))
            .await
    }
}
