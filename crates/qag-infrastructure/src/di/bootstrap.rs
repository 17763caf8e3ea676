//! Application bootstrap
//!
//! ```text
//! AppConfig → resolvers → providers → use cases → AppContext
//! ```
//!
//! Providers are auto-registered via linkme distributed slices when
//! qag-providers is linked. No explicit registration call is needed.

use crate::config::AppConfig;
use crate::di::provider_resolvers::{
    resolve_embedding, resolve_generative, resolve_markup, resolve_text_chunker,
    resolve_vector_store,
};
use qag_application::ports::providers::{
    ChunkingOptions, EmbeddingProvider, GenerativeProvider, VectorStoreProvider,
};
use qag_application::ports::services::{
    DocumentIngestionServiceInterface, KnowledgeBaseServiceInterface, ScriptServiceInterface,
    TestCaseServiceInterface,
};
use qag_application::use_cases::{
    DocumentIngestionServiceImpl, KnowledgeBaseServiceImpl, KnowledgeBaseSettings,
    ScriptServiceImpl, ScriptSettings, TestCaseServiceImpl, TestCaseSettings,
};
use qag_domain::error::Result;
use qag_providers::extraction::BasicTextExtractor;
use qag_providers::grounding::HtmlGroundingExtractor;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Application context: configuration, resolved providers and use cases
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ========================================================================
    // Providers
    // ========================================================================
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    generative_provider: Arc<dyn GenerativeProvider>,

    // ========================================================================
    // Use Cases
    // ========================================================================
    knowledge_base: Arc<dyn KnowledgeBaseServiceInterface>,
    ingestion: Arc<dyn DocumentIngestionServiceInterface>,
    test_cases: Arc<dyn TestCaseServiceInterface>,
    scripts: Arc<dyn ScriptServiceInterface>,
}

impl AppContext {
    /// Get the embedding provider
    pub fn embedding(&self) -> Arc<dyn EmbeddingProvider> {
        self.embedding_provider.clone()
    }

    /// Get the vector store provider
    pub fn vector_store(&self) -> Arc<dyn VectorStoreProvider> {
        self.vector_store_provider.clone()
    }

    /// Get the generative provider
    pub fn generative(&self) -> Arc<dyn GenerativeProvider> {
        self.generative_provider.clone()
    }

    /// Get the knowledge base builder
    pub fn knowledge_base(&self) -> Arc<dyn KnowledgeBaseServiceInterface> {
        self.knowledge_base.clone()
    }

    /// Get the document ingestion service
    pub fn ingestion(&self) -> Arc<dyn DocumentIngestionServiceInterface> {
        self.ingestion.clone()
    }

    /// Get the test case generator
    pub fn test_cases(&self) -> Arc<dyn TestCaseServiceInterface> {
        self.test_cases.clone()
    }

    /// Get the script generator
    pub fn scripts(&self) -> Arc<dyn ScriptServiceInterface> {
        self.scripts.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("embedding", &self.embedding_provider.provider_name())
            .field("vector_store", &self.vector_store_provider.provider_name())
            .field("generative", &self.generative_provider.provider_name())
            .finish_non_exhaustive()
    }
}

/// Resolve providers from configuration and wire the use cases
///
/// Any resolution failure (unknown provider, missing credentials, store
/// manifest mismatch) is a configuration error.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let config = Arc::new(config);

    let embedding_provider = resolve_embedding(&config)?;
    let vector_store_provider = resolve_vector_store(&config, embedding_provider.dimensions())?;
    let generative_provider = resolve_generative(&config)?;
    let chunker = resolve_text_chunker(&config)?;
    let markup_repository = resolve_markup(&config.markup)?;

    info!(
        embedding = embedding_provider.provider_name(),
        vector_store = vector_store_provider.provider_name(),
        generative = generative_provider.provider_name(),
        chunker = chunker.strategy_name(),
        "Resolved providers"
    );

    let embed_timeout = Duration::from_secs(config.embedding.timeout_secs);
    let generate_timeout = Duration::from_secs(config.generative.timeout_secs);

    let knowledge_base: Arc<dyn KnowledgeBaseServiceInterface> =
        Arc::new(KnowledgeBaseServiceImpl::new(
            chunker,
            embedding_provider.clone(),
            vector_store_provider.clone(),
            KnowledgeBaseSettings {
                chunking: ChunkingOptions::new(config.chunking.chunk_size, config.chunking.overlap)?,
                batch_size: config.embedding.batch_size,
                embed_timeout,
            },
        )?);

    let ingestion: Arc<dyn DocumentIngestionServiceInterface> =
        Arc::new(DocumentIngestionServiceImpl::new(
            Arc::new(BasicTextExtractor::new()),
            markup_repository.clone(),
            knowledge_base.clone(),
        ));

    let test_cases: Arc<dyn TestCaseServiceInterface> = Arc::new(TestCaseServiceImpl::new(
        embedding_provider.clone(),
        vector_store_provider.clone(),
        generative_provider.clone(),
        TestCaseSettings {
            embed_timeout,
            generate_timeout,
            validate_grounding: config.retrieval.validate_grounding,
        },
    ));

    let scripts: Arc<dyn ScriptServiceInterface> = Arc::new(ScriptServiceImpl::new(
        markup_repository,
        Arc::new(HtmlGroundingExtractor::new()),
        generative_provider.clone(),
        ScriptSettings { generate_timeout },
    ));

    info!("Application context initialized");

    Ok(AppContext {
        config,
        embedding_provider,
        vector_store_provider,
        generative_provider,
        knowledge_base,
        ingestion,
        test_cases,
        scripts,
    })
}
