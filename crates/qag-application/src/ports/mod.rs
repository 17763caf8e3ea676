//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **providers** - External collaborator contracts (defined in `qag-domain`)
//! - **registry/** - Auto-registration system for plugin providers
//! - **services.rs** - Application service interfaces and their results

/// External service provider ports
pub use qag_domain::ports::providers;
/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use providers::{
    ChunkingOptions, EmbeddingProvider, GenerativeProvider, GroundingExtractor, MarkupRepository,
    StoredMarkup, TextChunker, TextExtractor, VectorStoreAdmin, VectorStoreProvider,
};
pub use registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, GenerativeProviderConfig,
    GenerativeProviderEntry, VectorStoreProviderConfig, VectorStoreProviderEntry,
    list_embedding_providers, list_generative_providers, list_vector_store_providers,
    resolve_embedding_provider, resolve_generative_provider, resolve_vector_store_provider,
};
pub use services::{
    BuildReport, BuildStatus, DocumentIngestionServiceInterface, KnowledgeBaseServiceInterface,
    RawDocument, RejectedChunk, ScriptOutcome, ScriptServiceInterface, SkippedDocument,
    TestCaseOutcome, TestCaseServiceInterface,
};
