// Allow collapsible_if for complex conditional logic
#![allow(clippy::collapsible_if)]

//! # QA Grounding Engine - Provider Implementations
//!
//! Every user-selectable adapter lives here. Each implements a port defined
//! in `qag-domain`, and the embedding, vector store and generative providers
//! register themselves by name in the `qag-application` registries.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Chunking | `TextChunker` | TokenWindow, BoundaryAware |
//! | Embedding | `EmbeddingProvider` | OpenAI, Ollama, Null |
//! | Vector Store | `VectorStoreProvider` | InMemory, Filesystem |
//! | Generative | `GenerativeProvider` | OpenAI-compatible (OpenAI, Groq), Anthropic, Ollama, Null |
//! | Grounding | `GroundingExtractor` | Html |
//! | Markup | `MarkupRepository` | InMemory, Filesystem |
//! | Extraction | `TextExtractor` | Basic |
//!
//! ## Usage
//!
//! ```ignore
//! use qag_providers::embedding::NullEmbeddingProvider;
//! use qag_providers::vector_store::InMemoryVectorStoreProvider;
//! use qag_providers::chunking::TokenWindowChunker;
//! ```

// Re-export qag-domain types commonly used with providers
pub use qag_domain::error::{Error, Result};
pub use qag_domain::ports::providers::{
    EmbeddingProvider, GenerativeProvider, GroundingExtractor, MarkupRepository, TextChunker,
    TextExtractor, VectorStoreProvider,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Text chunking strategies
pub mod chunking;

/// Embedding provider implementations
pub mod embedding;

/// Vector store provider implementations
pub mod vector_store;

/// Generative model provider implementations
pub mod generative;

/// Selector grounding over HTML markup
pub mod grounding;

/// Session markup repositories
pub mod markup;

/// Plain-text extraction from raw uploads
pub mod extraction;
