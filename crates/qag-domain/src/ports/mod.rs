//! Domain Port Interfaces
//!
//! Boundary contracts between the pipeline and its collaborators. Use cases
//! receive implementations of these traits through their constructors.

/// External service provider ports
pub mod providers;

pub use providers::{
    ChunkingOptions, EmbeddingProvider, GenerativeProvider, GroundingExtractor, MarkupRepository,
    StoredMarkup, TextChunker, TextExtractor, VectorStoreAdmin, VectorStoreProvider,
};
