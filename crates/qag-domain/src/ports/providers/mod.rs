//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`TextChunker`] | Splits document text into overlapping windows |
//! | [`EmbeddingProvider`] | Maps texts to fixed-dimension vectors |
//! | [`VectorStoreProvider`] | Persists vectors and answers filtered nearest-neighbour queries |
//! | [`GenerativeProvider`] | `(system_instruction, user_content) -> text` |
//! | [`GroundingExtractor`] | Extracts the interactive element inventory from markup |
//! | [`MarkupRepository`] | Keeps raw page markup per session |
//! | [`TextExtractor`] | Pulls plain text out of raw uploads |

/// Chunking port
pub mod chunking;
/// Embedding provider port
pub mod embedding;
/// Text extraction port
pub mod extraction;
/// Generative model port
pub mod generative;
/// Selector grounding port
pub mod grounding;
/// Session markup port
pub mod markup;
/// Vector store provider port
pub mod vector_store;

pub use chunking::{ChunkingOptions, TextChunker};
pub use embedding::EmbeddingProvider;
pub use extraction::TextExtractor;
pub use generative::GenerativeProvider;
pub use grounding::GroundingExtractor;
pub use markup::{MarkupRepository, StoredMarkup};
pub use vector_store::{VectorStoreAdmin, VectorStoreProvider};
