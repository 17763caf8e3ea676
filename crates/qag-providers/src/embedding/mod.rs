//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings for semantic retrieval.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Offline / Testing | Complete |
//! | OllamaEmbeddingProvider | Local | Complete |
//! | OpenAIEmbeddingProvider | Cloud | Complete |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: `NullEmbeddingProvider` hashes tokens into a
//!   fixed-size vector, so texts sharing words land near each other without
//!   any model.
//! - **Local/Privacy-First**: Ollama with an embedding model.
//! - **Cloud**: OpenAI (or any OpenAI-compatible `/embeddings` endpoint).

pub mod helpers;
pub mod null;
pub mod ollama;
pub mod openai;

// Re-export for convenience
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
pub use ollama::OllamaEmbeddingProvider;
pub use openai::OpenAIEmbeddingProvider;
