//! Configuration
//!
//! Typed application configuration and the Figment-based loader.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, credential_env_var, fill_credentials_from};
pub use types::{
    AppConfig, ChunkingConfig, EmbeddingConfig, GenerativeConfig, LoggingConfig, MarkupConfig,
    RetrievalConfig, VectorStoreConfig,
};
