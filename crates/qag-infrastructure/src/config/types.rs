//! Configuration types
//!
//! Every section has a `Default` so a partial TOML file or a handful of
//! environment variables is enough to run.

use crate::constants::{
    DEFAULT_CHUNKING_STRATEGY, DEFAULT_EMBEDDING_PROVIDER, DEFAULT_EMBEDDING_TIMEOUT_SECS,
    DEFAULT_GENERATIVE_PROVIDER, DEFAULT_GENERATIVE_TIMEOUT_SECS, DEFAULT_LOG_LEVEL,
    DEFAULT_MARKUP_PROVIDER, DEFAULT_VECTOR_STORE_PROVIDER,
};
use qag_domain::constants::{
    DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_EMBEDDING_BATCH_SIZE, DEFAULT_TOP_K,
};
use qag_domain::value_objects::DistanceMetric;
use qag_providers::constants::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, FILESYSTEM_DEFAULT_PATH, MARKUP_DEFAULT_PATH,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Embedding provider
    pub embedding: EmbeddingConfig,
    /// Vector store provider
    pub vector_store: VectorStoreConfig,
    /// Generative model provider
    pub generative: GenerativeConfig,
    /// Chunking strategy and window budget
    pub chunking: ChunkingConfig,
    /// Retrieval and grounding checks
    pub retrieval: RetrievalConfig,
    /// Session markup storage
    pub markup: MarkupConfig,
    /// Logging
    pub logging: LoggingConfig,
}

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name (`null`, `openai`, `ollama`)
    pub provider: String,
    /// Model name; the provider default when unset
    pub model: Option<String>,
    /// Base URL of the provider API
    pub base_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Output dimension; inferred from the model when unset
    pub dimensions: Option<usize>,
    /// Texts per embedding call
    pub batch_size: usize,
    /// Deadline for one embedding call, in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            base_url: None,
            api_key: None,
            dimensions: None,
            batch_size: DEFAULT_EMBEDDING_BATCH_SIZE,
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}

/// Vector store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Registered provider name (`in_memory`, `filesystem`)
    pub provider: String,
    /// Storage directory of persistent stores
    pub path: PathBuf,
    /// Declared dimension; follows the embedding provider when unset
    pub dimensions: Option<usize>,
    /// Distance metric, fixed for the lifetime of a store
    pub metric: DistanceMetric,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_VECTOR_STORE_PROVIDER.to_string(),
            path: PathBuf::from(FILESYSTEM_DEFAULT_PATH),
            dimensions: None,
            metric: DistanceMetric::default(),
        }
    }
}

/// Generative model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerativeConfig {
    /// Registered provider name (`groq`, `openai`, `anthropic`, `ollama`, `null`)
    pub provider: String,
    /// Model name; the provider default when unset
    pub model: Option<String>,
    /// Base URL of the provider API
    pub base_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Generated token limit
    pub max_tokens: u32,
    /// Deadline for one generative call, in seconds
    pub timeout_secs: u64,
    /// Canned response of the `null` provider
    pub response: Option<String>,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_GENERATIVE_PROVIDER.to_string(),
            model: None,
            base_url: None,
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_GENERATIVE_TIMEOUT_SECS,
            response: None,
        }
    }
}

/// Chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Strategy name (`token_window`, `boundary_aware`)
    pub strategy: String,
    /// Maximum tokens per chunk
    pub chunk_size: usize,
    /// Tokens shared by consecutive chunks
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            strategy: DEFAULT_CHUNKING_STRATEGY.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Evidence items retrieved per query
    pub top_k: usize,
    /// Flag test cases citing sources outside the evidence
    pub validate_grounding: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            validate_grounding: true,
        }
    }
}

/// Session markup storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Repository kind (`filesystem`, `in_memory`)
    pub provider: String,
    /// Storage directory of the filesystem repository
    pub path: PathBuf,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_MARKUP_PROVIDER.to_string(),
            path: PathBuf::from(MARKUP_DEFAULT_PATH),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Log to a daily-rolling file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
