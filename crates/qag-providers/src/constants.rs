//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in qag-domain) and infrastructure constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama default dimension
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

// ============================================================================
// HTTP API CONSTANTS
// ============================================================================

/// Content type for JSON requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// OpenAI API base URL
pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Groq OpenAI-compatible API base URL
pub const GROQ_API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Anthropic API base URL
pub const ANTHROPIC_API_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Anthropic API version header value
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Ollama server default URL
pub const OLLAMA_DEFAULT_URL: &str = "http://localhost:11434";

// ============================================================================
// GENERATIVE PROVIDER CONSTANTS
// ============================================================================

/// Default OpenAI chat model
pub const OPENAI_DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Default Groq chat model
pub const GROQ_DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default Anthropic model
pub const ANTHROPIC_DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";

/// Default Ollama chat model
pub const OLLAMA_DEFAULT_CHAT_MODEL: &str = "llama3.1";

/// Default sampling temperature; low to keep output close to the evidence
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Default generated token limit
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default generative HTTP timeout in seconds
pub const DEFAULT_GENERATIVE_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// VECTOR STORE PROVIDER CONSTANTS
// ============================================================================

/// Bytes per vector dimension (f32)
pub const FILESYSTEM_BYTES_PER_DIMENSION: usize = 4;

/// Segment file holding the record frames
pub const FILESYSTEM_SEGMENT_FILE: &str = "segment.log";

/// Manifest file recording dimension and metric
pub const FILESYSTEM_MANIFEST_FILE: &str = "manifest.json";

/// Manifest format version
pub const FILESYSTEM_FORMAT_VERSION: u32 = 1;

/// Default storage directory for the filesystem store
pub const FILESYSTEM_DEFAULT_PATH: &str = "./data/vectors";

// ============================================================================
// MARKUP REPOSITORY CONSTANTS
// ============================================================================

/// Default storage directory for session markup
pub const MARKUP_DEFAULT_PATH: &str = "./data/markup";

/// File extension of stored markup documents
pub const MARKUP_FILE_EXTENSION: &str = "html";
