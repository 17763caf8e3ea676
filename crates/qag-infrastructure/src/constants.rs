//! Infrastructure constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration file name looked up in the default locations
pub const DEFAULT_CONFIG_FILENAME: &str = "qag.toml";

/// Directory holding the configuration file under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "qag";

/// Project-local configuration subdirectory
pub const PROJECT_CONFIG_DIR: &str = "config";

/// Prefix of configuration environment variables
pub const CONFIG_ENV_PREFIX: &str = "QAG";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CREDENTIALS
// ============================================================================

/// OpenAI API key variable
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Groq API key variable
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Anthropic API key variable
pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Default embedding provider
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "ollama";

/// Default vector store provider
pub const DEFAULT_VECTOR_STORE_PROVIDER: &str = "filesystem";

/// Default generative provider
pub const DEFAULT_GENERATIVE_PROVIDER: &str = "groq";

/// Default markup repository
pub const DEFAULT_MARKUP_PROVIDER: &str = "filesystem";

/// Default chunking strategy
pub const DEFAULT_CHUNKING_STRATEGY: &str = "boundary_aware";

/// Default deadline for one embedding call, in seconds
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

/// Default deadline for one generative call, in seconds
pub const DEFAULT_GENERATIVE_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "QAG_LOG";

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "qag";
