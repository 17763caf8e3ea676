//! Domain layer constants
//!
//! Defaults shared by the application layer and the configuration layer.

// ============================================================================
// CHUNKING DOMAIN CONSTANTS
// ============================================================================

/// Default chunk window size, in whitespace-delimited tokens
pub const DEFAULT_CHUNK_SIZE: usize = 800;

/// Default overlap between consecutive chunk windows, in tokens
pub const DEFAULT_CHUNK_OVERLAP: usize = 150;

// ============================================================================
// INGESTION DOMAIN CONSTANTS
// ============================================================================

/// Default number of chunk texts sent to the embedder per call
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 64;

// ============================================================================
// RETRIEVAL DOMAIN CONSTANTS
// ============================================================================

/// Default number of evidence items retrieved per query
pub const DEFAULT_TOP_K: usize = 5;

/// Metadata key holding the tenant identifier
pub const METADATA_SESSION_ID: &str = "session_id";

/// Source label used when a document carries no name
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Message returned when retrieval yields no evidence for a session
pub const NO_EVIDENCE_MESSAGE: &str = "No relevant documents found in Knowledge Base.";

/// Message attached to an unparseable generative response
pub const UNPARSEABLE_RESPONSE_MESSAGE: &str = "Failed to parse LLM response";
