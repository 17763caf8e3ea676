//! Application Service Port Interfaces
//!
//! Contracts implemented by the use cases, together with the values they
//! return. Recoverable conditions (no evidence, unparseable model output,
//! missing page markup) are variants of these values rather than errors.

use async_trait::async_trait;
use qag_domain::entities::{ElementInventory, SourceDocument, TestCase};
use qag_domain::error::Result;
use qag_domain::value_objects::{DocumentType, RetrievedEvidence, SessionId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Knowledge Base Service Interface
// ============================================================================

/// Knowledge Base Builder Interface
///
/// Orchestrates chunk → embed → insert for a batch of documents under one
/// session.
#[async_trait]
pub trait KnowledgeBaseServiceInterface: Send + Sync {
    /// Index plain-text documents for a session
    ///
    /// A failing document is skipped and reported; the other documents are
    /// still committed.
    async fn build(&self, documents: &[SourceDocument], session: &SessionId)
    -> Result<BuildReport>;

    /// Remove every record of a session
    ///
    /// # Returns
    /// Number of removed records
    async fn delete_session(&self, session: &SessionId) -> Result<usize>;

    /// Number of records stored for a session
    async fn session_size(&self, session: &SessionId) -> Result<usize>;
}

/// Overall status of a knowledge base build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    /// At least one chunk was committed
    Ok,
    /// The documents produced no chunk at all; the embedder was not called
    NoChunks,
    /// Chunks were produced but none could be committed
    Failed,
}

/// A document left out of the knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    /// Document name
    pub source: String,
    /// Why it was skipped
    pub reason: String,
}

/// A chunk the vector store refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedChunk {
    /// Document the chunk belongs to
    pub source: String,
    /// Ordinal of the chunk within the document
    pub chunk_index: u32,
    /// Why the store rejected it
    pub reason: String,
}

/// Result of a knowledge base build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Overall status
    pub status: BuildStatus,
    /// Chunks committed to the store
    pub chunks_added: usize,
    /// Documents that failed extraction, chunking, embedding or storage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedDocument>,
    /// Individual chunks rejected by the store
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedChunk>,
}

impl BuildReport {
    /// Report for a build that produced no chunks
    pub fn no_chunks() -> Self {
        Self {
            status: BuildStatus::NoChunks,
            chunks_added: 0,
            skipped: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

// ============================================================================
// Document Ingestion Service Interface
// ============================================================================

/// A raw upload awaiting text extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Document name
    pub source: String,
    /// Raw file content
    pub bytes: Vec<u8>,
    /// Declared document type
    pub doc_type: DocumentType,
}

impl RawDocument {
    /// Create a raw document, inferring its type from the name
    pub fn from_named_bytes(source: impl Into<String>, bytes: Vec<u8>) -> Self {
        let source = source.into();
        let doc_type = DocumentType::from_path(&source);
        Self {
            source,
            bytes,
            doc_type,
        }
    }
}

/// Document Ingestion Interface
///
/// Extracts text from raw uploads, keeps HTML markup for script grounding
/// and hands the extracted text to the knowledge base builder.
#[async_trait]
pub trait DocumentIngestionServiceInterface: Send + Sync {
    /// Ingest raw uploads for a session
    async fn ingest(&self, uploads: Vec<RawDocument>, session: &SessionId) -> Result<BuildReport>;

    /// Drop the session's records and retained markup
    async fn reset_session(&self, session: &SessionId) -> Result<usize>;
}

// ============================================================================
// Test Case Service Interface
// ============================================================================

/// Outcome of retrieval-augmented test case generation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TestCaseOutcome {
    /// The model produced a parseable array (possibly empty)
    Generated {
        /// Parsed test cases
        test_cases: Vec<TestCase>,
        /// Evidence supplied to the model, nearest first
        evidence: Vec<RetrievedEvidence>,
        /// `Test_ID`s whose `Grounded_In` names no supplied source
        #[serde(skip_serializing_if = "Vec::is_empty")]
        ungrounded: Vec<String>,
    },
    /// Retrieval returned nothing for the session
    NoEvidence {
        /// Human-readable explanation
        error: String,
        /// Store failure, when retrieval itself failed
        #[serde(skip_serializing_if = "Option::is_none")]
        diagnostic: Option<String>,
    },
    /// The model's response held no usable array
    Unparseable {
        /// Human-readable explanation
        error: String,
        /// The model's response, verbatim
        raw_response: String,
    },
}

impl TestCaseOutcome {
    /// Parsed test cases, empty for every other outcome
    pub fn test_cases(&self) -> &[TestCase] {
        match self {
            Self::Generated { test_cases, .. } => test_cases,
            _ => &[],
        }
    }
}

/// Retrieval-Augmented Test Case Generator Interface
#[async_trait]
pub trait TestCaseServiceInterface: Send + Sync {
    /// Generate test cases for `query` from the session's `k` nearest chunks
    async fn generate_test_cases(
        &self,
        query: &str,
        session: &SessionId,
        k: usize,
    ) -> Result<TestCaseOutcome>;
}

// ============================================================================
// Script Service Interface
// ============================================================================

/// Outcome of grounded script generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScriptOutcome {
    /// A script was generated
    Generated {
        /// Python/Selenium source with code fences removed
        script: String,
        /// Selector inventory the model was constrained to
        inventory: ElementInventory,
        /// Ids or names referenced by the script but absent from the inventory
        #[serde(skip_serializing_if = "Vec::is_empty")]
        unknown_selectors: Vec<String>,
    },
    /// No page markup was ingested for the session
    NoGrounding {
        /// Human-readable explanation
        error: String,
    },
}

/// Grounded Script Generator Interface
#[async_trait]
pub trait ScriptServiceInterface: Send + Sync {
    /// Turn a test case into a Selenium script that only uses existing selectors
    async fn generate_script(&self, test_case: &TestCase, session: &SessionId)
    -> Result<ScriptOutcome>;

    /// Selector inventory extracted from the session's markup
    ///
    /// `None` when the session has no markup.
    async fn inventory(&self, session: &SessionId) -> Result<Option<ElementInventory>>;
}
