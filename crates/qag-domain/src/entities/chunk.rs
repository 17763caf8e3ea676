//! Chunk Entity
//!
//! A chunk is the retrieval unit of the knowledge base: a bounded,
//! contiguous slice of one source document's text, owned by one session.

use crate::value_objects::{ChunkMetadata, DocumentType, SessionId};
use serde::{Deserialize, Serialize};

/// Plain-text document handed to the knowledge base builder
///
/// Text extraction from the raw upload happens before this point; `text`
/// is already de-structured content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceDocument {
    /// Document name, used as the `source` citation
    pub source: String,
    /// Extracted plain text
    pub text: String,
    /// Declared document type
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
}

impl SourceDocument {
    /// Create a new source document
    pub fn new(source: impl Into<String>, text: impl Into<String>, doc_type: DocumentType) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            doc_type,
        }
    }

    /// Whether the document carries no indexable text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Core Entity: Document Chunk
///
/// Immutable once created. Identity is `(session_id, source_document_id, ordinal)`.
///
/// ## Example
///
/// ```
/// use qag_domain::{Chunk, DocumentType, SessionId};
///
/// let session = SessionId::new("S1").unwrap();
/// let chunk = Chunk::new("Discount code SAVE15 gives 15% off", "spec.md", DocumentType::Text, 0, &session);
/// assert_eq!(chunk.identity(), ("S1", "spec.md", 0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Chunk text
    pub text: String,
    /// Source document the chunk was cut from
    pub source_document_id: String,
    /// Type of the source document
    pub document_type: DocumentType,
    /// Position of the chunk within its document
    pub ordinal: u32,
    /// Owning session
    pub session_id: SessionId,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(
        text: impl Into<String>,
        source_document_id: impl Into<String>,
        document_type: DocumentType,
        ordinal: u32,
        session_id: &SessionId,
    ) -> Self {
        Self {
            text: text.into(),
            source_document_id: source_document_id.into(),
            document_type,
            ordinal,
            session_id: session_id.clone(),
        }
    }

    /// Identity triple `(session_id, source_document_id, ordinal)`
    pub fn identity(&self) -> (&str, &str, u32) {
        (
            self.session_id.as_str(),
            &self.source_document_id,
            self.ordinal,
        )
    }

    /// Store metadata describing this chunk
    pub fn metadata(&self) -> ChunkMetadata {
        ChunkMetadata::new(
            self.source_document_id.clone(),
            self.document_type,
            self.ordinal,
            &self.session_id,
            self.text.chars().count(),
        )
    }
}
