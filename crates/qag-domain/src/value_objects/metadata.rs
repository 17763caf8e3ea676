//! Store Metadata
//!
//! Metadata travels with every stored vector as a fixed schema rather than
//! an open map, so filter keys are checked by the compiler.

use crate::error::{Error, Result};
use crate::value_objects::SessionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Declared type of an ingested document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// PDF document
    Pdf,
    /// HTML page markup
    Html,
    /// JSON document
    Json,
    /// Plain text (also the fallback for unknown extensions)
    #[default]
    Text,
}

impl DocumentType {
    /// Infer the type from a file name's extension
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("pdf") => Self::Pdf,
            Some("html" | "htm") => Self::Html,
            Some("json") => Self::Json,
            _ => Self::Text,
        }
    }

    /// Lowercase type name as stored in metadata
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Html => "html",
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(Error::invalid_argument(format!(
                "unknown document type '{other}' (expected pdf, html, json or text)"
            ))),
        }
    }
}

/// Metadata stored with each embedding record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkMetadata {
    /// Source document name
    pub source: String,
    /// Source document type
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Ordinal of the chunk within its document
    pub chunk_index: u32,
    /// Owning session
    pub session_id: SessionId,
    /// Chunk length in characters
    #[serde(default)]
    pub chunk_size_est: usize,
}

impl ChunkMetadata {
    /// Create chunk metadata
    pub fn new(
        source: impl Into<String>,
        doc_type: DocumentType,
        chunk_index: u32,
        session_id: &SessionId,
        chunk_size_est: usize,
    ) -> Self {
        Self {
            source: source.into(),
            doc_type,
            chunk_index,
            session_id: session_id.clone(),
            chunk_size_est,
        }
    }
}

/// Exact-match predicate over [`ChunkMetadata`]
///
/// Unset fields match anything. An unrestricted filter matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetadataFilter {
    /// Required session
    pub session_id: Option<SessionId>,
    /// Required source document
    pub source: Option<String>,
    /// Required document type
    pub doc_type: Option<DocumentType>,
}

impl MetadataFilter {
    /// Filter matching every record
    pub fn any() -> Self {
        Self::default()
    }

    /// Filter restricted to one session
    pub fn for_session(session_id: &SessionId) -> Self {
        Self {
            session_id: Some(session_id.clone()),
            ..Self::default()
        }
    }

    /// Additionally require a source document
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Additionally require a document type
    pub fn with_doc_type(mut self, doc_type: DocumentType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    /// Whether no field is constrained
    pub fn is_unrestricted(&self) -> bool {
        self.session_id.is_none() && self.source.is_none() && self.doc_type.is_none()
    }

    /// Evaluate the predicate
    pub fn matches(&self, metadata: &ChunkMetadata) -> bool {
        self.session_id
            .as_ref()
            .is_none_or(|s| *s == metadata.session_id)
            && self.source.as_ref().is_none_or(|s| *s == metadata.source)
            && self.doc_type.is_none_or(|t| t == metadata.doc_type)
    }
}
