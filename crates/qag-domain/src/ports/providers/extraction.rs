use crate::entities::SourceDocument;
use crate::error::Result;
use crate::value_objects::DocumentType;

/// Text Extraction Interface
///
/// Turns raw upload bytes of a declared type into a plain-text
/// [`SourceDocument`]. Unreadable or unsupported input is reported as
/// [`Error::Ingestion`](crate::Error::Ingestion).
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from raw bytes
    fn extract(&self, source: &str, bytes: &[u8], doc_type: DocumentType)
        -> Result<SourceDocument>;
}
