//! Document Ingestion Use Case
//!
//! Raw uploads → text extraction → knowledge base. HTML uploads are also
//! retained verbatim so scripts can be grounded in the page.

use crate::ports::providers::{MarkupRepository, TextExtractor};
use crate::ports::services::{
    BuildReport, DocumentIngestionServiceInterface, KnowledgeBaseServiceInterface, RawDocument,
    SkippedDocument,
};
use qag_domain::error::Result;
use qag_domain::value_objects::{DocumentType, SessionId};
use std::sync::Arc;
use tracing::{info, warn};

/// Ingestion front door for raw uploads
pub struct DocumentIngestionServiceImpl {
    text_extractor: Arc<dyn TextExtractor>,
    markup_repository: Arc<dyn MarkupRepository>,
    knowledge_base: Arc<dyn KnowledgeBaseServiceInterface>,
}

impl DocumentIngestionServiceImpl {
    /// Create the ingestion service with injected collaborators
    pub fn new(
        text_extractor: Arc<dyn TextExtractor>,
        markup_repository: Arc<dyn MarkupRepository>,
        knowledge_base: Arc<dyn KnowledgeBaseServiceInterface>,
    ) -> Self {
        Self {
            text_extractor,
            markup_repository,
            knowledge_base,
        }
    }
}

#[async_trait::async_trait]
impl DocumentIngestionServiceInterface for DocumentIngestionServiceImpl {
    async fn ingest(&self, uploads: Vec<RawDocument>, session: &SessionId) -> Result<BuildReport> {
        let mut documents = Vec::with_capacity(uploads.len());
        let mut skipped = Vec::new();

        for upload in uploads {
            let document = match self
                .text_extractor
                .extract(&upload.source, &upload.bytes, upload.doc_type)
            {
                Ok(document) => document,
                Err(e) => {
                    warn!(source = %upload.source, error = %e, "Text extraction failed");
                    skipped.push(SkippedDocument {
                        source: upload.source,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            // A page is indexed only once its markup is retained for scripts
            if upload.doc_type == DocumentType::Html {
                let markup = String::from_utf8_lossy(&upload.bytes);
                if let Err(e) = self
                    .markup_repository
                    .save(session, &upload.source, &markup)
                    .await
                {
                    warn!(source = %upload.source, error = %e, "Page markup not retained");
                    skipped.push(SkippedDocument {
                        source: upload.source,
                        reason: format!("page markup not retained: {e}"),
                    });
                    continue;
                }
            }
            documents.push(document);
        }

        let mut report = self.knowledge_base.build(&documents, session).await?;
        skipped.extend(report.skipped);
        report.skipped = skipped;
        Ok(report)
    }

    async fn reset_session(&self, session: &SessionId) -> Result<usize> {
        let removed = self.knowledge_base.delete_session(session).await?;
        let pages = self.markup_repository.delete_session(session).await?;
        info!(session_id = %session, removed, pages, "Session reset");
        Ok(removed)
    }
}
