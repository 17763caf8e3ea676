//! Use Case Implementations
//!
//! Every use case receives its collaborators through its constructor and
//! wraps each embedding or generative call in a deadline.

pub mod document_ingestion;
pub mod knowledge_base;
pub mod script_generation;
pub mod test_case_generation;

pub use document_ingestion::DocumentIngestionServiceImpl;
pub use knowledge_base::{KnowledgeBaseServiceImpl, KnowledgeBaseSettings};
pub use script_generation::{ScriptServiceImpl, ScriptSettings};
pub use test_case_generation::{TestCaseServiceImpl, TestCaseSettings};

use qag_domain::error::{Error, Result};
use std::future::Future;
use std::time::Duration;

/// Await a collaborator call, failing with [`Error::Timeout`] past `after`
///
/// The future is dropped on expiry, abandoning the in-flight call.
pub(crate) async fn with_deadline<T, F>(operation: &str, after: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(after, call)
        .await
        .map_err(|_| Error::timeout(operation, after))?
}
