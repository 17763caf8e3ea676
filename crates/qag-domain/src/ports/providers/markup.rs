use crate::error::Result;
use crate::value_objects::SessionId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Raw page markup retained for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMarkup {
    /// Document name the markup was uploaded as
    pub source: String,
    /// Raw HTML
    pub markup: String,
}

/// Session Markup Repository
///
/// Keeps the raw HTML ingested for each session so script generation can
/// be grounded in the actual page. Saving the same source twice replaces
/// the earlier markup.
#[async_trait]
pub trait MarkupRepository: Send + Sync {
    /// Store markup for a session under a source name
    async fn save(&self, session: &SessionId, source: &str, markup: &str) -> Result<()>;

    /// All markup stored for a session, ordered by source name
    async fn load(&self, session: &SessionId) -> Result<Vec<StoredMarkup>>;

    /// Drop every markup document of a session
    ///
    /// # Returns
    /// Number of removed documents
    async fn delete_session(&self, session: &SessionId) -> Result<usize>;
}
