//! In-memory markup repository

use std::collections::BTreeMap;

use async_trait::async_trait;
use dashmap::DashMap;
use qag_domain::error::Result;
use qag_domain::ports::providers::{MarkupRepository, StoredMarkup};
use qag_domain::value_objects::SessionId;

/// Markup kept in a concurrent map keyed by session
#[derive(Debug, Default)]
pub struct InMemoryMarkupRepository {
    sessions: DashMap<SessionId, BTreeMap<String, String>>,
}

impl InMemoryMarkupRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MarkupRepository for InMemoryMarkupRepository {
    async fn save(&self, session: &SessionId, source: &str, markup: &str) -> Result<()> {
        self.sessions
            .entry(session.clone())
            .or_default()
            .insert(source.to_string(), markup.to_string());
        Ok(())
    }

    async fn load(&self, session: &SessionId) -> Result<Vec<StoredMarkup>> {
        Ok(self
            .sessions
            .get(session)
            .map(|pages| {
                pages
                    .iter()
                    .map(|(source, markup)| StoredMarkup {
                        source: source.clone(),
                        markup: markup.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn delete_session(&self, session: &SessionId) -> Result<usize> {
        Ok(self
            .sessions
            .remove(session)
            .map_or(0, |(_, pages)| pages.len()))
    }
}
