//! Retrieval-Augmented Test Case Generation Use Case
//!
//! embed query → session-filtered nearest-neighbour query → labelled context
//! → generative call → tolerant parse. "No evidence" and "unparseable
//! response" are ordinary outcomes, not errors.

use crate::domain_services::{
    ParsedResponse, TEST_CASE_SYSTEM_PROMPT, build_test_case_prompt, parse_test_cases,
    ungrounded_test_ids,
};
use crate::ports::providers::{EmbeddingProvider, GenerativeProvider, VectorStoreProvider};
use crate::ports::services::{TestCaseOutcome, TestCaseServiceInterface};
use crate::use_cases::with_deadline;
use qag_domain::constants::{NO_EVIDENCE_MESSAGE, UNPARSEABLE_RESPONSE_MESSAGE};
use qag_domain::error::{Error, Result};
use qag_domain::value_objects::{MetadataFilter, SessionId};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tunables of the test case generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCaseSettings {
    /// Deadline for embedding the query
    pub embed_timeout: Duration,
    /// Deadline for the generative call
    pub generate_timeout: Duration,
    /// Flag test cases citing a source outside the evidence
    pub validate_grounding: bool,
}

impl Default for TestCaseSettings {
    fn default() -> Self {
        Self {
            embed_timeout: Duration::from_secs(30),
            generate_timeout: Duration::from_secs(60),
            validate_grounding: true,
        }
    }
}

/// Retrieval-augmented test case generator
pub struct TestCaseServiceImpl {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store_provider: Arc<dyn VectorStoreProvider>,
    generative_provider: Arc<dyn GenerativeProvider>,
    settings: TestCaseSettings,
}

impl TestCaseServiceImpl {
    /// Create a generator with injected collaborators
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store_provider: Arc<dyn VectorStoreProvider>,
        generative_provider: Arc<dyn GenerativeProvider>,
        settings: TestCaseSettings,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store_provider,
            generative_provider,
            settings,
        }
    }
}

#[async_trait::async_trait]
impl TestCaseServiceInterface for TestCaseServiceImpl {
    async fn generate_test_cases(
        &self,
        query: &str,
        session: &SessionId,
        k: usize,
    ) -> Result<TestCaseOutcome> {
        if query.trim().is_empty() {
            return Err(Error::invalid_argument("query must not be empty"));
        }
        if k == 0 {
            return Err(Error::invalid_argument("k must be at least 1"));
        }

        let query_embedding = with_deadline(
            "query embedding",
            self.settings.embed_timeout,
            self.embedding_provider.embed(query),
        )
        .await?;

        let evidence = match self
            .vector_store_provider
            .query(
                &query_embedding.vector,
                k,
                &MetadataFilter::for_session(session),
            )
            .await
        {
            Ok(evidence) => evidence,
            Err(e) => {
                warn!(session_id = %session, error = %e, "Retrieval failed");
                return Ok(TestCaseOutcome::NoEvidence {
                    error: NO_EVIDENCE_MESSAGE.to_string(),
                    diagnostic: Some(e.to_string()),
                });
            }
        };

        if evidence.is_empty() {
            info!(session_id = %session, "No evidence for query");
            return Ok(TestCaseOutcome::NoEvidence {
                error: NO_EVIDENCE_MESSAGE.to_string(),
                diagnostic: None,
            });
        }
        debug!(session_id = %session, evidence = evidence.len(), "Evidence retrieved");

        let user_prompt = build_test_case_prompt(query, &evidence);
        let raw_response = with_deadline(
            "test case generation",
            self.settings.generate_timeout,
            self.generative_provider
                .generate(TEST_CASE_SYSTEM_PROMPT, &user_prompt),
        )
        .await?;

        match parse_test_cases(&raw_response) {
            ParsedResponse::TestCases(test_cases) => {
                let ungrounded = if self.settings.validate_grounding {
                    ungrounded_test_ids(&test_cases, &evidence)
                } else {
                    Vec::new()
                };
                if !ungrounded.is_empty() {
                    warn!(
                        session_id = %session,
                        ungrounded = ?ungrounded,
                        "Test cases cite sources outside the evidence"
                    );
                }
                info!(
                    session_id = %session,
                    test_cases = test_cases.len(),
                    provider = self.generative_provider.provider_name(),
                    "Test cases generated"
                );
                Ok(TestCaseOutcome::Generated {
                    test_cases,
                    evidence,
                    ungrounded,
                })
            }
            ParsedResponse::Unparseable(raw_response) => {
                warn!(session_id = %session, "Generative response held no test case array");
                Ok(TestCaseOutcome::Unparseable {
                    error: UNPARSEABLE_RESPONSE_MESSAGE.to_string(),
                    raw_response,
                })
            }
        }
    }
}
