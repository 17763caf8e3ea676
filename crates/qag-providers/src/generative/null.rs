//! Null generative provider
//!
//! Returns a canned response and records every prompt it receives. Used
//! offline and in tests.

use async_trait::async_trait;
use std::sync::Mutex;

use qag_domain::error::Result;
use qag_domain::ports::providers::GenerativeProvider;

/// A (system instruction, user content) pair sent to the provider
pub type PromptRecord = (String, String);

/// Canned-response generative provider
#[derive(Debug)]
pub struct NullGenerativeProvider {
    response: String,
    prompts: Mutex<Vec<PromptRecord>>,
}

impl NullGenerativeProvider {
    /// Provider answering with an empty JSON array
    pub fn new() -> Self {
        Self::with_response("[]")
    }

    /// Provider answering every prompt with `response`
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<PromptRecord> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

impl Default for NullGenerativeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeProvider for NullGenerativeProvider {
    async fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push((system_instruction.to_string(), user_content.to_string()));
        }
        Ok(self.response.clone())
    }

    fn model(&self) -> &str {
        "null"
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use qag_application::ports::registry::{
    GENERATIVE_PROVIDERS, GenerativeProviderConfig, GenerativeProviderEntry,
};

fn null_factory(
    config: &GenerativeProviderConfig,
) -> std::result::Result<Arc<dyn GenerativeProvider>, String> {
    let provider = config
        .extra
        .get("response")
        .map_or_else(NullGenerativeProvider::new, NullGenerativeProvider::with_response);
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(GENERATIVE_PROVIDERS)]
static NULL_PROVIDER: GenerativeProviderEntry = GenerativeProviderEntry {
    name: "null",
    description: "Canned response for offline use and tests (defaults to [])",
    factory: null_factory,
};
