use crate::error::Result;
use async_trait::async_trait;

/// Generative Model Interface
///
/// `(system_instruction, user_content) -> text`. The returned text is
/// untrusted: callers must parse it leniently.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Generate a completion for one system instruction and user message
    async fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String>;

    /// Model identifier
    fn model(&self) -> &str;

    /// Provider identifier (e.g., "openai", "anthropic", "ollama")
    fn provider_name(&self) -> &str;
}
