//! Generative Model Provider Implementations
//!
//! | Provider | API | Registered as |
//! |----------|-----|---------------|
//! | OpenAICompatibleChatProvider | `/chat/completions` | `openai`, `groq` |
//! | AnthropicGenerativeProvider | `/v1/messages` | `anthropic` |
//! | OllamaGenerativeProvider | `/api/chat` | `ollama` |
//! | NullGenerativeProvider | canned response | `null` |
//!
//! Every provider sends one system instruction and one user message and
//! returns the text of the reply untouched; parsing is the caller's job.

pub mod anthropic;
pub mod null;
pub mod ollama;
pub mod openai;

pub use anthropic::AnthropicGenerativeProvider;
pub use null::NullGenerativeProvider;
pub use ollama::OllamaGenerativeProvider;
pub use openai::OpenAICompatibleChatProvider;

use crate::constants::{DEFAULT_GENERATIVE_TIMEOUT_SECS, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use qag_application::ports::registry::GenerativeProviderConfig;
use std::time::Duration;

/// Sampling settings shared by the HTTP providers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_GENERATIVE_TIMEOUT_SECS),
        }
    }
}

impl GenerationParams {
    /// Parameters from registry configuration, defaulting unset values
    pub fn from_config(config: &GenerativeProviderConfig) -> Self {
        let defaults = Self::default();
        Self {
            temperature: config.temperature.unwrap_or(defaults.temperature),
            max_tokens: config.max_tokens.unwrap_or(defaults.max_tokens),
            timeout: config
                .timeout_secs
                .map_or(defaults.timeout, Duration::from_secs),
        }
    }
}
