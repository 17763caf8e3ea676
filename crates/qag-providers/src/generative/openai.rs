//! OpenAI-compatible Chat Completions Provider
//!
//! Speaks the `/chat/completions` protocol shared by OpenAI, Groq and
//! other compatible services; only the base URL, key and model differ.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use qag_domain::error::{Error, Result};
use qag_domain::ports::providers::GenerativeProvider;

use super::GenerationParams;
use crate::constants::CONTENT_TYPE_JSON;
use crate::utils::{ApiKind, HttpResponseUtils, map_send_error};

/// Chat completions provider for OpenAI-compatible endpoints
pub struct OpenAICompatibleChatProvider {
    provider_name: &'static str,
    api_key: String,
    base_url: String,
    model: String,
    params: GenerationParams,
    http_client: Client,
}

impl OpenAICompatibleChatProvider {
    /// Create a provider
    ///
    /// # Arguments
    /// * `provider_name` - Name reported in errors and logs ("openai", "groq")
    /// * `api_key` - Bearer token
    /// * `base_url` - API root, e.g. `https://api.openai.com/v1`
    /// * `model` - Chat model identifier
    /// * `params` - Sampling settings and timeout
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        provider_name: &'static str,
        api_key: String,
        base_url: String,
        model: String,
        params: GenerationParams,
        http_client: Client,
    ) -> Self {
        Self {
            provider_name,
            api_key: api_key.trim().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            params,
            http_client,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl GenerativeProvider for OpenAICompatibleChatProvider {
    async fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.params.timeout)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error(
                ApiKind::Generative,
                self.provider_name,
                self.params.timeout,
            ))?;

        let parsed: ChatResponse =
            HttpResponseUtils::check_and_parse(response, ApiKind::Generative, self.provider_name)
                .await?;

        parsed
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .ok_or_else(|| {
                Error::generative(format!("{} response missing message content", self.provider_name))
            })
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        self.provider_name
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use qag_application::ports::registry::{
    GENERATIVE_PROVIDERS, GenerativeProviderConfig, GenerativeProviderEntry,
};

use crate::constants::{
    GROQ_API_BASE_URL, GROQ_DEFAULT_CHAT_MODEL, OPENAI_API_BASE_URL, OPENAI_DEFAULT_CHAT_MODEL,
};
use crate::embedding::constructor;
use crate::utils::build_http_client;

fn build_compatible(
    provider_name: &'static str,
    default_base_url: &str,
    default_model: &str,
    config: &GenerativeProviderConfig,
) -> std::result::Result<Arc<dyn GenerativeProvider>, String> {
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| format!("{provider_name} generative provider requires api_key"))?;
    let base_url = constructor::get_effective_url(config.base_url.as_deref(), default_base_url);
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| default_model.to_string());
    let params = GenerationParams::from_config(config);
    let http_client = build_http_client(params.timeout)?;

    Ok(Arc::new(OpenAICompatibleChatProvider::new(
        provider_name,
        api_key,
        base_url,
        model,
        params,
        http_client,
    )))
}

fn openai_factory(
    config: &GenerativeProviderConfig,
) -> std::result::Result<Arc<dyn GenerativeProvider>, String> {
    build_compatible("openai", OPENAI_API_BASE_URL, OPENAI_DEFAULT_CHAT_MODEL, config)
}

fn groq_factory(
    config: &GenerativeProviderConfig,
) -> std::result::Result<Arc<dyn GenerativeProvider>, String> {
    build_compatible("groq", GROQ_API_BASE_URL, GROQ_DEFAULT_CHAT_MODEL, config)
}

#[linkme::distributed_slice(GENERATIVE_PROVIDERS)]
static OPENAI_PROVIDER: GenerativeProviderEntry = GenerativeProviderEntry {
    name: "openai",
    description: "OpenAI chat completions (any OpenAI-compatible base URL)",
    factory: openai_factory,
};

#[linkme::distributed_slice(GENERATIVE_PROVIDERS)]
static GROQ_PROVIDER: GenerativeProviderEntry = GenerativeProviderEntry {
    name: "groq",
    description: "Groq chat completions (llama-3.3-70b-versatile by default)",
    factory: groq_factory,
};
