//! Ollama Chat Provider
//!
//! Uses Ollama's non-streaming `/api/chat` endpoint against a local model.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use qag_domain::error::Result;
use qag_domain::ports::providers::GenerativeProvider;

use super::GenerationParams;
use crate::constants::CONTENT_TYPE_JSON;
use crate::utils::{ApiKind, HttpResponseUtils, map_send_error};

/// Generative provider backed by a local Ollama server
pub struct OllamaGenerativeProvider {
    base_url: String,
    model: String,
    params: GenerationParams,
    http_client: Client,
}

impl OllamaGenerativeProvider {
    /// Create a new Ollama chat provider
    pub fn new(
        base_url: String,
        model: String,
        params: GenerationParams,
        http_client: Client,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            params,
            http_client,
        }
    }
}

#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    stream: bool,
    messages: Vec<OllamaMessage<'a>>,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaReply,
}

#[derive(Debug, Deserialize)]
struct OllamaReply {
    content: String,
}

#[async_trait]
impl GenerativeProvider for OllamaGenerativeProvider {
    async fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        let body = OllamaChatRequest {
            model: &self.model,
            stream: false,
            messages: vec![
                OllamaMessage {
                    role: "system",
                    content: system_instruction,
                },
                OllamaMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            options: OllamaOptions {
                temperature: self.params.temperature,
                num_predict: self.params.max_tokens,
            },
        };

        let response = self
            .http_client
            .post(format!("{}/api/chat", self.base_url))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.params.timeout)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error(
                ApiKind::Generative,
                "Ollama",
                self.params.timeout,
            ))?;

        let parsed: OllamaChatResponse =
            HttpResponseUtils::check_and_parse(response, ApiKind::Generative, "Ollama").await?;
        Ok(parsed.message.content)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use qag_application::ports::registry::{
    GENERATIVE_PROVIDERS, GenerativeProviderConfig, GenerativeProviderEntry,
};

use crate::constants::{OLLAMA_DEFAULT_CHAT_MODEL, OLLAMA_DEFAULT_URL};
use crate::embedding::constructor;
use crate::utils::build_http_client;

fn ollama_factory(
    config: &GenerativeProviderConfig,
) -> std::result::Result<Arc<dyn GenerativeProvider>, String> {
    let base_url = constructor::get_effective_url(config.base_url.as_deref(), OLLAMA_DEFAULT_URL);
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OLLAMA_DEFAULT_CHAT_MODEL.to_string());
    let params = GenerationParams::from_config(config);
    let http_client = build_http_client(params.timeout)?;

    Ok(Arc::new(OllamaGenerativeProvider::new(
        base_url,
        model,
        params,
        http_client,
    )))
}

#[linkme::distributed_slice(GENERATIVE_PROVIDERS)]
static OLLAMA_PROVIDER: GenerativeProviderEntry = GenerativeProviderEntry {
    name: "ollama",
    description: "Ollama local chat models",
    factory: ollama_factory,
};
