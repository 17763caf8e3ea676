//! Anthropic Messages Provider

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use qag_domain::error::{Error, Result};
use qag_domain::ports::providers::GenerativeProvider;

use super::GenerationParams;
use crate::constants::{ANTHROPIC_API_VERSION, CONTENT_TYPE_JSON};
use crate::utils::{ApiKind, HttpResponseUtils, map_send_error};

/// Generative provider backed by the Anthropic messages API
pub struct AnthropicGenerativeProvider {
    api_key: String,
    base_url: String,
    model: String,
    params: GenerationParams,
    http_client: Client,
}

impl AnthropicGenerativeProvider {
    /// Create a new Anthropic provider
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        params: GenerationParams,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            params,
            http_client,
        }
    }
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: Vec<AnthropicContentBlock<'a>>,
}

#[derive(Serialize)]
struct AnthropicContentBlock<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AnthropicResponseBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[async_trait]
impl GenerativeProvider for AnthropicGenerativeProvider {
    async fn generate(&self, system_instruction: &str, user_content: &str) -> Result<String> {
        let body = AnthropicRequest {
            model: &self.model,
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            system: system_instruction,
            messages: vec![AnthropicMessage {
                role: "user",
                content: vec![AnthropicContentBlock {
                    kind: "text",
                    text: user_content,
                }],
            }],
        };

        let response = self
            .http_client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.params.timeout)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error(
                ApiKind::Generative,
                "Anthropic",
                self.params.timeout,
            ))?;

        let parsed: AnthropicResponse =
            HttpResponseUtils::check_and_parse(response, ApiKind::Generative, "Anthropic").await?;

        let answer = parsed
            .content
            .into_iter()
            .filter_map(|block| match block {
                AnthropicResponseBlock::Text { text } => Some(text),
                AnthropicResponseBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n");
        if answer.is_empty() {
            return Err(Error::generative("Anthropic response missing text content"));
        }
        Ok(answer)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use qag_application::ports::registry::{
    GENERATIVE_PROVIDERS, GenerativeProviderConfig, GenerativeProviderEntry,
};

use crate::constants::{ANTHROPIC_API_BASE_URL, ANTHROPIC_DEFAULT_MODEL};
use crate::embedding::constructor;
use crate::utils::build_http_client;

fn anthropic_factory(
    config: &GenerativeProviderConfig,
) -> std::result::Result<Arc<dyn GenerativeProvider>, String> {
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| "anthropic generative provider requires api_key".to_string())?;
    let base_url =
        constructor::get_effective_url(config.base_url.as_deref(), ANTHROPIC_API_BASE_URL);
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| ANTHROPIC_DEFAULT_MODEL.to_string());
    let params = GenerationParams::from_config(config);
    let http_client = build_http_client(params.timeout)?;

    Ok(Arc::new(AnthropicGenerativeProvider::new(
        api_key,
        base_url,
        model,
        params,
        http_client,
    )))
}

#[linkme::distributed_slice(GENERATIVE_PROVIDERS)]
static ANTHROPIC_PROVIDER: GenerativeProviderEntry = GenerativeProviderEntry {
    name: "anthropic",
    description: "Anthropic messages API",
    factory: anthropic_factory,
};
