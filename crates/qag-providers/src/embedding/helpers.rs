//! Common helpers for embedding providers
//!
//! Shared functionality and patterns used across multiple embedding
//! provider implementations.

use qag_domain::error::{Error, Result};
use qag_domain::value_objects::Embedding;

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;

/// Common constructor patterns used by providers
pub mod constructor {
    use std::time::Duration;

    use super::DEFAULT_HTTP_TIMEOUT_SECS;

    /// Trim surrounding whitespace from an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Trim a URL and drop any trailing slash
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Timeout from configuration, or the default
    pub fn timeout_or_default(timeout_secs: Option<u64>) -> Duration {
        Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| default_url.to_string())
    }
}

/// Read an `"embedding"`-style JSON array into an [`Embedding`]
///
/// Every element must be a number; a vector of the wrong length is an
/// error so a misconfigured model is caught before anything is stored.
pub fn parse_embedding_array(
    value: &serde_json::Value,
    model: &str,
    expected_dimensions: usize,
    context: &str,
) -> Result<Embedding> {
    let values = value
        .as_array()
        .ok_or_else(|| Error::embedding(format!("Invalid embedding format for {context}")))?;

    let vector = values
        .iter()
        .map(|v| {
            v.as_f64()
                .map(|f| f as f32)
                .ok_or_else(|| Error::embedding(format!("Non-numeric embedding value in {context}")))
        })
        .collect::<Result<Vec<f32>>>()?;

    if vector.len() != expected_dimensions {
        return Err(Error::embedding(format!(
            "{context}: model {model} returned {} dimensions, expected {expected_dimensions}",
            vector.len()
        )));
    }

    Ok(Embedding::new(vector, model))
}
