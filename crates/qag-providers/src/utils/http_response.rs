//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use qag_domain::error::{Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Which error family a failing call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKind {
    /// Embedding API
    Embedding,
    /// Generative API
    Generative,
}

impl ApiKind {
    fn error(self, message: String) -> Error {
        match self {
            Self::Embedding => Error::embedding(message),
            Self::Generative => Error::generative(message),
        }
    }
}

/// Format a provider error message
fn api_error(kind: ApiKind, provider: &str, context: &str, details: &str) -> Error {
    kind.error(format!("{provider} {context}: {details}"))
}

/// Build an HTTP client with a request timeout
pub fn build_http_client(timeout: Duration) -> std::result::Result<Client, String> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))
}

/// Map a transport failure, reporting timeouts as [`Error::Timeout`]
pub fn map_send_error(
    kind: ApiKind,
    provider: &str,
    timeout: Duration,
) -> impl FnOnce(reqwest::Error) -> Error {
    move |e| {
        if e.is_timeout() {
            Error::timeout(format!("{provider} request"), timeout)
        } else {
            api_error(kind, provider, "HTTP request failed", &e.to_string())
        }
    }
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by API providers.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `kind` - Error family for failures
    /// * `provider_name` - Name of the provider for error messages
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        kind: ApiKind,
        provider_name: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => api_error(kind, provider_name, "authentication failed", &error_text),
                429 => api_error(kind, provider_name, "rate limit exceeded", &error_text),
                500..=599 => api_error(
                    kind,
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => api_error(
                    kind,
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| api_error(kind, provider_name, "response parse failed", &e.to_string()))
    }
}
