//! Client for a Postwright relay endpoint.

use async_trait::async_trait;
use postwright_error::{ProviderError, ProviderErrorKind, ProviderResult};
use postwright_interface::CompletionProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    /// Brief text
    pub brief: String,
    /// Upstream credential
    pub api_key: String,
    /// System prompt
    pub system_prompt: String,
}

/// Body returned by `POST /api/generate`; exactly one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    /// Generated post, on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Error message, on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    /// Successful response.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            error: None,
        }
    }

    /// Failure response.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            content: None,
            error: Some(error.into()),
        }
    }
}

/// Completion provider that forwards each brief to a relay.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    url: String,
}

impl RelayClient {
    /// Create a client for the relay at `url` (the full `/api/generate` URL).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::Transport`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> ProviderResult<Self> {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout.
    #[instrument(skip_all, fields(timeout_secs = timeout.as_secs()))]
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> ProviderResult<Self> {
        let url = url.into();

        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            ProviderError::new(ProviderErrorKind::Transport(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        debug!(url = %url, "Created relay client");
        Ok(Self { client, url })
    }

    /// Relay URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionProvider for RelayClient {
    #[instrument(skip_all, fields(url = %self.url, prompt_len = prompt.len()))]
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: &str,
        credential: &str,
    ) -> ProviderResult<String> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::MissingCredential));
        }

        let request = RelayRequest {
            brief: prompt.to_string(),
            api_key: credential.to_string(),
            system_prompt: system_prompt.to_string(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Relay request failed");
                ProviderError::new(ProviderErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        let payload: RelayResponse = response.json().await.map_err(|e| {
            error!(status = %status, error = ?e, "Failed to parse relay response");
            ProviderError::new(ProviderErrorKind::MalformedResponse(format!(
                "Failed to parse relay response: {}",
                e
            )))
        })?;

        if !status.is_success() {
            let message = payload.error.unwrap_or_default();
            error!(status = %status, error = %message, "Relay returned error");
            return Err(ProviderError::status(status.as_u16(), message));
        }

        match payload.content {
            Some(content) if !content.is_empty() => {
                debug!(content_len = content.len(), "Relay generation successful");
                Ok(content)
            }
            _ => Err(ProviderError::new(ProviderErrorKind::EmptyContent)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "relay"
    }
}
