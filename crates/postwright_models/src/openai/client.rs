//! Direct chat-completions client.

use super::dto::ErrorEnvelope;
use crate::{ChatCompletionRequest, ChatCompletionResponse, Message, OpenAiConfig};
use async_trait::async_trait;
use postwright_error::{ProviderError, ProviderErrorKind, ProviderResult};
use postwright_interface::CompletionProvider;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// The credential is supplied per call, so one client serves every user of a relay.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a client with the given endpoint and sampling parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::Transport`] if the HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url(), model = %config.model()))]
    pub fn new(config: OpenAiConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| {
                error!(error = ?e, "Failed to build HTTP client");
                ProviderError::new(ProviderErrorKind::Transport(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        debug!("Created OpenAI client");
        Ok(Self { client, config })
    }

    /// Request parameters in use.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Build the request body for one brief.
    pub fn request_for(&self, prompt: &str, system_prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model().clone(),
            messages: vec![Message::system(system_prompt), Message::user(prompt)],
            max_tokens: Some(*self.config.max_tokens()),
            temperature: Some(*self.config.temperature()),
            top_p: Some(*self.config.top_p()),
            frequency_penalty: Some(*self.config.frequency_penalty()),
            presence_penalty: Some(*self.config.presence_penalty()),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    #[instrument(skip_all, fields(model = %self.config.model(), prompt_len = prompt.len()))]
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

        let request = self.request_for(prompt, system_prompt);
        debug!(url = %self.config.base_url(), "Sending chat completion request");

        let response = self
            .client
            .post(self.config.base_url())
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(ProviderError::status(status.as_u16(), message));
        }

        let response_text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response");
            ProviderError::new(ProviderErrorKind::Transport(format!(
                "Failed to read response: {}",
                e
            )))
        })?;

        let completion: ChatCompletionResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = ?e, "Failed to parse JSON");
                ProviderError::new(ProviderErrorKind::MalformedResponse(format!(
                    "Failed to parse JSON: {}",
                    e
                )))
            })?;

        match completion.first_content() {
            Some(content) if !content.is_empty() => {
                debug!(content_len = content.len(), "Chat completion successful");
                Ok(content.to_string())
            }
            _ => Err(ProviderError::new(ProviderErrorKind::EmptyContent)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
