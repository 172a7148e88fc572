//! Request parameters for the OpenAI client.

use serde::{Deserialize, Serialize};

/// Default chat-completions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Endpoint, model and sampling parameters for [`OpenAiClient`](crate::OpenAiClient).
///
/// Deserializes from the `[provider]` section of `postwright.toml`; missing keys
/// take the defaults below.
///
/// # Examples
///
/// ```
/// use postwright_models::{OpenAiConfig, OpenAiConfigBuilder};
///
/// let config = OpenAiConfig::default();
/// assert_eq!(config.model(), "gpt-4o-mini");
/// assert_eq!(*config.max_tokens(), 500);
///
/// let config = OpenAiConfigBuilder::default()
///     .model("gpt-4o")
///     .temperature(0.7)
///     .build()
///     .unwrap();
/// assert_eq!(config.model(), "gpt-4o");
/// assert_eq!(*config.top_p(), 1.0);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[serde(default)]
pub struct OpenAiConfig {
    /// Full chat-completions URL
    #[builder(setter(into), default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Model identifier
    #[builder(setter(into), default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Sampling temperature
    #[builder(default = "1.0")]
    temperature: f32,
    /// Maximum tokens per completion
    #[builder(default = "500")]
    max_tokens: u32,
    /// Nucleus sampling parameter
    #[builder(default = "1.0")]
    top_p: f32,
    /// Frequency penalty
    #[builder(default = "0.0")]
    frequency_penalty: f32,
    /// Presence penalty
    #[builder(default = "0.0")]
    presence_penalty: f32,
    /// Per-request timeout in seconds
    #[builder(default = "60")]
    timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 1.0,
            max_tokens: 500,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            timeout_secs: 60,
        }
    }
}
