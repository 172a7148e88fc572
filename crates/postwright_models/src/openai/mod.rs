//! OpenAI chat-completions client.

mod client;
mod config;
mod dto;

pub use client::OpenAiClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiConfig, OpenAiConfigBuilder};
pub use dto::{ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, Message, Usage};
