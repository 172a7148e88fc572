//! Completion provider clients for Postwright.
//!
//! Two implementations of [`CompletionProvider`](postwright_interface::CompletionProvider):
//!
//! - [`OpenAiClient`] calls an OpenAI-compatible chat-completions endpoint directly.
//! - [`RelayClient`] posts to a Postwright relay (`POST /api/generate`), which
//!   holds the upstream call on the server side.
//!
//! Both perform exactly one HTTP round trip per call and never retry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;
mod relay;

pub use openai::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, DEFAULT_BASE_URL,
    DEFAULT_MODEL, Message, OpenAiClient, OpenAiConfig, OpenAiConfigBuilder, Usage,
};
pub use relay::{RelayClient, RelayRequest, RelayResponse};
