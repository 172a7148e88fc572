//! Collaborator traits.

use async_trait::async_trait;
use postwright_core::{DEFAULT_SYSTEM_PROMPT, Settings, SettingsUpdate};
use postwright_error::{PostwrightResult, ProviderResult};
use std::sync::Arc;

/// A remote text-completion service, invoked once per brief.
///
/// Implementations perform exactly one request/response cycle per call and must
/// fail distinctly for a missing credential, a transport failure, a non-success
/// status and an empty result.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate text for `prompt` under `system_prompt`, authenticated with `credential`.
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: &str,
        credential: &str,
    ) -> ProviderResult<String>;

    /// Provider name (e.g., "openai", "relay").
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<P: CompletionProvider + ?Sized> CompletionProvider for Arc<P> {
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: &str,
        credential: &str,
    ) -> ProviderResult<String> {
        (**self).complete(prompt, system_prompt, credential).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

#[async_trait]
impl<P: CompletionProvider + ?Sized> CompletionProvider for Box<P> {
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: &str,
        credential: &str,
    ) -> ProviderResult<String> {
        (**self).complete(prompt, system_prompt, credential).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

/// Persistent home of the user's [`Settings`].
///
/// `set` persists immediately; `get` reflects the latest persisted value,
/// including across process restarts for durable implementations.
pub trait SettingsStore: Send + Sync {
    /// Current settings, with defaults filled in for absent values.
    fn get(&self) -> PostwrightResult<Settings>;

    /// Apply and persist a partial update.
    fn set(&self, update: SettingsUpdate) -> PostwrightResult<()>;

    /// Restore the default system prompt, leaving the API key untouched.
    fn reset_system_prompt(&self) -> PostwrightResult<()> {
        self.set(SettingsUpdate::default().with_system_prompt(DEFAULT_SYSTEM_PROMPT))
    }
}
