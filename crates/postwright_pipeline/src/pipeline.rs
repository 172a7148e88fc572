//! Sequential batch driver.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use postwright_core::{Batch, Brief, Settings};
use postwright_error::{ConfigError, EMPTY_CONTENT_MESSAGE};
use postwright_interface::{BatchObserver, CompletionProvider};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Banner message when a batch is started without an API key.
pub const MISSING_API_KEY_MESSAGE: &str = "Please set your OpenAI API key in settings";

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Drives one completion call per brief, in order, one at a time.
///
/// Provider failures never abort a batch: each is captured into the record of
/// the brief that caused it and the pipeline moves on.
pub struct GenerationPipeline<P> {
    provider: P,
    throttle: Option<Arc<DirectRateLimiter>>,
}

impl<P: CompletionProvider> GenerationPipeline<P> {
    /// Create an unthrottled pipeline around a provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            throttle: None,
        }
    }

    /// Wait on a rate limiter before every dispatch. Zero means unlimited.
    pub fn with_requests_per_minute(mut self, requests_per_minute: u32) -> Self {
        self.throttle = NonZeroU32::new(requests_per_minute).map(|n| {
            let quota = Quota::per_minute(n);
            Arc::new(RateLimiter::direct(quota))
        });
        self
    }

    /// The provider this pipeline calls.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Check that a batch may start with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the API key is blank.
    #[track_caller]
    pub fn preflight(settings: &Settings) -> Result<(), ConfigError> {
        if settings.has_api_key() {
            Ok(())
        } else {
            Err(ConfigError::new(MISSING_API_KEY_MESSAGE))
        }
    }

    /// Generate one post per brief.
    ///
    /// The all-pending batch is published before any provider call, then the
    /// batch is published again after each record becomes terminal. Settings are
    /// taken by value, so edits made while the batch runs do not affect it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the API key is blank. In that case no record
    /// is created, nothing is published and the provider is never called. Once
    /// the batch has started the pipeline always returns the final batch.
    #[tracing::instrument(
        skip_all,
        fields(briefs = briefs.len(), provider = self.provider.provider_name())
    )]
    pub async fn run<O>(
        &self,
        briefs: &[Brief],
        settings: Settings,
        observer: &mut O,
    ) -> Result<Batch, ConfigError>
    where
        O: BatchObserver + ?Sized,
    {
        if let Err(e) = Self::preflight(&settings) {
            tracing::warn!("Refusing to start batch without an API key");
            return Err(e);
        }

        let mut batch = Batch::from_briefs(briefs);
        observer.publish(&batch);
        tracing::info!("Started batch");

        for (index, brief) in briefs.iter().enumerate() {
            let outcome = self.generate_one(index, brief, &settings).await;

            if let Some(record) = batch.get_mut(index) {
                let transition = match outcome {
                    Ok(content) => record.mark_generated(content),
                    Err(message) => record.mark_failed(message),
                };
                if let Err(e) = transition {
                    tracing::error!(error = %e, "Record transitioned twice");
                }
            }

            observer.publish(&batch);
        }

        tracing::info!(summary = %batch.summary(), "Batch complete");
        Ok(batch)
    }

    /// One provider call; `Err` carries the message shown on the failed record.
    #[tracing::instrument(skip_all, fields(index = index, id = %brief.id()))]
    async fn generate_one(
        &self,
        index: usize,
        brief: &Brief,
        settings: &Settings,
    ) -> Result<String, String> {
        if let Some(limiter) = &self.throttle {
            limiter.until_ready().await;
        }

        tracing::debug!("Dispatching brief");
        match self
            .provider
            .complete(brief.content(), settings.system_prompt(), settings.api_key())
            .await
        {
            Ok(content) if !content.trim().is_empty() => {
                tracing::debug!(content_len = content.len(), "Generated post");
                Ok(content)
            }
            Ok(_) => {
                tracing::warn!("Provider returned empty content");
                Err(EMPTY_CONTENT_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Generation failed");
                Err(e.user_message())
            }
        }
    }
}

impl<P> std::fmt::Debug for GenerationPipeline<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationPipeline")
            .field("throttled", &self.throttle.is_some())
            .finish()
    }
}
