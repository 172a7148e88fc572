//! Batch session state for presentation layers.

use crate::GenerationPipeline;
use postwright_core::{Batch, Brief, Settings};
use postwright_error::{PipelineError, PipelineErrorKind, PostwrightResult};
use postwright_interface::CompletionProvider;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// Holds the latest batch and banner error for one user.
///
/// Only one batch runs at a time; starting another while one is in progress
/// fails with [`PipelineErrorKind::Busy`] and leaves the running batch alone.
/// A configuration error is kept as the banner error and does not replace the
/// previously displayed batch. Batches run to completion and cannot be cancelled.
pub struct GenerationSession<P> {
    pipeline: GenerationPipeline<P>,
    batch: watch::Sender<Batch>,
    busy: AtomicBool,
    last_error: Mutex<Option<String>>,
}

/// Clears the busy flag when the batch future completes or is dropped.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    #[track_caller]
    fn acquire(flag: &'a AtomicBool) -> Result<Self, PipelineError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| PipelineError::new(PipelineErrorKind::Busy))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<P: CompletionProvider> GenerationSession<P> {
    /// Create an idle session with an empty batch.
    pub fn new(pipeline: GenerationPipeline<P>) -> Self {
        let (batch, _) = watch::channel(Batch::default());
        Self {
            pipeline,
            batch,
            busy: AtomicBool::new(false),
            last_error: Mutex::new(None),
        }
    }

    /// Subscribe to batch snapshots. The receiver sees the current batch immediately.
    pub fn subscribe(&self) -> watch::Receiver<Batch> {
        self.batch.subscribe()
    }

    /// Latest published batch.
    pub fn batch(&self) -> Batch {
        self.batch.borrow().clone()
    }

    /// Banner error from the last attempted start, if it failed pre-flight.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().ok().and_then(|error| error.clone())
    }

    /// Whether a batch is currently in progress.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run a batch, publishing every snapshot to subscribers.
    ///
    /// # Errors
    ///
    /// - [`PipelineErrorKind::Busy`] when another batch is in progress
    /// - [`ConfigError`](postwright_error::ConfigError) when the API key is blank;
    ///   the message also becomes the banner error
    #[tracing::instrument(skip_all, fields(briefs = briefs.len()))]
    pub async fn generate(&self, briefs: &[Brief], settings: Settings) -> PostwrightResult<Batch> {
        let _guard = BusyGuard::acquire(&self.busy).inspect_err(|_| {
            tracing::warn!("Rejected batch while another is in progress");
        })?;

        if let Err(e) = GenerationPipeline::<P>::preflight(&settings) {
            self.set_last_error(Some(e.message.clone()));
            return Err(e.into());
        }
        self.set_last_error(None);

        let sender = &self.batch;
        let mut publish = |batch: &Batch| {
            sender.send_replace(batch.clone());
        };
        let batch = self.pipeline.run(briefs, settings, &mut publish).await?;
        Ok(batch)
    }

    fn set_last_error(&self, error: Option<String>) {
        if let Ok(mut last_error) = self.last_error.lock() {
            *last_error = error;
        }
    }
}

impl<P> std::fmt::Debug for GenerationSession<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationSession")
            .field("pipeline", &self.pipeline)
            .field("busy", &self.busy.load(Ordering::Relaxed))
            .finish()
    }
}
