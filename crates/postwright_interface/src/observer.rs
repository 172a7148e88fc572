//! Batch snapshot observers.

use postwright_core::Batch;
use tokio::sync::watch;

/// Receives the full batch after every state transition.
///
/// The pipeline calls [`publish`](BatchObserver::publish) once with the all-pending
/// batch, then once per record transition, before dispatching the next item.
pub trait BatchObserver: Send {
    /// Observe the current batch.
    fn publish(&mut self, batch: &Batch);
}

impl BatchObserver for watch::Sender<Batch> {
    fn publish(&mut self, batch: &Batch) {
        // Receivers may come and go; the latest value is kept either way.
        self.send_replace(batch.clone());
    }
}

impl<F> BatchObserver for F
where
    F: FnMut(&Batch) + Send,
{
    fn publish(&mut self, batch: &Batch) {
        self(batch)
    }
}

/// Observer that discards every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BatchObserver for NoopObserver {
    fn publish(&mut self, _batch: &Batch) {}
}
