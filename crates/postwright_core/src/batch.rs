//! Batch of generation records.

use crate::{Brief, GenerationRecord, GenerationStatus};
use serde::{Deserialize, Serialize};

/// Ordered generation records for one pipeline invocation.
///
/// Records are positionally 1:1 with the briefs the batch was created from.
///
/// # Examples
///
/// ```
/// use postwright_core::{Batch, Brief};
///
/// let briefs: Vec<Brief> = ["Topic A", "Topic B"]
///     .iter()
///     .enumerate()
///     .filter_map(|(i, topic)| Brief::indexed(i, topic))
///     .collect();
/// let batch = Batch::from_briefs(&briefs);
///
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch.summary().pending, 2);
/// assert!(!batch.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    records: Vec<GenerationRecord>,
}

impl Batch {
    /// Create an all-pending batch mirroring the given briefs.
    pub fn from_briefs(briefs: &[Brief]) -> Self {
        Self {
            records: briefs.iter().map(GenerationRecord::pending).collect(),
        }
    }

    /// Records in input order.
    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    /// Record at a position.
    pub fn get(&self, index: usize) -> Option<&GenerationRecord> {
        self.records.get(index)
    }

    /// Mutable record at a position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut GenerationRecord> {
        self.records.get_mut(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether every record is terminal. An empty batch is complete.
    pub fn is_complete(&self) -> bool {
        self.records.iter().all(GenerationRecord::is_terminal)
    }

    /// Count records per status.
    pub fn summary(&self) -> BatchSummary {
        self.records
            .iter()
            .fold(BatchSummary::default(), |mut summary, record| {
                match record.status() {
                    GenerationStatus::Pending => summary.pending += 1,
                    GenerationStatus::Generated => summary.generated += 1,
                    GenerationStatus::Failed => summary.failed += 1,
                }
                summary
            })
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a GenerationRecord;
    type IntoIter = std::slice::Iter<'a, GenerationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Per-status record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{} generated, {} failed, {} pending", generated, failed, pending)]
pub struct BatchSummary {
    /// Records still waiting
    pub pending: usize,
    /// Records with generated content
    pub generated: usize,
    /// Records that failed
    pub failed: usize,
}
