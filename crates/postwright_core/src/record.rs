//! Per-brief generation records.

use crate::Brief;
use postwright_error::{PipelineError, PipelineErrorKind};
use serde::{Deserialize, Serialize};

/// Lifecycle of a single generation attempt.
///
/// A record starts `Pending` and moves exactly once to `Generated` or `Failed`.
///
/// # Examples
///
/// ```
/// use postwright_core::GenerationStatus;
///
/// assert_eq!(GenerationStatus::Pending.to_string(), "pending");
/// assert!(GenerationStatus::Failed.is_terminal());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationStatus {
    /// Waiting for its provider call
    Pending,
    /// Provider returned non-empty text
    Generated,
    /// Provider call failed or returned nothing
    Failed,
}

impl GenerationStatus {
    /// Whether this status is final.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GenerationStatus::Pending)
    }
}

/// Status and result of generating one post from one brief.
///
/// # Examples
///
/// ```
/// use postwright_core::{Brief, GenerationRecord, GenerationStatus};
///
/// let brief = Brief::indexed(0, "Topic A").unwrap();
/// let mut record = GenerationRecord::pending(&brief);
/// assert_eq!(*record.status(), GenerationStatus::Pending);
///
/// record.mark_generated("Hello A").unwrap();
/// assert_eq!(record.content(), "Hello A");
/// assert!(record.mark_failed("too late").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationRecord {
    /// Identifier of the source brief
    id: String,
    /// Copy of the brief text, kept for display
    brief: String,
    /// Generated text; empty unless `Generated`
    content: String,
    /// Current lifecycle state
    status: GenerationStatus,
    /// Failure message; present iff `Failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl GenerationRecord {
    /// Create the pending record for a brief.
    pub fn pending(brief: &Brief) -> Self {
        Self {
            id: brief.id().clone(),
            brief: brief.content().clone(),
            content: String::new(),
            status: GenerationStatus::Pending,
            error: None,
        }
    }

    /// Whether the record has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Transition to `Generated` with the provider's text.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineErrorKind::AlreadyResolved`] if the record is not pending.
    #[track_caller]
    pub fn mark_generated(&mut self, content: impl Into<String>) -> Result<(), PipelineError> {
        self.ensure_pending()?;
        self.content = content.into();
        self.status = GenerationStatus::Generated;
        Ok(())
    }

    /// Transition to `Failed` with a display message.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineErrorKind::AlreadyResolved`] if the record is not pending.
    #[track_caller]
    pub fn mark_failed(&mut self, error: impl Into<String>) -> Result<(), PipelineError> {
        self.ensure_pending()?;
        self.status = GenerationStatus::Failed;
        self.error = Some(error.into());
        Ok(())
    }

    #[track_caller]
    fn ensure_pending(&self) -> Result<(), PipelineError> {
        if self.is_terminal() {
            return Err(PipelineError::new(PipelineErrorKind::AlreadyResolved(
                self.id.clone(),
            )));
        }
        Ok(())
    }
}
