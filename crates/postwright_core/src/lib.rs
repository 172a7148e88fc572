//! Core data types for the Postwright post generation library.
//!
//! This crate provides the data model shared by every other Postwright crate:
//! briefs going in, generation records coming out, and the user settings that
//! parameterize a batch.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod brief;
mod prompts;
mod record;
mod settings;

pub use batch::{Batch, BatchSummary};
pub use brief::{BRIEF_ID_PREFIX, Brief};
pub use prompts::DEFAULT_SYSTEM_PROMPT;
pub use record::{GenerationRecord, GenerationStatus};
pub use settings::{Settings, SettingsUpdate};
