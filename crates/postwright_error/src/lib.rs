//! Error types for the Postwright library.
//!
//! This crate provides the foundation error types used throughout the Postwright workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The taxonomy mirrors where a failure is allowed to surface:
//! - [`ConfigError`] blocks a whole batch before any record exists
//! - [`ExtractionError`] blocks one input document
//! - [`ProviderError`] is captured into a single generation record
//! - [`ValidationError`] blocks a single-topic submission
//!
//! # Examples
//!
//! ```
//! use postwright_error::{PostwrightResult, ConfigError};
//!
//! fn check_key(key: &str) -> PostwrightResult<()> {
//!     if key.is_empty() {
//!         Err(ConfigError::new("API key is not set"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_key("").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extraction;
mod json;
mod pipeline;
mod provider;
mod server;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{PostwrightError, PostwrightErrorKind, PostwrightResult};
pub use extraction::{ExtractionError, ExtractionErrorKind, UNSUPPORTED_FORMAT_MESSAGE};
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use provider::{
    EMPTY_CONTENT_MESSAGE, GENERIC_FAILURE_MESSAGE, MISSING_CREDENTIAL_MESSAGE, ProviderError,
    ProviderErrorKind, ProviderResult,
};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
