//! Top-level error wrapper types.

use crate::{
    ConfigError, ExtractionError, JsonError, PipelineError, ProviderError, ServerError,
    StorageError, ValidationError,
};

/// Every error the workspace can produce, discriminated by origin.
///
/// # Examples
///
/// ```
/// use postwright_error::{PostwrightError, PostwrightErrorKind, ProviderError};
///
/// let err: PostwrightError = ProviderError::status(401, "Incorrect API key provided").into();
/// assert!(matches!(err.kind(), PostwrightErrorKind::Provider(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostwrightErrorKind {
    /// JSON encoding error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error (including a missing API key at batch start)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Brief extraction error
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Completion provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Pipeline or session error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Settings storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Relay server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Postwright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use postwright_error::{PostwrightError, PostwrightErrorKind, PostwrightResult, ConfigError};
///
/// fn might_fail() -> PostwrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), PostwrightErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postwright Error: {}", _0)]
pub struct PostwrightError(Box<PostwrightErrorKind>);

impl PostwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: PostwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostwrightErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> PostwrightErrorKind {
        *self.0
    }
}

// Generic From implementation for any type that converts to PostwrightErrorKind
impl<T> From<T> for PostwrightError
where
    T: Into<PostwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postwright operations.
pub type PostwrightResult<T> = std::result::Result<T, PostwrightError>;
