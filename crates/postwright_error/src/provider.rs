//! Completion provider error types.

/// Display text when a provider failure carries no usable message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate post";

/// Display text when the provider answered without any text.
pub const EMPTY_CONTENT_MESSAGE: &str = "No content generated";

/// Display text when a request is attempted without a credential.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "API key is required";

/// Ways a single completion call can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// No credential was supplied for the call
    #[display("Missing API credential")]
    MissingCredential,
    /// The request never produced an HTTP response
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// The provider answered with a non-success status
    #[display("Provider returned {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body, possibly empty
        message: String,
    },
    /// The response body did not have the expected shape
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// The provider succeeded but returned no text
    #[display("Provider returned empty content")]
    EmptyContent,
}

/// Completion provider error with location tracking.
///
/// # Examples
///
/// ```
/// use postwright_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::EmptyContent);
/// assert_eq!(err.user_message(), "No content generated");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The failure category
    pub kind: ProviderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a non-success status.
    #[track_caller]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Status {
            status,
            message: message.into(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }

    /// Text suitable for display next to a failed record.
    ///
    /// Status failures surface the upstream message when there is one; transport
    /// and parsing failures collapse to the generic message.
    pub fn user_message(&self) -> String {
        match &self.kind {
            ProviderErrorKind::MissingCredential => MISSING_CREDENTIAL_MESSAGE.to_string(),
            ProviderErrorKind::Status { message, .. } if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            ProviderErrorKind::EmptyContent => EMPTY_CONTENT_MESSAGE.to_string(),
            ProviderErrorKind::Status { .. }
            | ProviderErrorKind::Transport(_)
            | ProviderErrorKind::MalformedResponse(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Result type for completion calls.
pub type ProviderResult<T> = Result<T, ProviderError>;
