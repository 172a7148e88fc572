//! JSON encoding errors.

/// Failure to render a value (a batch, a brief list, a settings view) as JSON.
///
/// # Examples
///
/// ```
/// use postwright_error::JsonError;
///
/// let err = JsonError::new("batch", "key must be a string");
/// assert_eq!(err.subject, "batch");
/// assert!(err.to_string().contains("failed to encode batch"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: failed to encode {}: {} at line {} in {}", subject, message, line, file)]
pub struct JsonError {
    /// What was being encoded
    pub subject: &'static str,
    /// Encoder message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Record an encoding failure for `subject` at the caller's location.
    #[track_caller]
    pub fn new(subject: &'static str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            subject,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
