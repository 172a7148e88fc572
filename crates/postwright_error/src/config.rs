//! Configuration errors.

/// A batch or command cannot start because of how it is configured.
///
/// Covers unreadable or invalid configuration files and, at batch start, a
/// blank API key. Raised before any generation record exists, so nothing
/// partial is ever shown alongside it.
///
/// # Examples
///
/// ```
/// use postwright_error::ConfigError;
///
/// let err = ConfigError::new("Please set your OpenAI API key in settings");
/// assert_eq!(err.message, "Please set your OpenAI API key in settings");
/// assert!(err.file.ends_with(".rs"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Text shown to the user, e.g. as a banner above the batch
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Raise with `message` at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
