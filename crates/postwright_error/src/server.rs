//! Error types for the relay server.

/// Error kinds for relay server operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Failed to bind the listening socket
    #[display("Failed to bind {}: {}", address, message)]
    Bind {
        /// Address that could not be bound
        address: String,
        /// OS error message
        message: String,
    },
    /// The server loop exited with an error
    #[display("Server error: {}", _0)]
    Serve(String),
}

/// Relay server failure.
///
/// # Examples
///
/// ```
/// use postwright_error::{ServerError, ServerErrorKind};
///
/// let err = ServerError::new(ServerErrorKind::Bind {
///     address: "127.0.0.1:3000".to_string(),
///     message: "address in use".to_string(),
/// });
/// assert!(err.to_string().contains("Failed to bind 127.0.0.1:3000"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// What failed
    pub kind: ServerErrorKind,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ServerError {
    /// Wrap a kind, capturing the caller's location.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// What failed.
    pub fn kind(&self) -> &ServerErrorKind {
        &self.kind
    }
}
