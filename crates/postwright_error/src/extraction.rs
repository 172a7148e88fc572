//! Brief extraction error types.

/// Message shown when a document has an extension we cannot decode.
pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Invalid file format. Please upload CSV, XLSX, TXT, MD, PDF, or DOCX.";

/// Specific brief extraction failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// The file extension or format hint is not one we decode
    #[display("{} (got '{}')", UNSUPPORTED_FORMAT_MESSAGE, _0)]
    UnsupportedFormat(String),
    /// The document could not be decoded in its declared format
    #[display("Failed to read {} document: {}", format, message)]
    Corrupt {
        /// Declared format of the document
        format: String,
        /// Decoder message
        message: String,
    },
    /// The file could not be read from disk
    #[display("Failed to read file: {}", _0)]
    Io(String),
}

/// Extraction error with location tracking.
///
/// Extraction is all-or-nothing: when this error is returned no briefs were produced.
///
/// # Examples
///
/// ```
/// use postwright_error::{ExtractionError, ExtractionErrorKind};
///
/// let err = ExtractionError::new(ExtractionErrorKind::UnsupportedFormat("gif".to_string()));
/// assert!(format!("{}", err).contains("Invalid file format"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The specific extraction failure
    pub kind: ExtractionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new extraction error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a decoding failure in the given format.
    #[track_caller]
    pub fn corrupt(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ExtractionErrorKind::Corrupt {
            format: format.into(),
            message: message.into(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ExtractionErrorKind {
        &self.kind
    }
}
