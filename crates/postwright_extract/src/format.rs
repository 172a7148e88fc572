//! Supported source formats.

use postwright_error::{ExtractionError, ExtractionErrorKind};

/// Document formats a brief can be extracted from.
///
/// # Examples
///
/// ```
/// use postwright_extract::SourceFormat;
///
/// assert_eq!(SourceFormat::from_hint("Topics.CSV")?, SourceFormat::Csv);
/// assert_eq!(SourceFormat::from_hint("md")?, SourceFormat::Md);
/// assert!(SourceFormat::from_hint("photo.gif").is_err());
/// # Ok::<(), postwright_error::ExtractionError>(())
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SourceFormat {
    /// Comma (or tab, semicolon, pipe) separated rows
    Csv,
    /// Excel workbook; only the first sheet is read
    Xlsx,
    /// Plain text
    Txt,
    /// Markdown, read as plain text
    Md,
    /// Portable Document Format
    Pdf,
    /// Word document
    Docx,
}

impl SourceFormat {
    /// Resolve a format from a filename or bare extension.
    ///
    /// The text after the last `.` is taken as the extension; a hint without a
    /// dot is treated as the extension itself. Matching ignores ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionErrorKind::UnsupportedFormat`] for anything else.
    #[track_caller]
    pub fn from_hint(hint: &str) -> Result<Self, ExtractionError> {
        let extension = hint.rsplit('.').next().unwrap_or(hint).trim();
        extension.parse().map_err(|_| {
            ExtractionError::new(ExtractionErrorKind::UnsupportedFormat(
                extension.to_ascii_lowercase(),
            ))
        })
    }
}
