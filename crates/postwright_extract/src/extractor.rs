//! Extraction entry points.

use crate::SourceFormat;
use crate::delimited::briefs_from_csv;
use crate::docx::briefs_from_docx;
use crate::pdf::briefs_from_pdf;
use crate::spreadsheet::briefs_from_xlsx;
use postwright_core::Brief;
use postwright_error::{ExtractionError, ExtractionErrorKind, ValidationError, ValidationErrorKind};
use std::path::Path;

/// Treat a block of text as one whole-document brief.
///
/// Returns an empty list when the text is blank.
///
/// # Examples
///
/// ```
/// use postwright_extract::extract_text;
///
/// assert_eq!(extract_text("  Quarterly results  ")[0].content(), "Quarterly results");
/// assert!(extract_text(" \n\t ").is_empty());
/// ```
pub fn extract_text(text: &str) -> Vec<Brief> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Brief::indexed(0, text).into_iter().collect()
}

/// Turn a single typed topic into a brief.
///
/// # Errors
///
/// Returns [`ValidationErrorKind::EmptyTopic`] when the topic is blank.
///
/// # Examples
///
/// ```
/// use postwright_extract::topic_brief;
///
/// let brief = topic_brief(" AI in healthcare ")?;
/// assert_eq!(brief.id(), "brief-0");
/// assert!(topic_brief("   ").is_err());
/// # Ok::<(), postwright_error::ValidationError>(())
/// ```
#[track_caller]
pub fn topic_brief(topic: &str) -> Result<Brief, ValidationError> {
    Brief::indexed(0, topic).ok_or_else(|| ValidationError::new(ValidationErrorKind::EmptyTopic))
}

/// Extract briefs from document bytes.
///
/// `format_hint` is a filename or bare extension (see [`SourceFormat::from_hint`]).
/// Extraction is all-or-nothing: on error no briefs are returned.
///
/// # Errors
///
/// - [`ExtractionErrorKind::UnsupportedFormat`] when the hint names no supported format
/// - [`ExtractionErrorKind::Corrupt`] when the bytes cannot be decoded
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn extract_bytes(bytes: &[u8], format_hint: &str) -> Result<Vec<Brief>, ExtractionError> {
    let format = SourceFormat::from_hint(format_hint)?;

    let briefs = match format {
        SourceFormat::Csv => briefs_from_csv(bytes)?,
        SourceFormat::Xlsx => briefs_from_xlsx(bytes)?,
        SourceFormat::Txt | SourceFormat::Md => extract_text(&String::from_utf8_lossy(bytes)),
        SourceFormat::Pdf => briefs_from_pdf(bytes)?,
        SourceFormat::Docx => briefs_from_docx(bytes)?,
    };

    tracing::info!(%format, briefs = briefs.len(), "Extracted briefs");
    Ok(briefs)
}

/// Read a file and extract briefs, using its name as the format hint.
///
/// # Errors
///
/// Fails like [`extract_bytes`], plus [`ExtractionErrorKind::Io`] when the file
/// cannot be read. The format is checked before the file is opened.
#[tracing::instrument(fields(path = %path.display()))]
pub fn extract_file(path: &Path) -> Result<Vec<Brief>, ExtractionError> {
    let hint = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    SourceFormat::from_hint(&hint)?;

    let bytes = std::fs::read(path).map_err(|e| {
        ExtractionError::new(ExtractionErrorKind::Io(format!("{}: {}", path.display(), e)))
    })?;

    extract_bytes(&bytes, &hint)
}
