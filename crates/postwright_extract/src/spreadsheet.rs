//! XLSX decoding.

use crate::rows::briefs_from_rows;
use calamine::{Data, Reader, Xlsx};
use postwright_core::Brief;
use postwright_error::ExtractionError;
use std::io::Cursor;

/// Decode the first worksheet of an XLSX workbook.
///
/// Only cells holding text count; a numeric or boolean first cell skips the row.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub(crate) fn briefs_from_xlsx(bytes: &[u8]) -> Result<Vec<Brief>, ExtractionError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::corrupt("xlsx", e.to_string()))?;

    let Some(range) = workbook.worksheet_range_at(0) else {
        tracing::debug!("Workbook has no worksheets");
        return Ok(Vec::new());
    };
    let range = range.map_err(|e| ExtractionError::corrupt("xlsx", e.to_string()))?;
    tracing::debug!(rows = range.height(), columns = range.width(), "Read first worksheet");

    let first_cells = range.rows().map(|row| match row.first() {
        Some(Data::String(text)) => Some(text.as_str()),
        _ => None,
    });

    Ok(briefs_from_rows(first_cells))
}
