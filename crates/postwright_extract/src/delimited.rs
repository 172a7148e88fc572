//! CSV decoding.

use crate::rows::briefs_from_rows;
use postwright_core::Brief;
use postwright_error::ExtractionError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Decode CSV bytes into one brief per non-blank first cell.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub(crate) fn briefs_from_csv(bytes: &[u8]) -> Result<Vec<Brief>, ExtractionError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let delimiter = detect_delimiter(bytes);
    tracing::debug!(delimiter = %(delimiter as char).escape_default(), "Detected CSV delimiter");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(bytes);

    let mut first_cells = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| ExtractionError::corrupt("csv", e.to_string()))?;
        first_cells.push(
            record
                .get(0)
                .map(|cell| String::from_utf8_lossy(cell).into_owned()),
        );
    }

    Ok(briefs_from_rows(first_cells))
}

/// Pick the candidate delimiter that occurs most often in the first non-blank line.
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let first_line = bytes
        .split(|b| *b == b'\n')
        .find(|line| line.iter().any(|b| !b.is_ascii_whitespace()))
        .unwrap_or_default();

    // Reversed so ties resolve to the earlier candidate.
    CANDIDATE_DELIMITERS
        .iter()
        .rev()
        .map(|candidate| {
            let count = first_line.iter().filter(|b| *b == candidate).count();
            (*candidate, count)
        })
        .filter(|(_, count)| *count > 0)
        .max_by_key(|(_, count)| *count)
        .map(|(candidate, _)| candidate)
        .unwrap_or(b',')
}
