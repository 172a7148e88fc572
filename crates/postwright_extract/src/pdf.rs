//! PDF decoding.

use lopdf::Document;
use postwright_core::Brief;
use postwright_error::ExtractionError;

const PAGE_SEPARATOR: &str = "\n\n";

/// Decode a PDF into a single brief holding the text of every page.
///
/// Pages are visited in order; pages without text are dropped and the rest are
/// joined with a blank line.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub(crate) fn briefs_from_pdf(bytes: &[u8]) -> Result<Vec<Brief>, ExtractionError> {
    let document =
        Document::load_mem(bytes).map_err(|e| ExtractionError::corrupt("pdf", e.to_string()))?;

    let pages = document.get_pages();
    tracing::debug!(pages = pages.len(), "Loaded PDF");

    let mut texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        match document.extract_text(&[*page_number]) {
            Ok(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    texts.push(text.to_string());
                }
            }
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "Skipping page without extractable text");
            }
        }
    }

    Ok(Brief::indexed(0, texts.join(PAGE_SEPARATOR))
        .into_iter()
        .collect())
}
