//! Brief extraction for Postwright.
//!
//! Turns raw input into an ordered list of [`Brief`](postwright_core::Brief)s:
//!
//! - **Tabular** documents (CSV, XLSX) yield one brief per row, taken from the
//!   first column. Rows whose first cell is blank are skipped.
//! - **Whole-document** formats (TXT, MD, PDF, DOCX) yield at most one brief
//!   holding the trimmed text of the entire document.
//! - A **single topic** typed by the user yields exactly one brief or a
//!   validation error.
//!
//! Identifiers are `brief-{n}` where `n` counts emitted briefs, so skipped rows
//! never leave gaps.
//!
//! # Example
//!
//! ```
//! use postwright_extract::extract_bytes;
//!
//! let briefs = extract_bytes(b"Topic 1\n\nTopic 2\n", "topics.csv")?;
//! assert_eq!(briefs.len(), 2);
//! assert_eq!(briefs[1].id(), "brief-1");
//! # Ok::<(), postwright_error::ExtractionError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod delimited;
mod docx;
mod extractor;
mod format;
mod pdf;
mod rows;
mod spreadsheet;

pub use extractor::{extract_bytes, extract_file, extract_text, topic_brief};
pub use format::SourceFormat;
pub use rows::briefs_from_rows;
