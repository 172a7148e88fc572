//! Row-to-brief conversion shared by tabular decoders.

use postwright_core::Brief;

/// Convert first-column cells into briefs.
///
/// Each item is the first cell of one row, or `None` when the row had no
/// string first cell. Blank cells are skipped and identifiers count only the
/// rows that were kept.
///
/// # Examples
///
/// ```
/// use postwright_extract::briefs_from_rows;
///
/// let briefs = briefs_from_rows(vec![Some("Topic 1"), Some("  "), None, Some(" Topic 2 ")]);
/// assert_eq!(briefs.len(), 2);
/// assert_eq!(briefs[1].id(), "brief-1");
/// assert_eq!(briefs[1].content(), "Topic 2");
/// ```
pub fn briefs_from_rows<I, S>(first_cells: I) -> Vec<Brief>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    first_cells
        .into_iter()
        .flatten()
        .filter(|cell| !cell.as_ref().trim().is_empty())
        .enumerate()
        .filter_map(|(index, cell)| Brief::indexed(index, cell))
        .collect()
}
