//! Brief types.

use serde::{Deserialize, Serialize};

/// Prefix of generated brief identifiers.
pub const BRIEF_ID_PREFIX: &str = "brief-";

/// One unit of input content to be turned into a generated post.
///
/// Content is always trimmed and never empty; every constructor, including
/// deserialization, rejects whitespace-only text.
///
/// # Examples
///
/// ```
/// use postwright_core::Brief;
///
/// let brief = Brief::indexed(0, "  Launch day recap  ").unwrap();
/// assert_eq!(brief.id(), "brief-0");
/// assert_eq!(brief.content(), "Launch day recap");
///
/// assert!(Brief::indexed(1, " \n ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "RawBrief")]
pub struct Brief {
    /// Identifier, unique within a batch
    id: String,
    /// Trimmed, non-empty brief text
    content: String,
}

impl Brief {
    /// Create a brief with an explicit identifier, or `None` when the content is blank.
    pub fn new(id: impl Into<String>, content: impl AsRef<str>) -> Option<Self> {
        let content = content.as_ref().trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            id: id.into(),
            content: content.to_string(),
        })
    }

    /// Create a brief whose identifier is derived from its position among emitted
    /// briefs, or `None` when the content is blank.
    pub fn indexed(index: usize, content: impl AsRef<str>) -> Option<Self> {
        Self::new(format!("{}{}", BRIEF_ID_PREFIX, index), content)
    }
}

/// Wire shape of a brief before its content is checked.
#[derive(Deserialize)]
struct RawBrief {
    id: String,
    content: String,
}

impl TryFrom<RawBrief> for Brief {
    type Error = String;

    fn try_from(raw: RawBrief) -> Result<Self, Self::Error> {
        Brief::new(raw.id.clone(), &raw.content)
            .ok_or_else(|| format!("brief {} has blank content", raw.id))
    }
}
