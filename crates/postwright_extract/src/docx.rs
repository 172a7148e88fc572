//! DOCX decoding.
//!
//! A DOCX file is a zip archive; the body text lives in `word/document.xml` as
//! runs of `<w:t>` elements. Raw text is rebuilt by concatenating runs, turning
//! tabs and breaks into whitespace and ending every paragraph with a blank line.

use postwright_core::Brief;
use postwright_error::ExtractionError;
use regex::Regex;
use std::io::{Cursor, Read};
use std::sync::LazyLock;

const DOCUMENT_PART: &str = "word/document.xml";

static TEXT_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:t(?:\s[^>/]*)?>(.*?)</w:t>|<w:tab\s*/>|<w:(?:br|cr)(?:\s[^>]*)?/>|</w:p>")
        .expect("Valid DOCX token regex")
});

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(lt|gt|amp|quot|apos|#[0-9]+|#x[0-9A-Fa-f]+);").expect("Valid entity regex")
});

/// Decode a DOCX document into a single brief of its raw text.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub(crate) fn briefs_from_docx(bytes: &[u8]) -> Result<Vec<Brief>, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::corrupt("docx", e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::corrupt("docx", format!("{}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::corrupt("docx", e.to_string()))?;

    let text = raw_text(&xml);
    tracing::debug!(chars = text.len(), "Extracted DOCX text");

    Ok(Brief::indexed(0, text).into_iter().collect())
}

/// Rebuild raw text from the WordprocessingML body.
pub(crate) fn raw_text(xml: &str) -> String {
    let mut text = String::with_capacity(xml.len() / 4);
    for token in TEXT_TOKENS.captures_iter(xml) {
        if let Some(run) = token.get(1) {
            text.push_str(&unescape(run.as_str()));
            continue;
        }
        let tag = token.get(0).map(|m| m.as_str()).unwrap_or_default();
        if tag.starts_with("<w:tab") {
            text.push('\t');
        } else if tag == "</w:p>" {
            text.push_str("\n\n");
        } else {
            text.push('\n');
        }
    }
    text
}

fn unescape(escaped: &str) -> String {
    ENTITY
        .replace_all(escaped, |caps: &regex::Captures<'_>| {
            let entity = &caps[1];
            match entity {
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "amp" => "&".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                _ => numeric_reference(entity).unwrap_or_else(|| caps[0].to_string()),
            }
        })
        .into_owned()
}

fn numeric_reference(entity: &str) -> Option<String> {
    let code = match entity.strip_prefix("#x") {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => entity.strip_prefix('#')?.parse().ok()?,
    };
    char::from_u32(code).map(String::from)
}
