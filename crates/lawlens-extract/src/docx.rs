//! DOCX text extraction, compiled in via the `docx` feature

use crate::error::ExtractError;
use docx_rs::{read_docx, DocumentChild};

/// Concatenate the text of every paragraph, newline separated.
///
/// Tables and other non-paragraph children are skipped.
pub(crate) fn extract(data: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(data).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(p.raw_text()),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}
