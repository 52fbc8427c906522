//! Core extraction dispatch

use crate::error::ExtractError;
use lawlens_domain::document::file_extension;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// File formats the extractor can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    /// Portable Document Format
    Pdf,
    /// Plain text
    Txt,
    /// Office Open XML word processing document
    Docx,
}

impl SupportedFormat {
    /// Map a lowercased extension onto a supported format.
    ///
    /// `.doc` is recognized but rejected with a dedicated error so the
    /// caller can tell the user to convert, rather than a generic
    /// unsupported-type message.
    pub fn from_extension(ext: &str) -> Result<Self, ExtractError> {
        match ext {
            "pdf" => Ok(SupportedFormat::Pdf),
            "txt" => Ok(SupportedFormat::Txt),
            "docx" => Ok(SupportedFormat::Docx),
            "doc" => Err(ExtractError::LegacyFormat),
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Extract plain text from an uploaded file.
///
/// `filename` supplies the declared extension; `scratch_dir` is where PDF
/// uploads are staged while the reader runs. The staging file has a unique
/// per-request name and is removed on every exit path, so concurrent
/// uploads cannot collide.
pub fn extract_text(
    data: &[u8],
    filename: &str,
    scratch_dir: &Path,
) -> Result<String, ExtractError> {
    let ext = file_extension(filename).ok_or(ExtractError::MissingExtension)?;
    let format = SupportedFormat::from_extension(&ext)?;

    debug!(filename, ?format, bytes = data.len(), "extracting text");

    match format {
        SupportedFormat::Pdf => extract_pdf(data, scratch_dir),
        SupportedFormat::Txt => Ok(String::from_utf8_lossy(data).into_owned()),
        SupportedFormat::Docx => extract_docx(data),
    }
}

/// Extract text from a PDF by staging it to disk.
///
/// A reader failure does not abort the request: the error message is
/// returned as the extracted "text" and the caller's minimum-length check
/// decides what happens next. Documented limitation, kept intentionally.
fn extract_pdf(data: &[u8], scratch_dir: &Path) -> Result<String, ExtractError> {
    let mut staged = tempfile::Builder::new()
        .prefix("lawlens-upload-")
        .suffix(".pdf")
        .tempfile_in(scratch_dir)?;
    staged.write_all(data)?;
    staged.flush()?;

    // NamedTempFile deletes the staging file when dropped, on success and
    // failure alike.
    match pdf_extract::extract_text(staged.path()) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(error = %e, "PDF reader failed; surfacing error as text");
            Ok(format!("Error reading PDF: {e}"))
        }
    }
}

#[cfg(feature = "docx")]
fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    crate::docx::extract(data)
}

#[cfg(not(feature = "docx"))]
fn extract_docx(_data: &[u8]) -> Result<String, ExtractError> {
    Err(ExtractError::CapabilityUnavailable("DOCX"))
}
