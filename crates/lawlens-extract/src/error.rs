//! Error types for text extraction

use thiserror::Error;

/// Errors that can occur while turning an upload into plain text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Extension is outside the {pdf, txt, docx} allow-list
    #[error("Unsupported file type: .{0}")]
    UnsupportedFormat(String),

    /// Filename has no extension at all
    #[error("File has no extension")]
    MissingExtension,

    /// Legacy binary Word format, explicitly rejected
    #[error("Legacy .doc files are not supported. Convert to PDF, TXT, or DOCX.")]
    LegacyFormat,

    /// Optional capability not compiled into this build
    #[error("{0} processing is not available in this build")]
    CapabilityUnavailable(&'static str),

    /// Failed to stage the upload to a scratch file
    #[error("Failed to stage upload: {0}")]
    Staging(#[from] std::io::Error),

    /// DOCX archive could not be read
    #[error("Failed to read DOCX: {0}")]
    Docx(String),
}
