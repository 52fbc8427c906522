//! Lawlens Text Extractor
//!
//! Converts an uploaded file into plain text for downstream analysis.
//!
//! # Overview
//!
//! ```text
//! Upload bytes + declared extension → extract_text → plain String
//! ```
//!
//! Supported formats are a fixed allow-list:
//!
//! - **PDF**: staged to a uniquely named temp file for the duration of
//!   parsing, extracted with `pdf-extract`, deleted on every exit path
//! - **TXT**: lossy UTF-8 decode (undecodable sequences are replaced,
//!   never fatal)
//! - **DOCX**: paragraph texts joined with newlines; gated behind the
//!   `docx` cargo feature
//!
//! Legacy `.doc` files and anything outside the allow-list fail with a
//! typed error before any parsing is attempted.

#![warn(missing_docs)]

pub mod error;
pub mod extract;

#[cfg(feature = "docx")]
mod docx;

pub use error::ExtractError;
pub use extract::{extract_text, SupportedFormat};
