//! Lawlens Domain Layer
//!
//! Core types shared by the extraction, gateway, and HTTP layers.
//! Everything here is transient and request-scoped: the service keeps no
//! state between requests, so there are no identifiers and nothing
//! persists.
//!
//! ## Key Concepts
//!
//! - **AnalysisResult**: structured output of a full-document analysis
//!   (summary, risks, terms, recommendations, optional error)
//! - **QuestionAnswer** / **ClauseExplanation**: one-shot stateless pairs
//! - **Document rules**: the extension allow-list and minimum text length
//!   that gate every request before it reaches the LLM

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod document;

// Re-exports for convenience
pub use analysis::{AnalysisResult, ClauseExplanation, QuestionAnswer};
pub use document::{is_allowed_file, DEFAULT_ALLOWED_EXTENSIONS, MIN_DOCUMENT_CHARS};
