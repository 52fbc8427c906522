//! Structured results produced by document analysis

use serde::{Deserialize, Serialize};

/// Result of a full-document analysis.
///
/// Produced once per analysis call and never mutated. When the upstream
/// model call fails, the result carries a populated `error` field and
/// empty list fields instead of surfacing an exception to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Plain-language summary of the document (2-3 sentences)
    pub summary: String,

    /// Key risks and red flags, in the order the model produced them
    #[serde(default)]
    pub risks: Vec<String>,

    /// Important terms and conditions
    #[serde(default)]
    pub terms: Vec<String>,

    /// Recommendations for the reader
    #[serde(default)]
    pub recommendations: Vec<String>,

    /// Populated when analysis could not be completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Build a failure result: empty lists, a fallback summary, and the
    /// given error message.
    pub fn failed(error: impl Into<String>) -> Self {
        AnalysisResult {
            summary: "Unable to analyze document".to_string(),
            risks: Vec::new(),
            terms: Vec::new(),
            recommendations: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// True when the analysis completed without an upstream failure
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// A question and its answer about a specific document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    /// Question as posed by the caller
    pub question: String,
    /// Model's answer, verbatim
    pub answer: String,
}

/// A clause and its plain-language explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseExplanation {
    /// Clause text as supplied by the caller
    pub clause: String,
    /// Model's explanation, verbatim
    pub explanation: String,
}
