//! The three document-analysis operations
//!
//! Each operation builds a prompt, makes exactly one gateway call, and
//! shapes the reply. Failure handling differs by task on purpose (see
//! DESIGN.md): analysis absorbs failures into the result body, question
//! answering absorbs them into the answer string, and clause explanation
//! propagates them to the HTTP layer.

use crate::{prompt, GatewayError, LlmGateway};
use lawlens_domain::AnalysisResult;
use tracing::warn;

/// Run the structured analysis task.
///
/// Never returns an error: transport failures, provider errors, and
/// unparseable replies all collapse into an [`AnalysisResult`] whose
/// `error` field is populated and whose list fields are empty.
pub async fn analyze_document(gateway: &dyn LlmGateway, document: &str) -> AnalysisResult {
    let prompt = prompt::analysis_prompt(document);

    let reply = match gateway.complete(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "analysis call failed");
            return AnalysisResult::failed(format!("Analysis failed: {e}"));
        }
    };

    match parse_analysis(&reply) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "analysis reply was not parseable");
            AnalysisResult::failed(format!("Analysis failed: {e}"))
        }
    }
}

/// Answer a question about a document.
///
/// A failed gateway call becomes an apologetic answer string rather than
/// an error; the HTTP layer treats it as a normal reply.
pub async fn answer_question(gateway: &dyn LlmGateway, document: &str, question: &str) -> String {
    let prompt = prompt::question_prompt(document, question);

    match gateway.complete(&prompt).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!(error = %e, "question call failed");
            format!("Unable to answer question: {e}")
        }
    }
}

/// Explain a clause in plain language. Failures propagate to the caller.
pub async fn explain_clause(
    gateway: &dyn LlmGateway,
    document: &str,
    clause: &str,
) -> Result<String, GatewayError> {
    let prompt = prompt::clause_prompt(document, clause);
    gateway.complete(&prompt).await
}

/// Parse a model reply into an `AnalysisResult`.
///
/// Models sometimes wrap JSON in markdown code fences; those are stripped
/// before parsing.
fn parse_analysis(reply: &str) -> Result<AnalysisResult, GatewayError> {
    let json = strip_code_fences(reply);
    serde_json::from_str(json.trim())
        .map_err(|e| GatewayError::InvalidResponse(format!("JSON parse error: {e}")))
}

/// Strip a surrounding ```json ... ``` (or bare ```) fence, if present.
fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();

    let Some(rest) = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    else {
        return trimmed;
    };

    rest.strip_suffix("```").unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockGateway;

    const CANNED_ANALYSIS: &str = r#"{
        "summary": "A binding 12-month agreement.",
        "risks": ["Early termination clause"],
        "terms": ["12-month term"],
        "recommendations": ["Review termination notice period"]
    }"#;

    #[tokio::test]
    async fn test_analyze_happy_path() {
        let gateway = MockGateway::new(CANNED_ANALYSIS);
        let result = analyze_document(&gateway, "This agreement is binding.").await;

        assert!(result.is_ok());
        assert_eq!(result.summary, "A binding 12-month agreement.");
        assert_eq!(result.risks, vec!["Early termination clause"]);
        assert_eq!(result.terms, vec!["12-month term"]);
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_with_fenced_reply() {
        let fenced = format!("```json\n{CANNED_ANALYSIS}\n```");
        let gateway = MockGateway::new(fenced);
        let result = analyze_document(&gateway, "doc text here").await;

        assert!(result.is_ok());
        assert_eq!(result.summary, "A binding 12-month agreement.");
    }

    #[tokio::test]
    async fn test_analyze_malformed_reply_absorbed() {
        let gateway = MockGateway::new("I'm sorry, I can't produce JSON today.");
        let result = analyze_document(&gateway, "doc text here").await;

        assert!(result.error.is_some());
        assert!(result.risks.is_empty());
        assert!(result.terms.is_empty());
        assert!(result.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_analyze_gateway_failure_absorbed() {
        let gateway = MockGateway::failing("connection refused");
        let result = analyze_document(&gateway, "doc text here").await;

        let error = result.error.unwrap();
        assert!(error.starts_with("Analysis failed:"), "got: {error}");
        assert!(result.risks.is_empty());
    }

    #[tokio::test]
    async fn test_answer_question_is_idempotent() {
        let gateway = MockGateway::new("You may terminate with 30 days notice.");

        let first = answer_question(&gateway, "doc", "Can I terminate?").await;
        let second = answer_question(&gateway, "doc", "Can I terminate?").await;

        assert_eq!(first, second);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_answer_question_failure_becomes_answer_text() {
        let gateway = MockGateway::failing("timeout");
        let answer = answer_question(&gateway, "doc", "Can I terminate?").await;
        assert!(answer.starts_with("Unable to answer question:"), "got: {answer}");
    }

    #[tokio::test]
    async fn test_explain_clause_propagates_failure() {
        let gateway = MockGateway::failing("timeout");
        let result = explain_clause(&gateway, "doc", "Clause 3").await;
        assert!(matches!(result, Err(GatewayError::Communication(_))));
    }

    #[tokio::test]
    async fn test_explain_clause_returns_reply_verbatim() {
        let gateway = MockGateway::new("This clause means you owe rent monthly.");
        let explanation = explain_clause(&gateway, "doc", "Clause 3").await.unwrap();
        assert_eq!(explanation, "This clause means you owe rent monthly.");
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```json\n{}\n```").trim(), "{}");
        assert_eq!(strip_code_fences("```\n{}\n```").trim(), "{}");
    }
}
