//! Prompt templates for the three analysis tasks
//!
//! Each builder truncates the document to a fixed character budget — a
//! crude context-window guard, not token-aware — and embeds the expected
//! output shape as a literal instruction. Document content is embedded
//! unsanitized; prompt injection is a documented limitation.

/// Document budget for full analysis
pub const ANALYSIS_CONTEXT_CHARS: usize = 3000;

/// Document budget for question answering
pub const QUESTION_CONTEXT_CHARS: usize = 2000;

/// Document-context budget for clause explanation
pub const CLAUSE_CONTEXT_CHARS: usize = 1000;

/// Build the structured-analysis prompt. The JSON output shape is spelled
/// out literally so the reply can be parsed into an `AnalysisResult`.
pub fn analysis_prompt(document: &str) -> String {
    format!(
        r#"You are an expert legal translator. Analyze the following legal document and provide:

1. A simple summary (2-3 sentences)
2. Key risks and red flags (bullet points)
3. Important terms and conditions (bullet points)
4. Recommendations for the reader

Document text:
{}

Please format your response as JSON with the following structure:
{{
    "summary": "Simple summary here",
    "risks": ["Risk 1", "Risk 2"],
    "terms": ["Term 1", "Term 2"],
    "recommendations": ["Recommendation 1", "Recommendation 2"]
}}"#,
        truncate_chars(document, ANALYSIS_CONTEXT_CHARS)
    )
}

/// Build the question-answering prompt. Expects a prose reply.
pub fn question_prompt(document: &str, question: &str) -> String {
    format!(
        r#"You are a legal expert. Answer the following question about this legal document in simple, clear language:

Document: {}

Question: {}

Provide a clear, concise answer that a non-lawyer can understand."#,
        truncate_chars(document, QUESTION_CONTEXT_CHARS),
        question
    )
}

/// Build the clause-explanation prompt. Expects a prose reply.
pub fn clause_prompt(document: &str, clause: &str) -> String {
    format!(
        r#"You are a legal expert. Explain this specific clause from a legal document in simple, everyday language:

Clause: {}

Context from the full document: {}

Please explain:
1. What this clause means in plain English
2. What the implications are for the person signing
3. Any potential risks or concerns
4. What they should consider before agreeing to this

Format your response clearly and use simple language."#,
        clause,
        truncate_chars(document, CLAUSE_CONTEXT_CHARS)
    )
}

/// Truncate to at most `limit` characters, on a char boundary.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_document_and_shape() {
        let prompt = analysis_prompt("This agreement is binding for 12 months.");
        assert!(prompt.contains("This agreement is binding for 12 months."));
        assert!(prompt.contains(r#""summary": "Simple summary here""#));
        assert!(prompt.contains(r#""recommendations""#));
    }

    // '§' never appears in the templates, so counting it measures exactly
    // how much of the document survived truncation.

    #[test]
    fn test_analysis_prompt_truncates_document() {
        let long = "§".repeat(10_000);
        let prompt = analysis_prompt(&long);
        assert_eq!(prompt.matches('§').count(), ANALYSIS_CONTEXT_CHARS);
    }

    #[test]
    fn test_question_prompt_includes_question_untruncated() {
        let long_doc = "§".repeat(5000);
        let prompt = question_prompt(&long_doc, "Can I terminate early?");
        assert!(prompt.contains("Can I terminate early?"));
        assert_eq!(prompt.matches('§').count(), QUESTION_CONTEXT_CHARS);
    }

    #[test]
    fn test_clause_prompt_budgets() {
        let long_doc = "§".repeat(5000);
        let prompt = clause_prompt(&long_doc, "Clause 7.2: indemnification");
        assert!(prompt.contains("Clause 7.2: indemnification"));
        assert_eq!(prompt.matches('§').count(), CLAUSE_CONTEXT_CHARS);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // Multi-byte characters must not be split mid-sequence
        let text = "é".repeat(4000);
        let truncated = truncate_chars(&text, ANALYSIS_CONTEXT_CHARS);
        assert_eq!(truncated.chars().count(), ANALYSIS_CONTEXT_CHARS);
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_chars("short", 3000), "short");
        assert_eq!(truncate_chars("", 3000), "");
    }
}
