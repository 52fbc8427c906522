//! HTTP request handlers
//!
//! Four stateless document endpoints plus a health check, wired with
//! axum. Every handler validates its input, runs the
//! extractor/prompt/gateway sequence, and serializes the result as JSON
//! with a success flag. Error-to-JSON mapping is unified in [`ApiError`].

use crate::config::ServerConfig;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use lawlens_domain::{is_allowed_file, AnalysisResult, MIN_DOCUMENT_CHARS};
use lawlens_extract::{extract_text, ExtractError};
use lawlens_llm::{analyze_document, answer_question, explain_clause, GatewayError, LlmGateway};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The one external dependency, injected at startup
    pub gateway: Arc<dyn LlmGateway>,
    /// Read-only server configuration
    pub config: Arc<ServerConfig>,
}

/// Error response body shared by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Application error, mapped uniformly onto (status, JSON body)
#[derive(Debug)]
pub enum ApiError {
    /// Missing/empty/disallowed input: HTTP 400
    InvalidInput(String),
    /// Extraction failure: format-class errors map to 400, staging I/O
    /// failures to 500
    Extraction(ExtractError),
    /// Upstream provider failure that reaches the HTTP layer: HTTP 500
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Extraction(ExtractError::Staging(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Upload failed: {e}"),
            ),
            ApiError::Extraction(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<ExtractError> for ApiError {
    fn from(e: ExtractError) -> Self {
        ApiError::Extraction(e)
    }
}

/// Upload+analyze response
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Always true on the success path
    pub success: bool,
    /// Structured analysis (may carry an embedded `error` field)
    pub analysis: AnalysisResult,
    /// Extracted text length in characters
    pub document_length: usize,
    /// The extracted text itself, so the caller can resend it for
    /// follow-up questions (no server-side document state)
    pub document_text: String,
}

/// Pasted-text analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    /// Document text to analyze
    #[serde(default)]
    pub text: String,
}

/// Pasted-text analysis response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeTextResponse {
    /// Always true on the success path
    pub success: bool,
    /// Structured analysis
    pub analysis: AnalysisResult,
    /// Text length in characters
    pub document_length: usize,
}

/// Question request: the caller resends the full document each time
#[derive(Debug, Deserialize)]
pub struct AskQuestionRequest {
    /// Question about the document
    #[serde(default)]
    pub question: String,
    /// Full document text, as previously extracted
    #[serde(default)]
    pub document_text: String,
}

/// Question response
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    /// Always true on the success path
    pub success: bool,
    /// Model answer (or an absorbed failure message)
    pub answer: String,
    /// The question, echoed back
    pub question: String,
}

/// Clause explanation request
#[derive(Debug, Deserialize)]
pub struct ExplainClauseRequest {
    /// Clause text to explain
    #[serde(default)]
    pub clause: String,
    /// Full document text for context
    #[serde(default)]
    pub document_text: String,
}

/// Clause explanation response
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplanationResponse {
    /// Always true on the success path
    pub success: bool,
    /// Model explanation
    pub explanation: String,
    /// The clause, echoed back
    pub clause: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Informational message
    pub message: String,
}

/// POST /api/upload - analyze an uploaded document
async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidInput(format!("Invalid upload body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::InvalidInput(format!("Invalid upload body: {e}")))?;
            file = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, data) =
        file.ok_or_else(|| ApiError::InvalidInput("No file uploaded".to_string()))?;

    if filename.is_empty() {
        return Err(ApiError::InvalidInput("No file selected".to_string()));
    }

    if !is_allowed_file(&filename, &state.config.allowed_extensions) {
        return Err(ApiError::InvalidInput("File type not allowed".to_string()));
    }

    let document_text = extract_text(&data, &filename, &state.config.upload_dir)?;
    let document_length = document_text.chars().count();

    if document_length < MIN_DOCUMENT_CHARS {
        return Err(ApiError::InvalidInput(
            "Document appears empty or unreadable".to_string(),
        ));
    }

    info!(filename, document_length, "analyzing uploaded document");
    let analysis = analyze_document(state.gateway.as_ref(), &document_text).await;

    Ok(Json(UploadResponse {
        success: true,
        analysis,
        document_length,
        document_text,
    }))
}

/// POST /api/analyze_text - analyze pasted text
async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeTextResponse>, ApiError> {
    let document_length = request.text.chars().count();

    if document_length < MIN_DOCUMENT_CHARS {
        return Err(ApiError::InvalidInput(
            "Text too short to analyze".to_string(),
        ));
    }

    info!(document_length, "analyzing pasted text");
    let analysis = analyze_document(state.gateway.as_ref(), &request.text).await;

    Ok(Json(AnalyzeTextResponse {
        success: true,
        analysis,
        document_length,
    }))
}

/// POST /api/ask_question - answer a question about a document
async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskQuestionRequest>,
) -> Result<Json<QuestionResponse>, ApiError> {
    if request.document_text.is_empty() {
        return Err(ApiError::InvalidInput("No document provided".to_string()));
    }

    if request.question.is_empty() {
        return Err(ApiError::InvalidInput("No question provided".to_string()));
    }

    let answer = answer_question(
        state.gateway.as_ref(),
        &request.document_text,
        &request.question,
    )
    .await;

    Ok(Json(QuestionResponse {
        success: true,
        answer,
        question: request.question,
    }))
}

/// POST /api/explain_clause - explain a clause in plain language
async fn explain(
    State(state): State<AppState>,
    Json(request): Json<ExplainClauseRequest>,
) -> Result<Json<ExplanationResponse>, ApiError> {
    if request.document_text.is_empty() {
        return Err(ApiError::InvalidInput("No document provided".to_string()));
    }

    if request.clause.is_empty() {
        return Err(ApiError::InvalidInput("No clause provided".to_string()));
    }

    // Unlike analysis and question answering, a gateway failure here
    // surfaces as HTTP 500. Preserved inconsistency, see DESIGN.md.
    let explanation = explain_clause(
        state.gateway.as_ref(),
        &request.document_text,
        &request.clause,
    )
    .await
    .map_err(|e: GatewayError| ApiError::Upstream(format!("Clause explanation failed: {e}")))?;

    Ok(Json(ExplanationResponse {
        success: true,
        explanation,
        clause: request.clause,
    }))
}

/// GET /api/health - liveness check, independent of the gateway
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Lawlens API is running".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let body_limit = state.config.max_content_length;

    AxumRouter::new()
        .route("/api/upload", post(upload_document))
        .route("/api/analyze_text", post(analyze_text))
        .route("/api/ask_question", post(ask_question))
        .route("/api/explain_clause", post(explain))
        .route("/api/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use lawlens_llm::MockGateway;
    use tower::ServiceExt; // for oneshot

    fn create_test_state(gateway: MockGateway) -> AppState {
        AppState {
            gateway: Arc::new(gateway),
            config: Arc::new(ServerConfig::default_test_config()),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = create_test_state(MockGateway::default());
        let app = create_router(state);

        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_text_rejects_short_input() {
        let gateway = MockGateway::default();
        let state = create_test_state(gateway.clone());
        let app = create_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze_text")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"text": "too short"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // Validation must short-circuit before the gateway
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ask_question_requires_document() {
        let state = create_test_state(MockGateway::default());
        let app = create_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/api/ask_question")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question": "What is the term?"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "No document provided");
    }

    #[tokio::test]
    async fn test_explain_clause_requires_clause() {
        let state = create_test_state(MockGateway::default());
        let app = create_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/api/explain_clause")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"document_text": "full document text"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "No clause provided");
    }
}
