//! Lawlens LLM Gateway Layer
//!
//! Mediates every call to the external chat-completion provider.
//!
//! # Architecture
//!
//! The `LlmGateway` trait is the single seam between the HTTP layer and
//! the outside world. It is constructed once at process start and passed
//! into every handler as `Arc<dyn LlmGateway>`, so tests substitute a
//! stub without any runtime patching.
//!
//! # Gateways
//!
//! - `OpenRouterGateway`: OpenRouter-compatible chat completions over HTTP
//! - `MockGateway`: deterministic stub with call counting, for tests
//!
//! # Operations
//!
//! - [`analyze_document`]: structured analysis; every failure is absorbed
//!   into an `AnalysisResult` with a populated `error` field
//! - [`answer_question`]: prose answer; failures absorbed into the answer
//!   string
//! - [`explain_clause`]: prose explanation; failures propagate to the
//!   caller
//!
//! # Examples
//!
//! ```
//! use lawlens_llm::{LlmGateway, MockGateway};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let gateway = MockGateway::new("Plain-language answer");
//! let reply = gateway.complete("any prompt").await.unwrap();
//! assert_eq!(reply, "Plain-language answer");
//! assert_eq!(gateway.call_count(), 1);
//! # });
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod mock;
pub mod openrouter;
pub mod prompt;

use async_trait::async_trait;
use thiserror::Error;

pub use analysis::{analyze_document, answer_question, explain_clause};
pub use mock::MockGateway;
pub use openrouter::{GatewayConfig, OpenRouterGateway};

/// Errors that can occur during a gateway call
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The gateway was built without credentials and is degraded; no
    /// network I/O is attempted
    #[error("LLM client not initialized")]
    NotConfigured,

    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// The provider returned a non-success HTTP status
    #[error("Provider error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// The provider replied, but not in the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A single chat-completion call to an external model.
///
/// One invocation is one upstream HTTP request: no retries, no caching,
/// no state between calls.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a prompt and return the model's reply text verbatim.
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}
