//! OpenRouter-compatible chat-completion gateway
//!
//! One HTTP POST per `complete` call, no retries. The provider-specific
//! routing headers (`HTTP-Referer`, `X-Title`) are attached to every
//! request.

use crate::{GatewayError, LlmGateway};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default chat-completions base URL
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b:free";

/// Default max output tokens
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Connection settings for the external provider
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// API key; empty means the gateway starts degraded
    pub api_key: String,
    /// Base URL of the chat-completions API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Max output tokens per call
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Sent as the `HTTP-Referer` routing header
    pub site_url: String,
    /// Sent as the `X-Title` routing header
    pub site_name: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            site_url: "http://localhost:5000".to_string(),
            site_name: "Lawlens".to_string(),
        }
    }
}

/// Gateway calling an OpenRouter-compatible chat-completions endpoint.
///
/// Initialized once per process. If no API key is configured the gateway
/// is degraded: every call returns [`GatewayError::NotConfigured`]
/// immediately, without network I/O.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    config: GatewayConfig,
    configured: bool,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenRouterGateway {
    /// Create a gateway from connection settings.
    pub fn new(config: GatewayConfig) -> Self {
        let configured = !config.api_key.trim().is_empty();
        if !configured {
            warn!("no API key configured; gateway is degraded");
        }

        OpenRouterGateway {
            client: reqwest::Client::new(),
            config,
            configured,
        }
    }

    /// Whether the gateway has credentials and will attempt network calls.
    pub fn is_configured(&self) -> bool {
        self.configured
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        if !self.configured {
            return Err(GatewayError::NotConfigured);
        }

        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "calling provider");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.site_url)
            .header("X-Title", &self.config.site_name)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Communication(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("Response had no choices".to_string()))?;

        Ok(choice.message.content)
    }
}
