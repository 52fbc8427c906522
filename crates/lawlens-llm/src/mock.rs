//! Deterministic gateway stub for tests
//!
//! Returns pre-configured replies without any network I/O, and counts
//! calls so tests can assert that validation short-circuits before the
//! gateway is reached.

use crate::{GatewayError, LlmGateway};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Fail(String),
}

/// Mock gateway with a fixed default reply and optional per-prompt scripts.
///
/// Clones share the same call counter and script table.
///
/// # Examples
///
/// ```
/// use lawlens_llm::{LlmGateway, MockGateway};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut gateway = MockGateway::new("default reply");
/// gateway.add_reply("specific prompt", "specific reply");
///
/// assert_eq!(gateway.complete("specific prompt").await.unwrap(), "specific reply");
/// assert_eq!(gateway.complete("anything else").await.unwrap(), "default reply");
/// assert_eq!(gateway.call_count(), 2);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockGateway {
    default_reply: Scripted,
    scripted: Arc<Mutex<HashMap<String, Scripted>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGateway {
    /// Create a mock that returns `reply` for every prompt.
    pub fn new(reply: impl Into<String>) -> Self {
        MockGateway {
            default_reply: Scripted::Reply(reply.into()),
            scripted: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock where every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        MockGateway {
            default_reply: Scripted::Fail(message.into()),
            scripted: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Script a reply for one exact prompt.
    pub fn add_reply(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .insert(prompt.into(), Scripted::Reply(reply.into()));
    }

    /// Script a failure for one exact prompt.
    pub fn add_failure(&mut self, prompt: impl Into<String>, message: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .insert(prompt.into(), Scripted::Fail(message.into()));
    }

    /// Number of times `complete` was called, across all clones.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call counter.
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        MockGateway::new("Default mock reply")
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        *self.call_count.lock().unwrap() += 1;

        let scripted = self.scripted.lock().unwrap();
        let entry = scripted.get(prompt).unwrap_or(&self.default_reply);

        match entry {
            Scripted::Reply(reply) => Ok(reply.clone()),
            Scripted::Fail(message) => Err(GatewayError::Communication(message.clone())),
        }
    }
}
