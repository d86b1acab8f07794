//! Canned `ChatCompleter` for exercising the lookup flow without a network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatCompleter, LlmError};

pub const WELL_FORMED_REPLY: &str = r#"{
    "numbers": [3, 12, 21, 30, 39, 45],
    "explanations": [
        "Three echoes your life path.",
        "Twelve reduces to three.",
        "Twenty-one reduces to three.",
        "Thirty carries the three forward.",
        "Thirty-nine reduces to three.",
        "Forty-five closes the cycle."
    ],
    "overall_explanation": "Each number resonates with the vibration of three during early summer."
}"#;

pub struct StubCompleter {
    configured: bool,
    reply: Result<String, u16>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl StubCompleter {
    pub fn replying(reply: &str) -> Self {
        Self {
            configured: true,
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Fails every call with an API error of the given status.
    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            ..Self::replying("")
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::replying(WELL_FORMED_REPLY)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(prompt, system)` of the most recent call.
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompleter for StubCompleter {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((prompt.to_string(), system.to_string()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LlmError::Api {
                status: *status,
                message: "stubbed failure".to_string(),
            }),
        }
    }
}
