// Fortune lookup: prompt building, reply parsing, and the one-call lookup flow.
// All LLM calls go through llm_client; no direct OpenAI calls here.

pub mod guard;
pub mod handlers;
pub mod page;
pub mod parser;
pub mod prompts;
pub mod request;
pub mod service;

use thiserror::Error;

use crate::fortune::parser::ParseError;
use crate::llm_client::LlmError;

/// Failure of a single lookup attempt. None of these are fatal to the process.
#[derive(Debug, Error)]
pub enum FortuneError {
    #[error("LLM API key is not configured")]
    Configuration,

    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("{0}")]
    Validation(String),
}

impl From<ParseError> for FortuneError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::MalformedReply(reason) => FortuneError::MalformedReply(reason),
        }
    }
}

impl From<LlmError> for FortuneError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingCredential => FortuneError::Configuration,
            LlmError::EmptyContent => FortuneError::MalformedReply(err.to_string()),
            LlmError::Http(_) | LlmError::Api { .. } => FortuneError::Transport(err.to_string()),
        }
    }
}
