//! Fortune Response Parser: all-or-nothing decoding of the model's JSON reply.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::strip_json_fences;

pub const LUCKY_NUMBER_COUNT: usize = 6;
pub const LUCKY_NUMBER_MIN: u8 = 1;
pub const LUCKY_NUMBER_MAX: u8 = 45;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

/// A validated fortune: six distinct numbers in `1..=45`, each with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortuneResult {
    numbers: Vec<u8>,
    explanations: Vec<String>,
    overall_explanation: String,
}

impl FortuneResult {
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn explanations(&self) -> &[String] {
        &self.explanations
    }

    pub fn overall_explanation(&self) -> &str {
        &self.overall_explanation
    }

    /// Numbers paired with their explanations, in reply order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &str)> {
        self.numbers
            .iter()
            .copied()
            .zip(self.explanations.iter().map(String::as_str))
    }
}

/// Wire shape of the reply. Numbers are decoded wide so out-of-range values
/// are reported as such rather than as a type error. Extra keys are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFortuneReply {
    numbers: Vec<i64>,
    explanations: Vec<String>,
    overall_explanation: String,
}

pub fn parse_fortune_reply(raw: &str) -> Result<FortuneResult, ParseError> {
    let text = strip_json_fences(raw);

    let reply: RawFortuneReply = serde_json::from_str(text)
        .map_err(|e| ParseError::MalformedReply(format!("not a fortune object: {e}")))?;

    validate(reply)
}

fn validate(reply: RawFortuneReply) -> Result<FortuneResult, ParseError> {
    if reply.numbers.len() != LUCKY_NUMBER_COUNT {
        return Err(ParseError::MalformedReply(format!(
            "expected {LUCKY_NUMBER_COUNT} numbers, got {}",
            reply.numbers.len()
        )));
    }

    if reply.explanations.len() != reply.numbers.len() {
        return Err(ParseError::MalformedReply(format!(
            "expected {} explanations, got {}",
            reply.numbers.len(),
            reply.explanations.len()
        )));
    }

    let range = i64::from(LUCKY_NUMBER_MIN)..=i64::from(LUCKY_NUMBER_MAX);
    let mut seen = HashSet::with_capacity(LUCKY_NUMBER_COUNT);
    let mut numbers = Vec::with_capacity(LUCKY_NUMBER_COUNT);

    for n in reply.numbers {
        if !range.contains(&n) {
            return Err(ParseError::MalformedReply(format!(
                "number {n} is outside {LUCKY_NUMBER_MIN}..={LUCKY_NUMBER_MAX}"
            )));
        }
        if !seen.insert(n) {
            return Err(ParseError::MalformedReply(format!("number {n} is repeated")));
        }
        // in range, so the narrowing is lossless
        numbers.push(n as u8);
    }

    if reply.explanations.iter().any(|e| e.trim().is_empty()) {
        return Err(ParseError::MalformedReply(
            "an explanation is empty".to_string(),
        ));
    }

    if reply.overall_explanation.trim().is_empty() {
        return Err(ParseError::MalformedReply(
            "overall_explanation is empty".to_string(),
        ));
    }

    Ok(FortuneResult {
        numbers,
        explanations: reply.explanations,
        overall_explanation: reply.overall_explanation,
    })
}
