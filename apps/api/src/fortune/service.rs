//! Fortune lookup: orchestrates one lookup end to end.
//!
//! Flow: validate dates → credential check → life path → build prompt →
//!       one LLM call → parse reply → outcome.
//!
//! Nothing is cached or persisted; every lookup starts from scratch.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use crate::fortune::parser::{parse_fortune_reply, FortuneResult};
use crate::fortune::request::FortuneRequest;
use crate::fortune::FortuneError;
use crate::llm_client::ChatCompleter;
use crate::numerology::{compute_life_path_number, LifePathNumber, Locale};

/// Earliest birth year the form accepts.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// What a successful lookup renders.
#[derive(Debug, Clone, Serialize)]
pub struct FortuneOutcome {
    pub life_path_number: LifePathNumber,
    pub reference_date: NaiveDate,
    pub weekday: String,
    pub month: String,
    pub season: String,
    pub fortune: FortuneResult,
}

#[derive(Clone)]
pub struct FortuneService {
    completer: Arc<dyn ChatCompleter>,
    locale: Locale,
}

impl FortuneService {
    pub fn new(completer: Arc<dyn ChatCompleter>, locale: Locale) -> Self {
        Self { completer, locale }
    }

    pub fn is_configured(&self) -> bool {
        self.completer.is_configured()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Runs one lookup. Issues at most one LLM call.
    pub async fn lookup(
        &self,
        birthdate: NaiveDate,
        reference_date: NaiveDate,
    ) -> Result<FortuneOutcome, FortuneError> {
        validate_dates(birthdate, reference_date)?;

        if !self.completer.is_configured() {
            warn!("Fortune lookup rejected: no LLM credential configured");
            return Err(FortuneError::Configuration);
        }

        let life_path = compute_life_path_number(birthdate);
        let request = FortuneRequest::new(life_path, reference_date, self.locale);
        info!(
            "Fortune lookup: life_path={} reference_date={} season={:?}",
            life_path,
            reference_date,
            request.season()
        );

        let reply = self
            .completer
            .complete(&request.build_prompt(), &request.system_prompt())
            .await?;

        let fortune = parse_fortune_reply(&reply).map_err(|e| {
            warn!("Rejected fortune reply: {e}");
            FortuneError::from(e)
        })?;

        Ok(FortuneOutcome {
            life_path_number: life_path,
            reference_date,
            weekday: request.weekday().to_string(),
            month: request.month().to_string(),
            season: request.season_label().to_string(),
            fortune,
        })
    }
}

/// Birthdate no earlier than 1900-01-01; reference date no earlier than the birthdate.
pub fn validate_dates(birthdate: NaiveDate, reference_date: NaiveDate) -> Result<(), FortuneError> {
    if birthdate.year() < MIN_BIRTH_YEAR {
        return Err(FortuneError::Validation(format!(
            "birthdate must be on or after {MIN_BIRTH_YEAR}-01-01"
        )));
    }
    if reference_date < birthdate {
        return Err(FortuneError::Validation(
            "reference_date cannot be before birthdate".to_string(),
        ));
    }
    Ok(())
}
