//! Axum route handlers for the fortune form and the Fortune API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::fortune::page::{render_page, FormValues, PageContent};
use crate::fortune::service::{FortuneOutcome, MIN_BIRTH_YEAR};
use crate::numerology::{compute_life_path_number, LifePathNumber};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FortuneLookupRequest {
    pub birthdate: NaiveDate,
    pub reference_date: NaiveDate,
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LifePathQuery {
    pub birthdate: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct LifePathResponse {
    pub birthdate: NaiveDate,
    pub life_path_number: LifePathNumber,
}

/// Raw form fields. Dates stay as strings so bad input renders inline instead of a 422.
#[derive(Debug, Deserialize)]
pub struct FortuneForm {
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub reference_date: String,
    #[serde(default)]
    pub session_id: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared lookup path
// ────────────────────────────────────────────────────────────────────────────

/// Runs one lookup under the session's single-flight permit.
/// Requests without a session id get a fresh one, so they never collide.
async fn guarded_lookup(
    state: &AppState,
    session_id: Option<&str>,
    birthdate: NaiveDate,
    reference_date: NaiveDate,
) -> Result<FortuneOutcome, AppError> {
    let session_id = match session_id.map(str::trim).filter(|s| !s.is_empty()) {
        Some(id) => id.to_string(),
        None => Uuid::new_v4().to_string(),
    };

    let _permit = state
        .lookups
        .acquire(&session_id)
        .ok_or(AppError::LookupInProgress)?;

    Ok(state.fortune.lookup(birthdate, reference_date).await?)
}

fn parse_form_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{field} must be a date in YYYY-MM-DD format")))
}

// ────────────────────────────────────────────────────────────────────────────
// HTML handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Blank form with a fresh session id.
pub async fn handle_form_page() -> Html<String> {
    let session_id = Uuid::new_v4().to_string();
    Html(render_page(
        &FormValues {
            session_id: &session_id,
            ..Default::default()
        },
        PageContent::Blank,
    ))
}

/// POST /
///
/// Form submission. Success and failure both render the page; failures inline.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(form): Form<FortuneForm>,
) -> (StatusCode, Html<String>) {
    let values = FormValues {
        birthdate: &form.birthdate,
        reference_date: &form.reference_date,
        session_id: &form.session_id,
    };

    let dates = parse_form_date(&form.birthdate, "birthdate").and_then(|b| {
        parse_form_date(&form.reference_date, "reference_date").map(|r| (b, r))
    });

    let result = match dates {
        Ok((birthdate, reference_date)) => {
            guarded_lookup(&state, Some(form.session_id.as_str()), birthdate, reference_date)
                .await
                .map_err(|e| (e, Some(birthdate)))
        }
        Err(e) => Err((e, None)),
    };

    match result {
        Ok(outcome) => (
            StatusCode::OK,
            Html(render_page(&values, PageContent::Outcome(&outcome))),
        ),
        Err((err, birthdate)) => {
            let (status, _, message) = err.parts();
            // The number is already known when the failure happened at the LLM step.
            let reached_llm = matches!(err, AppError::MalformedReply(_) | AppError::Transport(_));
            let life_path = birthdate
                .filter(|_| reached_llm)
                .map(compute_life_path_number);
            (
                status,
                Html(render_page(
                    &values,
                    PageContent::Error {
                        life_path,
                        message: &message,
                    },
                )),
            )
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/life-path?birthdate=YYYY-MM-DD
///
/// Life path number only. Never calls the LLM.
pub async fn handle_life_path(
    Query(query): Query<LifePathQuery>,
) -> Result<Json<LifePathResponse>, AppError> {
    use chrono::Datelike;

    if query.birthdate.year() < MIN_BIRTH_YEAR {
        return Err(AppError::Validation(format!(
            "birthdate must be on or after {MIN_BIRTH_YEAR}-01-01"
        )));
    }

    Ok(Json(LifePathResponse {
        birthdate: query.birthdate,
        life_path_number: compute_life_path_number(query.birthdate),
    }))
}

/// POST /api/v1/fortune
///
/// Full lookup: life path → prompt → one LLM call → validated fortune.
pub async fn handle_fortune(
    State(state): State<AppState>,
    Json(request): Json<FortuneLookupRequest>,
) -> Result<Json<FortuneOutcome>, AppError> {
    let outcome = guarded_lookup(
        &state,
        request.session_id.as_deref(),
        request.birthdate,
        request.reference_date,
    )
    .await?;

    Ok(Json(outcome))
}
