//! Route handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::{
    DEFAULT_QUESTIONS_PER_REQUEST, MAX_QUESTIONS_PER_REQUEST, MIN_QUESTIONS_PER_REQUEST,
    SERVICE_NAME,
};
use crate::models::Question;

use super::error::ApiError;
use super::server::AppState;

/// Query string of `GET /api/questions`.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsQuery {
    pub count: Option<i64>,
    /// Comma-separated category names.
    pub categories: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Split a comma-separated category list, trimming entries and dropping
/// empty ones.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_count(count: Option<i64>) -> Result<usize, ApiError> {
    let count = count.unwrap_or(DEFAULT_QUESTIONS_PER_REQUEST);
    if !(MIN_QUESTIONS_PER_REQUEST..=MAX_QUESTIONS_PER_REQUEST).contains(&count) {
        return Err(ApiError::Validation(format!(
            "count must be between {} and {}, got {}",
            MIN_QUESTIONS_PER_REQUEST, MAX_QUESTIONS_PER_REQUEST, count
        )));
    }
    usize::try_from(count).map_err(|e| ApiError::Validation(e.to_string()))
}

/// `GET /api/questions` - a randomized quiz.
#[tracing::instrument(skip_all, fields(count = ?params.count, categories = ?params.categories))]
pub async fn get_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionsQuery>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let count = validate_count(params.count)?;
    let categories = params.categories.as_deref().map(parse_categories);

    let questions = state
        .selector
        .get_random(count, categories.as_deref(), &mut rand::rng())?;

    Ok(Json(QuestionsResponse { questions }))
}

/// `GET /health`
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Gridiron IQ API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
