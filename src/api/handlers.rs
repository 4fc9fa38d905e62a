//! HTTP request handlers for the Career Progression Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_timeline, calculate_career_summary};
use crate::models::{CareerEvent, EmploymentPeriod, ProgressionResult};

use super::request::SummaryRequest;
use super::response::{ApiError, LevelsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", post(summary_handler))
        .route("/levels", get(levels_handler))
        .with_state(state)
}

/// Handler for POST /summary endpoint.
///
/// Accepts a career history and returns the calculated progression result.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // The only place the clock is read: ongoing periods end "today" unless
    // the request pins an as_of date.
    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    // Convert request types to domain types
    let periods: Vec<EmploymentPeriod> = request.periods.into_iter().map(Into::into).collect();
    let events: Vec<CareerEvent> = request.events.into_iter().map(Into::into).collect();

    // Perform the calculation; it is total and cannot fail.
    let start_time = Instant::now();
    let summary = calculate_career_summary(&periods, &events, as_of, state.config().levels());
    let timeline = build_timeline(&events);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        periods_count = periods.len(),
        events_count = events.len(),
        total_experience_years = %summary.total_experience_years,
        duration_us,
        "Summary calculation completed"
    );

    let result = ProgressionResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        as_of,
        summary,
        timeline,
        duration_us,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for GET /levels endpoint.
///
/// Returns the configured seniority ladder and engine metadata.
async fn levels_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = LevelsResponse {
        engine: state.config().metadata().clone(),
        levels: state.config().levels().levels().to_vec(),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
