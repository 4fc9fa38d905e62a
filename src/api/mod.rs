//! HTTP API module for the Career Progression Engine.
//!
//! This module provides the REST API endpoints for calculating career
//! progression summaries and inspecting the configured seniority ladder.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SummaryRequest;
pub use response::{ApiError, LevelsResponse};
pub use state::AppState;
