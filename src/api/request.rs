//! Request types for the Career Progression Engine API.
//!
//! This module defines the JSON request structures for the `/summary`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CareerEvent, CareerEventKind, EmploymentPeriod};

/// Request body for the `/summary` endpoint.
///
/// Contains a user's employment history and career events. When `as_of`
/// is absent, the server substitutes today's date for ongoing periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The user's employment periods.
    pub periods: Vec<EmploymentPeriodRequest>,
    /// The user's career events.
    #[serde(default)]
    pub events: Vec<CareerEventRequest>,
    /// The date to treat as "today" for ongoing periods.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Employment period information in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmploymentPeriodRequest {
    /// Unique identifier for the period.
    pub id: String,
    /// The employer's name.
    pub company: String,
    /// The job title held during this period.
    pub title: String,
    /// The date the position started.
    pub start_date: NaiveDate,
    /// The date the position ended, or absent if ongoing.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The annual salary in minor currency units (cents), if known.
    #[serde(default)]
    pub annual_salary: Option<i64>,
}

/// Career event information in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerEventRequest {
    /// The date the event occurred.
    pub date: NaiveDate,
    /// The kind of event.
    pub kind: CareerEventKind,
    /// The salary change associated with the event, in minor currency
    /// units (cents), if any.
    #[serde(default)]
    pub salary_change: Option<i64>,
    /// Free-text description of the event.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<EmploymentPeriodRequest> for EmploymentPeriod {
    fn from(req: EmploymentPeriodRequest) -> Self {
        EmploymentPeriod {
            id: req.id,
            company: req.company,
            title: req.title,
            start_date: req.start_date,
            end_date: req.end_date,
            annual_salary: req.annual_salary,
        }
    }
}

impl From<CareerEventRequest> for CareerEvent {
    fn from(req: CareerEventRequest) -> Self {
        CareerEvent {
            date: req.date,
            kind: req.kind,
            salary_change: req.salary_change,
            description: req.description,
        }
    }
}
