//! Career event model and related types.
//!
//! This module defines the CareerEvent struct and CareerEventKind enum for
//! representing discrete dated occurrences in a user's career history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of a career event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerEventKind {
    /// The user started a job.
    JobStart,
    /// The user left a job.
    JobEnd,
    /// The user was promoted within a job.
    Promotion,
    /// The user received a raise without a title change.
    Raise,
}

/// Represents a discrete dated event in a user's career.
///
/// Events are used to build the career timeline and to derive counts and
/// the highest salary increase; the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerEvent {
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

impl CareerEvent {
    /// Returns true if the event is a promotion.
    pub fn is_promotion(&self) -> bool {
        self.kind == CareerEventKind::Promotion
    }
}
