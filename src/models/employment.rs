//! Employment period model.
//!
//! This module defines the EmploymentPeriod struct representing one job
//! held by a user, as supplied by the external persistence layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single employment period in a user's career history.
///
/// An absent `end_date` means the position is ongoing; calculations
/// substitute an explicitly-injected "as of" date so results stay
/// reproducible. Salaries are integer minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentPeriod {
    /// Unique identifier for the period.
    pub id: String,
    /// The employer's name.
    pub company: String,
    /// The job title held during this period.
    pub title: String,
    /// The date the position started.
    pub start_date: NaiveDate,
    /// The date the position ended, or `None` if ongoing.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The annual salary in minor currency units (cents), if known.
    #[serde(default)]
    pub annual_salary: Option<i64>,
}

impl EmploymentPeriod {
    /// Returns true if the position is ongoing (has no end date).
    ///
    /// # Examples
    ///
    /// ```
    /// use career_engine::models::EmploymentPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = EmploymentPeriod {
    ///     id: "period_001".to_string(),
    ///     company: "Acme Corp".to_string(),
    ///     title: "Software Engineer".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
    ///     end_date: None,
    ///     annual_salary: Some(85_000_00),
    /// };
    /// assert!(period.is_current());
    /// ```
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// Returns the effective end date of the period.
    ///
    /// Closed periods return their own end date; ongoing periods return the
    /// supplied `as_of` date.
    pub fn effective_end(&self, as_of: NaiveDate) -> NaiveDate {
        self.end_date.unwrap_or(as_of)
    }
}
