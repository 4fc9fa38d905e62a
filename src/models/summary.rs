//! Career progression summary models.
//!
//! This module contains the [`CareerProgressionSummary`] type and its
//! associated structures, plus the [`ProgressionResult`] envelope returned
//! by the API. All of these are derived, output-only snapshots: they are
//! recomputed fresh on every call and never persisted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CareerEvent;

/// The single largest positive salary increase found in a career history.
///
/// # Example
///
/// ```
/// use career_engine::models::SalaryIncrease;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let increase = SalaryIncrease {
///     amount: 1_500_000,
///     percent: Decimal::from_str("25.00").unwrap(),
///     reason: "Promoted to Senior Engineer".to_string(),
///     date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryIncrease {
    /// The increase amount in minor currency units (cents).
    pub amount: i64,
    /// The increase as a percentage of the previous salary, or zero when
    /// the previous salary is unknown.
    pub percent: Decimal,
    /// A human-readable reason for the increase.
    pub reason: String,
    /// The date the increase took effect.
    pub date: NaiveDate,
}

/// One entry in the per-year salary series.
///
/// Years touched by multiple periods consolidate to the highest salary
/// (the same replace-if-higher rule the salary chart uses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryYearPoint {
    /// The calendar year.
    pub year: i32,
    /// The highest annual salary held during that year, in minor currency
    /// units (cents).
    pub salary: i64,
}

/// A change of seniority level at a point in a career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelChange {
    /// The date the level took effect (the start of the period during
    /// which it was first held).
    pub date: NaiveDate,
    /// The display name of the level.
    pub level: String,
}

/// Aggregate career summary derived from employment periods and events.
///
/// Every field is computed fresh from the input lists. Unknown salaries
/// surface as `0` and empty histories as empty lists; the summary backs a
/// user-facing dashboard, so a degraded-but-present value is always
/// preferred over an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerProgressionSummary {
    /// Total experience across all periods, in years (two decimal places).
    pub total_experience_years: Decimal,
    /// The salary of the chronologically earliest period with a known
    /// salary, in minor currency units. Zero when unknown.
    pub first_salary: i64,
    /// The salary of the current (or latest) period, in minor currency
    /// units. Zero when unknown.
    pub current_salary: i64,
    /// Total salary growth (`current_salary - first_salary`); may be
    /// negative.
    pub salary_growth: i64,
    /// Salary growth as a percentage of the first salary. Zero when the
    /// first salary is zero or unknown.
    pub salary_growth_percent: Decimal,
    /// Salary growth percentage normalized by total years of experience.
    /// Zero when experience is zero.
    pub average_annual_growth_percent: Decimal,
    /// Number of promotion events.
    pub promotion_count: u32,
    /// Number of job changes (periods minus one, floored at zero).
    pub job_change_count: u32,
    /// Average tenure per job in years. Zero when there are no periods.
    pub average_tenure_years: Decimal,
    /// The single largest positive salary increase, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_increase: Option<SalaryIncrease>,
    /// Per-year salary series, ascending by year.
    pub salary_by_year: Vec<SalaryYearPoint>,
    /// The current seniority level, if any periods exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_level: Option<String>,
    /// Level-progression history, ascending by date.
    pub level_history: Vec<LevelChange>,
}

impl CareerProgressionSummary {
    /// Returns a summary with all numeric fields zero and all lists empty.
    ///
    /// This is the result for an empty career history.
    pub fn empty() -> Self {
        Self {
            total_experience_years: Decimal::ZERO,
            first_salary: 0,
            current_salary: 0,
            salary_growth: 0,
            salary_growth_percent: Decimal::ZERO,
            average_annual_growth_percent: Decimal::ZERO,
            promotion_count: 0,
            job_change_count: 0,
            average_tenure_years: Decimal::ZERO,
            highest_increase: None,
            salary_by_year: vec![],
            current_level: None,
            level_history: vec![],
        }
    }
}

/// The complete result of a progression calculation, as returned by the API.
///
/// # Example
///
/// ```
/// use career_engine::models::{CareerProgressionSummary, ProgressionResult};
/// use chrono::{NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let result = ProgressionResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     as_of: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     summary: CareerProgressionSummary::empty(),
///     timeline: vec![],
///     duration_us: 0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The date used as "today" for ongoing periods.
    pub as_of: NaiveDate,
    /// The aggregate career summary.
    pub summary: CareerProgressionSummary,
    /// The chronological career timeline.
    pub timeline: Vec<CareerEvent>,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_summary_has_all_zero_fields() {
        let summary = CareerProgressionSummary::empty();

        assert_eq!(summary.total_experience_years, Decimal::ZERO);
        assert_eq!(summary.first_salary, 0);
        assert_eq!(summary.current_salary, 0);
        assert_eq!(summary.salary_growth, 0);
        assert_eq!(summary.salary_growth_percent, Decimal::ZERO);
        assert_eq!(summary.average_annual_growth_percent, Decimal::ZERO);
        assert_eq!(summary.promotion_count, 0);
        assert_eq!(summary.job_change_count, 0);
        assert_eq!(summary.average_tenure_years, Decimal::ZERO);
        assert!(summary.highest_increase.is_none());
        assert!(summary.salary_by_year.is_empty());
        assert!(summary.current_level.is_none());
        assert!(summary.level_history.is_empty());
    }

    #[test]
    fn test_summary_serialization_skips_absent_options() {
        let summary = CareerProgressionSummary::empty();
        let json = serde_json::to_string(&summary).unwrap();

        assert!(!json.contains("highest_increase"));
        assert!(!json.contains("current_level"));
        assert!(json.contains("\"salary_by_year\":[]"));
        assert!(json.contains("\"level_history\":[]"));
    }

    #[test]
    fn test_summary_decimal_fields_serialize_as_strings() {
        let mut summary = CareerProgressionSummary::empty();
        summary.total_experience_years = dec("6.00");
        summary.salary_growth_percent = dec("50.00");

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"total_experience_years\":\"6.00\""));
        assert!(json.contains("\"salary_growth_percent\":\"50.00\""));
    }

    #[test]
    fn test_salary_increase_serialization() {
        let increase = SalaryIncrease {
            amount: 1_500_000,
            percent: dec("25.00"),
            reason: "Job change to Initech".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
        };

        let json = serde_json::to_string(&increase).unwrap();
        assert!(json.contains("\"amount\":1500000"));
        assert!(json.contains("\"percent\":\"25.00\""));
        assert!(json.contains("\"date\":\"2023-04-01\""));
    }

    #[test]
    fn test_salary_year_point_serialization() {
        let point = SalaryYearPoint {
            year: 2023,
            salary: 9_000_000,
        };

        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"year\":2023"));
        assert!(json.contains("\"salary\":9000000"));
    }

    #[test]
    fn test_progression_result_round_trip() {
        let result = ProgressionResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2024-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            as_of: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            summary: CareerProgressionSummary::empty(),
            timeline: vec![],
            duration_us: 42,
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: ProgressionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
