//! Per-period tenure and total experience calculation.
//!
//! Ongoing periods (no end date) are measured up to an explicitly supplied
//! `as_of` date, never an ambient clock, so results are reproducible.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::EmploymentPeriod;

use super::months_worked::calculate_months_worked;

/// Calculates the fractional months worked in one employment period.
///
/// Ongoing periods end at `as_of`. A period whose effective end precedes
/// its start contributes zero rather than failing: one malformed record
/// must not abort the aggregate for a whole career history.
///
/// # Examples
///
/// ```
/// use career_engine::calculation::period_months_worked;
/// use career_engine::models::EmploymentPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = EmploymentPeriod {
///     id: "period_001".to_string(),
///     company: "Acme Corp".to_string(),
///     title: "Software Engineer".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     end_date: Some(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap()),
///     annual_salary: Some(6_000_000),
/// };
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(period_months_worked(&period, as_of), Decimal::from(12));
/// ```
pub fn period_months_worked(period: &EmploymentPeriod, as_of: NaiveDate) -> Decimal {
    let end = period.effective_end(as_of);
    if end < period.start_date {
        return Decimal::ZERO;
    }
    calculate_months_worked(period.start_date, end)
}

/// Sums the fractional months worked across all periods.
pub fn total_experience_months(periods: &[EmploymentPeriod], as_of: NaiveDate) -> Decimal {
    periods
        .iter()
        .map(|period| period_months_worked(period, as_of))
        .sum()
}

/// Calculates the average tenure per job, in years.
///
/// Returns zero when there are no jobs.
pub fn average_tenure_years(total_months: Decimal, job_count: usize) -> Decimal {
    if job_count == 0 {
        return Decimal::ZERO;
    }
    total_months / Decimal::from(12) / Decimal::from(job_count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create_test_period(start: &str, end: Option<&str>) -> EmploymentPeriod {
        EmploymentPeriod {
            id: format!("period_{}", start),
            company: "Acme Corp".to_string(),
            title: "Software Engineer".to_string(),
            start_date: date(start),
            end_date: end.map(date),
            annual_salary: Some(6_000_000),
        }
    }

    /// TN-001: closed period ignores as_of
    #[test]
    fn test_closed_period_ignores_as_of() {
        let period = create_test_period("2020-01-01", Some("2020-12-31"));

        let early = period_months_worked(&period, date("2021-01-01"));
        let late = period_months_worked(&period, date("2030-01-01"));
        assert_eq!(early, dec("12"));
        assert_eq!(late, dec("12"));
    }

    /// TN-002: ongoing period measured up to as_of
    #[test]
    fn test_ongoing_period_measured_to_as_of() {
        let period = create_test_period("2020-01-01", None);

        assert_eq!(period_months_worked(&period, date("2021-12-31")), dec("24"));
        assert_eq!(period_months_worked(&period, date("2023-12-31")), dec("48"));
    }

    /// TN-003: end before start clamps to zero
    #[test]
    fn test_malformed_period_clamps_to_zero() {
        let period = create_test_period("2021-06-01", Some("2020-06-01"));

        assert_eq!(period_months_worked(&period, date("2024-01-01")), Decimal::ZERO);
    }

    /// TN-004: ongoing period that starts after as_of clamps to zero
    #[test]
    fn test_future_start_clamps_to_zero() {
        let period = create_test_period("2025-06-01", None);

        assert_eq!(period_months_worked(&period, date("2024-01-01")), Decimal::ZERO);
    }

    #[test]
    fn test_total_experience_sums_periods() {
        let periods = vec![
            create_test_period("2018-01-01", Some("2019-12-31")),
            create_test_period("2020-01-01", None),
        ];

        // 24 months + 48 months
        let total = total_experience_months(&periods, date("2023-12-31"));
        assert_eq!(total, dec("72"));
    }

    #[test]
    fn test_total_experience_empty_is_zero() {
        assert_eq!(
            total_experience_months(&[], date("2024-01-01")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_total_experience_skips_malformed_periods() {
        let periods = vec![
            create_test_period("2020-01-01", Some("2020-12-31")),
            create_test_period("2022-01-01", Some("2021-01-01")),
        ];

        let total = total_experience_months(&periods, date("2024-01-01"));
        assert_eq!(total, dec("12"));
    }

    #[test]
    fn test_average_tenure_divides_by_job_count() {
        assert_eq!(average_tenure_years(dec("72"), 2), dec("3"));
        assert_eq!(average_tenure_years(dec("18"), 3), dec("0.5"));
    }

    #[test]
    fn test_average_tenure_zero_jobs_is_zero() {
        assert_eq!(average_tenure_years(dec("72"), 0), Decimal::ZERO);
    }
}
