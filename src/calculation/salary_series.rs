//! Per-year salary series consolidation.
//!
//! Builds the year-by-year salary data behind the dashboard salary chart.
//! Years covered by more than one period consolidate with the same
//! replace-if-higher rule the chart uses: the higher salary wins.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::models::{EmploymentPeriod, SalaryYearPoint};

/// Builds the per-year salary series for a set of employment periods.
///
/// One entry is produced per calendar year touched by any period with a
/// known salary. When periods overlap within a year, the higher annual
/// salary wins. Malformed periods (end before start) are skipped, as are
/// periods without a salary. Entries are ascending by year.
///
/// # Examples
///
/// ```
/// use career_engine::calculation::salary_by_year;
/// use career_engine::models::EmploymentPeriod;
/// use chrono::NaiveDate;
///
/// let period = EmploymentPeriod {
///     id: "period_001".to_string(),
///     company: "Acme Corp".to_string(),
///     title: "Software Engineer".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
///     end_date: Some(NaiveDate::from_ymd_opt(2022, 3, 31).unwrap()),
///     annual_salary: Some(7_500_000),
/// };
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let series = salary_by_year(&[period], as_of);
/// assert_eq!(series.len(), 2);
/// assert_eq!(series[0].year, 2021);
/// assert_eq!(series[1].year, 2022);
/// ```
pub fn salary_by_year(periods: &[EmploymentPeriod], as_of: NaiveDate) -> Vec<SalaryYearPoint> {
    let mut by_year: BTreeMap<i32, i64> = BTreeMap::new();

    for period in periods {
        let Some(salary) = period.annual_salary else {
            continue;
        };
        let end = period.effective_end(as_of);
        if end < period.start_date {
            continue;
        }

        for year in period.start_date.year()..=end.year() {
            by_year
                .entry(year)
                .and_modify(|current| {
                    if salary > *current {
                        *current = salary;
                    }
                })
                .or_insert(salary);
        }
    }

    by_year
        .into_iter()
        .map(|(year, salary)| SalaryYearPoint { year, salary })
        .collect()
}
