//! Career progression summary aggregation.
//!
//! Composes the smaller calculation functions into the single summary
//! snapshot that backs the dashboard. The aggregator is total: empty
//! inputs produce an all-zero summary, malformed records are clamped
//! rather than rejected, and every division guards its denominator.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::LevelTable;
use crate::models::{CareerEvent, CareerProgressionSummary, EmploymentPeriod};

use super::highest_increase::find_highest_increase;
use super::salary_series::salary_by_year;
use super::seniority::{level_for_experience, level_progression};
use super::tenure::{average_tenure_years, total_experience_months};

/// The current period: the open one with the latest start date, or the
/// chronologically latest period when every period is closed.
fn current_period<'a>(sorted: &[&'a EmploymentPeriod]) -> Option<&'a EmploymentPeriod> {
    sorted
        .iter()
        .filter(|p| p.is_current())
        .max_by_key(|p| p.start_date)
        .copied()
        .or_else(|| sorted.last().copied())
}

/// Calculates the aggregate career summary for one user.
///
/// # Arguments
///
/// * `periods` - The user's employment periods, in any order
/// * `events` - The user's career events
/// * `as_of` - The date to treat as "today" for ongoing periods
/// * `levels` - The configured seniority ladder
///
/// # Behavior
///
/// Never fails: empty inputs return [`CareerProgressionSummary::empty`],
/// unknown salaries surface as zero, and zero denominators yield zero
/// instead of propagating a division error. One malformed period (end
/// before start) contributes zero months without aborting the rest of the
/// history.
///
/// # Examples
///
/// ```
/// use career_engine::calculation::calculate_career_summary;
/// use career_engine::config::{LevelTable, SeniorityLevel};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let levels = LevelTable::new(vec![SeniorityLevel {
///     code: "junior".to_string(),
///     name: "Junior".to_string(),
///     min_years: Decimal::ZERO,
/// }])
/// .unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let summary = calculate_career_summary(&[], &[], as_of, &levels);
/// assert_eq!(summary.promotion_count, 0);
/// assert!(summary.salary_by_year.is_empty());
/// ```
pub fn calculate_career_summary(
    periods: &[EmploymentPeriod],
    events: &[CareerEvent],
    as_of: NaiveDate,
    levels: &LevelTable,
) -> CareerProgressionSummary {
    if periods.is_empty() && events.is_empty() {
        return CareerProgressionSummary::empty();
    }

    let mut sorted: Vec<&EmploymentPeriod> = periods.iter().collect();
    sorted.sort_by_key(|p| p.start_date);

    let total_months = total_experience_months(periods, as_of);
    let total_years = total_months / Decimal::from(12);

    let first_salary = sorted
        .iter()
        .find_map(|p| p.annual_salary)
        .unwrap_or(0);
    let current_salary = current_period(&sorted)
        .and_then(|p| p.annual_salary)
        .unwrap_or(0);

    let salary_growth = current_salary - first_salary;
    let growth_ratio_percent = if first_salary > 0 {
        Decimal::from(salary_growth) / Decimal::from(first_salary) * Decimal::from(100)
    } else {
        Decimal::ZERO
    };
    let average_annual_growth_percent = if total_years > Decimal::ZERO {
        (growth_ratio_percent / total_years).round_dp(2)
    } else {
        Decimal::ZERO
    };

    let promotion_count = events.iter().filter(|e| e.is_promotion()).count() as u32;
    let job_change_count = periods.len().saturating_sub(1) as u32;

    let current_level = if periods.is_empty() {
        None
    } else {
        Some(level_for_experience(total_years, levels).name.clone())
    };

    CareerProgressionSummary {
        total_experience_years: total_years.round_dp(2),
        first_salary,
        current_salary,
        salary_growth,
        salary_growth_percent: growth_ratio_percent.round_dp(2),
        average_annual_growth_percent,
        promotion_count,
        job_change_count,
        average_tenure_years: average_tenure_years(total_months, periods.len()).round_dp(2),
        highest_increase: find_highest_increase(periods, events, as_of),
        salary_by_year: salary_by_year(periods, as_of),
        current_level,
        level_history: level_progression(periods, as_of, levels),
    }
}
