//! Seniority level derivation.
//!
//! Maps cumulative experience onto the configured level ladder and records
//! the level in force at the start of each employment period.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{LevelTable, SeniorityLevel};
use crate::models::{EmploymentPeriod, LevelChange};

use super::tenure::period_months_worked;

/// Returns the level in force for a given amount of total experience.
///
/// The ladder is ascending, so this is the highest configured level whose
/// `min_years` does not exceed `years`. Experience below every threshold
/// maps to the base level.
pub fn level_for_experience(years: Decimal, levels: &LevelTable) -> &SeniorityLevel {
    levels
        .levels()
        .iter()
        .rfind(|level| level.min_years <= years)
        .unwrap_or_else(|| levels.base_level())
}

/// Builds the level-progression history across a set of employment periods.
///
/// Periods are walked in start-date order; before each one, the cumulative
/// experience of all earlier periods determines the level held when it
/// began. An entry is emitted whenever that level differs from the
/// previous one, so the history is the sequence of level attainments with
/// their dates.
pub fn level_progression(
    periods: &[EmploymentPeriod],
    as_of: NaiveDate,
    levels: &LevelTable,
) -> Vec<LevelChange> {
    let mut sorted: Vec<&EmploymentPeriod> = periods.iter().collect();
    sorted.sort_by_key(|p| p.start_date);

    let mut history: Vec<LevelChange> = Vec::new();
    let mut cumulative_months = Decimal::ZERO;

    for period in sorted {
        let years = cumulative_months / Decimal::from(12);
        let level = level_for_experience(years, levels);

        if history.last().map(|change| change.level.as_str()) != Some(level.name.as_str()) {
            history.push(LevelChange {
                date: period.start_date,
                level: level.name.clone(),
            });
        }

        cumulative_months += period_months_worked(period, as_of);
    }

    history
}
