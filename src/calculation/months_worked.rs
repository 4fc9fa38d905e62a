//! Month-fraction duration calculation.
//!
//! This module provides the core duration function that models "worked from
//! day X to day Y" as a continuous fraction of a month, so a partial start
//! month and a partial end month both contribute proportionally instead of
//! only whole calendar months being counted.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Returns the number of days in the given month, using the real calendar.
///
/// Leap years are handled by chrono; no fixed 30/31 table is involved.
///
/// # Examples
///
/// ```
/// use career_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2020, 2), 29); // leap year
/// assert_eq!(days_in_month(2021, 2), 28);
/// assert_eq!(days_in_month(2021, 12), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // Only out-of-range months miss here, and callers pass months taken
    // from valid dates.
    first_of_next
        .and_then(|d| d.pred_opt())
        .map_or(31, |last| last.day())
}

/// Calculates the fractional months worked between two dates.
///
/// The calculation proceeds in three steps:
/// 1. Count whole months from the start month to the end month.
/// 2. Credit the end month: a full month when `end.day >= start.day`,
///    otherwise the fraction `end.day / days_in_end_month`.
/// 3. When the start day is not the 1st, replace the whole first month with
///    the fraction of it actually worked.
///
/// The end-month and start-month adjustments are applied independently and
/// are not symmetric: working through the end day always credits a whole
/// final month. That asymmetry matches the figures users already see on
/// their dashboards and must be preserved as-is.
///
/// The result is clamped to zero, so an `end` before `start` never yields a
/// negative duration.
///
/// # Arguments
///
/// * `start` - The first day worked
/// * `end` - The last day worked
///
/// # Returns
///
/// A non-negative `Decimal` number of months.
///
/// # Examples
///
/// ```
/// use career_engine::calculation::calculate_months_worked;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
/// assert_eq!(calculate_months_worked(start, end), Decimal::from(12));
/// ```
pub fn calculate_months_worked(start: NaiveDate, end: NaiveDate) -> Decimal {
    let whole_months = i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
        - i64::from(start.month());
    let mut months = Decimal::from(whole_months);

    if end.day() >= start.day() {
        months += Decimal::ONE;
    } else {
        let days_in_end = days_in_month(end.year(), end.month());
        months += Decimal::from(end.day()) / Decimal::from(days_in_end);
    }

    if start.day() > 1 {
        let days_in_start = days_in_month(start.year(), start.month());
        let days_worked = days_in_start - start.day() + 1;
        let start_fraction = Decimal::from(days_worked) / Decimal::from(days_in_start);
        months = months - Decimal::ONE + start_fraction;
    }

    months.max(Decimal::ZERO)
}
