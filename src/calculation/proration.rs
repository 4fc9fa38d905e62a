//! Prorated compensation calculation.
//!
//! This module scales an annual salary down to the fraction of a year
//! actually worked. Rounding happens exactly once, on the final product,
//! so a full twelve months always reproduces the annual salary with no
//! drift.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::EmploymentPeriod;

use super::tenure::period_months_worked;

/// Calculates the prorated compensation for a number of months worked.
///
/// Returns `round(annual_salary * months_worked / 12)` in minor currency
/// units, rounding half away from zero, applied once to the final product.
/// Non-positive salaries or durations return zero.
///
/// # Arguments
///
/// * `annual_salary` - The annual salary in minor currency units (cents)
/// * `months_worked` - The fractional months worked (from
///   [`calculate_months_worked`](super::calculate_months_worked))
///
/// # Examples
///
/// ```
/// use career_engine::calculation::prorate_compensation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Twelve months returns the salary exactly.
/// assert_eq!(prorate_compensation(8_500_000, Decimal::from(12)), 8_500_000);
///
/// // One month of $120,000.00 is exactly $10,000.00.
/// assert_eq!(prorate_compensation(120_000_00, Decimal::ONE), 10_000_00);
///
/// // Half a month still earns something.
/// let half = Decimal::from_str("0.5").unwrap();
/// assert_eq!(prorate_compensation(120_000_00, half), 5_000_00);
/// ```
pub fn prorate_compensation(annual_salary: i64, months_worked: Decimal) -> i64 {
    if annual_salary <= 0 || months_worked <= Decimal::ZERO {
        return 0;
    }

    let amount = Decimal::from(annual_salary) * months_worked / Decimal::from(12);
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Calculates the prorated compensation contribution of one employment
/// period, using `as_of` as the end of ongoing periods.
///
/// Periods without a known salary contribute zero.
pub fn prorate_period(period: &EmploymentPeriod, as_of: NaiveDate) -> i64 {
    match period.annual_salary {
        Some(salary) => prorate_compensation(salary, period_months_worked(period, as_of)),
        None => 0,
    }
}
