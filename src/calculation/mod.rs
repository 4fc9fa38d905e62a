//! Calculation logic for the Career Progression Engine.
//!
//! This module contains all the calculation functions for deriving career
//! analytics, including fractional months-worked durations, prorated
//! compensation, per-period tenure, the per-year salary series, the highest
//! salary increase, seniority level progression, the career timeline, and
//! the aggregate career summary.

mod highest_increase;
mod months_worked;
mod proration;
mod salary_series;
mod seniority;
mod summary;
mod tenure;
mod timeline;

pub use highest_increase::find_highest_increase;
pub use months_worked::{calculate_months_worked, days_in_month};
pub use proration::{prorate_compensation, prorate_period};
pub use salary_series::salary_by_year;
pub use seniority::{level_for_experience, level_progression};
pub use summary::calculate_career_summary;
pub use tenure::{average_tenure_years, period_months_worked, total_experience_months};
pub use timeline::build_timeline;
