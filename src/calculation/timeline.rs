//! Career timeline construction.

use crate::models::{CareerEvent, CareerEventKind};

/// Sort rank for same-day events: a job switch reads end-then-start, and a
/// promotion precedes the raise it caused.
fn kind_rank(kind: CareerEventKind) -> u8 {
    match kind {
        CareerEventKind::JobEnd => 0,
        CareerEventKind::JobStart => 1,
        CareerEventKind::Promotion => 2,
        CareerEventKind::Raise => 3,
    }
}

/// Builds the chronological career timeline from a list of events.
///
/// Events are ordered ascending by date; same-day events order job_end,
/// job_start, promotion, raise. The sort is stable, so input order is
/// preserved beyond that.
///
/// # Examples
///
/// ```
/// use career_engine::calculation::build_timeline;
/// use career_engine::models::{CareerEvent, CareerEventKind};
/// use chrono::NaiveDate;
///
/// let switch_day = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
/// let events = vec![
///     CareerEvent {
///         date: switch_day,
///         kind: CareerEventKind::JobStart,
///         salary_change: None,
///         description: None,
///     },
///     CareerEvent {
///         date: switch_day,
///         kind: CareerEventKind::JobEnd,
///         salary_change: None,
///         description: None,
///     },
/// ];
///
/// let timeline = build_timeline(&events);
/// assert_eq!(timeline[0].kind, CareerEventKind::JobEnd);
/// assert_eq!(timeline[1].kind, CareerEventKind::JobStart);
/// ```
pub fn build_timeline(events: &[CareerEvent]) -> Vec<CareerEvent> {
    let mut timeline = events.to_vec();
    timeline.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
    });
    timeline
}
