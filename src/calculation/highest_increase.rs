//! Highest salary increase detection.
//!
//! Scans both explicit career events (promotions, raises) and implicit
//! period-to-period transitions for the single largest positive salary
//! delta in a career history.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{CareerEvent, CareerEventKind, EmploymentPeriod, SalaryIncrease};

fn percent_of(delta: i64, base: i64) -> Decimal {
    if base <= 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(delta) / Decimal::from(base) * Decimal::from(100)).round_dp(2)
}

/// The salary known for the period active on a given date. The recorded
/// period salary is the post-change figure, so the pre-change base for an
/// event is that salary minus the event's delta.
fn salary_at(periods: &[EmploymentPeriod], date: NaiveDate, as_of: NaiveDate) -> Option<i64> {
    periods
        .iter()
        .filter(|p| p.start_date <= date && date <= p.effective_end(as_of))
        .max_by_key(|p| p.start_date)
        .and_then(|p| p.annual_salary)
}

fn event_candidate(
    event: &CareerEvent,
    periods: &[EmploymentPeriod],
    as_of: NaiveDate,
) -> Option<SalaryIncrease> {
    if !matches!(
        event.kind,
        CareerEventKind::Promotion | CareerEventKind::Raise
    ) {
        return None;
    }
    let delta = event.salary_change?;
    if delta <= 0 {
        return None;
    }

    let base = salary_at(periods, event.date, as_of)
        .map(|salary| salary - delta)
        .unwrap_or(0);
    let reason = event.description.clone().unwrap_or_else(|| {
        match event.kind {
            CareerEventKind::Promotion => "Promotion",
            _ => "Raise",
        }
        .to_string()
    });

    Some(SalaryIncrease {
        amount: delta,
        percent: percent_of(delta, base),
        reason,
        date: event.date,
    })
}

/// Finds the single largest positive salary increase in a career history.
///
/// Candidates come from two sources: promotion/raise events carrying a
/// positive salary change, and consecutive employment periods where both
/// salaries are known and the later one is higher. Ties on amount break
/// toward the most recent date. Returns `None` when no candidate exists.
pub fn find_highest_increase(
    periods: &[EmploymentPeriod],
    events: &[CareerEvent],
    as_of: NaiveDate,
) -> Option<SalaryIncrease> {
    let mut candidates: Vec<SalaryIncrease> = events
        .iter()
        .filter_map(|event| event_candidate(event, periods, as_of))
        .collect();

    let mut sorted: Vec<&EmploymentPeriod> = periods.iter().collect();
    sorted.sort_by_key(|p| p.start_date);
    for pair in sorted.windows(2) {
        let (Some(previous), Some(next)) = (pair[0].annual_salary, pair[1].annual_salary) else {
            continue;
        };
        let delta = next - previous;
        if delta <= 0 {
            continue;
        }
        candidates.push(SalaryIncrease {
            amount: delta,
            percent: percent_of(delta, previous),
            reason: format!("Job change to {}", pair[1].company),
            date: pair[1].start_date,
        });
    }

    candidates.into_iter().max_by(|a, b| {
        a.amount
            .cmp(&b.amount)
            .then_with(|| a.date.cmp(&b.date))
    })
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

    fn create_test_period(
        company: &str,
        start: &str,
        end: Option<&str>,
        annual_salary: Option<i64>,
    ) -> EmploymentPeriod {
        EmploymentPeriod {
            id: format!("period_{}", company),
            company: company.to_string(),
            title: "Software Engineer".to_string(),
            start_date: date(start),
            end_date: end.map(date),
            annual_salary,
        }
    }

    fn raise_event(date_str: &str, delta: i64, description: Option<&str>) -> CareerEvent {
        CareerEvent {
            date: date(date_str),
            kind: CareerEventKind::Raise,
            salary_change: Some(delta),
            description: description.map(str::to_string),
        }
    }

    /// HI-001: period transition produces the increase
    #[test]
    fn test_transition_between_periods() {
        let periods = vec![
            create_test_period("Acme", "2018-01-01", Some("2019-12-31"), Some(6_000_000)),
            create_test_period("Initech", "2020-01-01", None, Some(9_000_000)),
        ];

        let increase = find_highest_increase(&periods, &[], date("2023-12-31")).unwrap();
        assert_eq!(increase.amount, 3_000_000);
        assert_eq!(increase.percent, dec("50.00"));
        assert_eq!(increase.reason, "Job change to Initech");
        assert_eq!(increase.date, date("2020-01-01"));
    }

    /// HI-002: a larger event beats a smaller transition
    #[test]
    fn test_event_beats_smaller_transition() {
        let periods = vec![
            create_test_period("Acme", "2018-01-01", Some("2019-12-31"), Some(6_000_000)),
            create_test_period("Initech", "2020-01-01", None, Some(7_000_000)),
        ];
        let events = vec![raise_event(
            "2021-06-01",
            2_000_000,
            Some("Counter-offer raise"),
        )];

        let increase = find_highest_increase(&periods, &events, date("2023-12-31")).unwrap();
        assert_eq!(increase.amount, 2_000_000);
        assert_eq!(increase.reason, "Counter-offer raise");
        // Base is the active period's salary minus the delta: 5,000,000.
        assert_eq!(increase.percent, dec("40.00"));
    }

    /// HI-003: ties break toward the most recent date
    #[test]
    fn test_tie_breaks_to_most_recent() {
        let events = vec![
            raise_event("2020-01-01", 1_000_000, Some("First raise")),
            raise_event("2022-01-01", 1_000_000, Some("Second raise")),
        ];

        let increase = find_highest_increase(&[], &events, date("2023-12-31")).unwrap();
        assert_eq!(increase.reason, "Second raise");
        assert_eq!(increase.date, date("2022-01-01"));
    }

    /// HI-004: negative and missing deltas are ignored
    #[test]
    fn test_no_positive_delta_yields_none() {
        let periods = vec![
            create_test_period("Acme", "2018-01-01", Some("2019-12-31"), Some(9_000_000)),
            create_test_period("Initech", "2020-01-01", None, Some(6_000_000)),
        ];
        let events = vec![CareerEvent {
            date: date("2021-01-01"),
            kind: CareerEventKind::Raise,
            salary_change: None,
            description: None,
        }];

        assert!(find_highest_increase(&periods, &events, date("2023-12-31")).is_none());
    }

    /// HI-005: events without descriptions fall back to a kind label
    #[test]
    fn test_default_reason_from_kind() {
        let events = vec![CareerEvent {
            date: date("2021-01-01"),
            kind: CareerEventKind::Promotion,
            salary_change: Some(500_000),
            description: None,
        }];

        let increase = find_highest_increase(&[], &events, date("2023-12-31")).unwrap();
        assert_eq!(increase.reason, "Promotion");
        // No active period, so no base salary and no percentage.
        assert_eq!(increase.percent, Decimal::ZERO);
    }

    /// HI-006: job start/end events never produce candidates
    #[test]
    fn test_job_boundary_events_ignored() {
        let events = vec![CareerEvent {
            date: date("2021-01-01"),
            kind: CareerEventKind::JobStart,
            salary_change: Some(9_000_000),
            description: None,
        }];

        assert!(find_highest_increase(&[], &events, date("2023-12-31")).is_none());
    }

    #[test]
    fn test_transitions_skip_unknown_salaries() {
        let periods = vec![
            create_test_period("Acme", "2018-01-01", Some("2019-12-31"), None),
            create_test_period("Initech", "2020-01-01", None, Some(9_000_000)),
        ];

        assert!(find_highest_increase(&periods, &[], date("2023-12-31")).is_none());
    }

    #[test]
    fn test_empty_inputs_yield_none() {
        assert!(find_highest_increase(&[], &[], date("2023-12-31")).is_none());
    }
}
