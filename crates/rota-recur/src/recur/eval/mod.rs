//! Occurrence evaluation: does a chore occur on a given date?
//!
//! One query per (chore, candidate day). A stored rule string delegates
//! entirely to the recurrence library; without one, a deterministic
//! fallback runs. Every call is stateless — a fresh rule set is built
//! and discarded, with no caching, since call volume is bounded by
//! chores × days rendered.

use chrono::{DateTime, Datelike, Utc};
use rota_core::types::Chore;
use rota_core::util::time::{parse_utc_datetime, utc_day_start, utc_day_window};

use crate::error::{RecurError, RecurResult};
use crate::recur::core::Weekday;
use crate::recur::expand::count_occurrences_in_window;
use crate::recur::parse::FallbackRule;

/// Evaluates whether a recurrence occurs on the target date.
///
/// A non-blank `rule` routes to the library-backed path and returns its
/// answer; the fallback is not consulted. Without a rule, the fallback
/// runs with no parsed rule: the chore occurs on exactly its start day,
/// and never without a start.
///
/// The target's time of day is irrelevant — membership is decided over
/// the inclusive `[00:00:00, 23:59:59]` UTC window of its calendar day.
///
/// ## Errors
///
/// Returns [`RecurError::RuleParse`] for a rule string the recurrence
/// library rejects, and [`RecurError::InvalidStartDate`] when a rule is
/// present but the start string does not parse. The ruleless path never
/// errors.
pub fn occurs_on_date(
    rule: Option<&str>,
    start: Option<&str>,
    target: DateTime<Utc>,
) -> RecurResult<bool> {
    match rule.map(str::trim).filter(|rule| !rule.is_empty()) {
        Some(rule) => occurs_by_rule(rule, start, target),
        None => Ok(occurs_fallback(None, start, target)),
    }
}

/// Evaluates a persisted chore record against the target date.
///
/// Convenience over [`occurs_on_date`] for the stored
/// `recurrence_rule`/`start_date` columns.
///
/// ## Errors
///
/// Same contract as [`occurs_on_date`].
pub fn chore_occurs_on_date(chore: &Chore, target: DateTime<Utc>) -> RecurResult<bool> {
    occurs_on_date(
        chore.recurrence_rule.as_deref(),
        chore.start_date.as_deref(),
        target,
    )
}

/// Library-backed path: window the rule over the target's UTC day.
fn occurs_by_rule(rule: &str, start: Option<&str>, target: DateTime<Utc>) -> RecurResult<bool> {
    // A missing start anchors at the target's own midnight, so an
    // anchorless rule is never excluded as "not yet started".
    let dtstart = match start {
        Some(start) => parse_utc_datetime(start)
            .ok_or_else(|| RecurError::InvalidStartDate(start.to_owned()))?,
        None => utc_day_start(target),
    };

    let rule_line = ensure_rrule_prefix(rule);
    let (window_start, window_end) = utc_day_window(target);
    tracing::trace!(rule = %rule_line, %dtstart, %window_start, "Evaluating rule over day window");

    let count = count_occurrences_in_window(&rule_line, dtstart, window_start, window_end, 1)?;
    Ok(count > 0)
}

/// Prepends `RRULE:` unless the rule already carries the prefix
/// (case-insensitive); already-prefixed input is kept verbatim.
fn ensure_rrule_prefix(rule: &str) -> String {
    if rule
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("RRULE:"))
    {
        rule.to_owned()
    } else {
        format!("RRULE:{rule}")
    }
}

/// Library-free occurrence check for chores without a rule string.
///
/// Routing always reaches this with `parsed: None` today; the `Some`
/// arms keep defined semantics should a parsed rule ever be threaded
/// through: `Daily` matches every day on or after the start, `Weekly`
/// matches its BYDAY list or, without one, the start date's weekday.
fn occurs_fallback(
    parsed: Option<&FallbackRule>,
    start: Option<&str>,
    target: DateTime<Utc>,
) -> bool {
    let target_day = target.date_naive();
    // An unparseable start yields None and satisfies no comparison below.
    let start_day = start.and_then(parse_utc_datetime).map(|dt| dt.date_naive());

    // Nothing occurs before its start, whatever the rule shape.
    if let Some(start_day) = start_day
        && start_day > target_day
    {
        return false;
    }

    match parsed {
        None => start_day == Some(target_day),
        Some(FallbackRule::Daily) => true,
        Some(FallbackRule::Weekly { by_day: Some(days) }) => {
            let abbr = Weekday::from(target_day.weekday()).as_str();
            days.iter().any(|day| day == abbr)
        }
        Some(FallbackRule::Weekly { by_day: None }) => {
            start_day.is_none_or(|day| day.weekday() == target_day.weekday())
        }
    }
}
