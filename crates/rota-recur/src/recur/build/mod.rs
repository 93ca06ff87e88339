//! Canonical rule-string assembly.
//!
//! The builder runs once, at chore create/edit time, and its output is
//! persisted verbatim. It is a pure function of the spec: no clock, no
//! timezone lookup, no recurrence library — it only needs to emit the
//! constrained subset the chore form offers, while the evaluator must
//! interpret arbitrary rule strings.

use chrono::{TimeZone, Utc};
use rota_core::util::time::format_ical_utc;

use super::core::{RecurrenceSpec, WeekdaySelector};

/// Serializes a recurrence spec into the canonical rule string.
///
/// Emission order is fixed: `FREQ`, `INTERVAL`, `COUNT`, `UNTIL`,
/// `BYDAY`. Absent optional fields, weekday entries that map to no BYDAY
/// token, and an `until` outside the representable range are omitted
/// silently; the builder never fails.
#[must_use]
pub fn build_rule_string(spec: &RecurrenceSpec) -> String {
    let mut parts = vec![format!("FREQ={}", spec.frequency)];

    if let Some(interval) = spec.interval {
        parts.push(format!("INTERVAL={interval}"));
    }

    if let Some(count) = spec.count {
        parts.push(format!("COUNT={count}"));
    }

    if let Some(until_ms) = spec.until
        && let Some(until) = Utc.timestamp_millis_opt(until_ms).single()
    {
        parts.push(format!("UNTIL={}", format_ical_utc(until)));
    }

    if !spec.by_weekday.is_empty() {
        let days: Vec<String> = spec
            .by_weekday
            .iter()
            .filter_map(WeekdaySelector::to_byday_token)
            .collect();
        if !days.is_empty() {
            parts.push(format!("BYDAY={}", days.join(",")));
        }
    }

    parts.join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recur::core::{RecurrenceSpec, WeekdaySelector, WeekdayToken};

    #[test]
    fn daily_spec_builds_bare_freq() {
        assert_eq!(build_rule_string(&RecurrenceSpec::daily()), "FREQ=DAILY");
    }

    #[test]
    fn until_formats_basic_iso_utc() {
        let until_ms = Utc
            .with_ymd_and_hms(2025, 1, 15, 13, 45, 30)
            .unwrap()
            .timestamp_millis();
        let spec = RecurrenceSpec::weekly().with_until(until_ms);

        assert_eq!(
            build_rule_string(&spec),
            "FREQ=WEEKLY;UNTIL=20250115T134530Z"
        );
    }

    #[test]
    fn mixed_weekday_encodings_share_one_byday() {
        let spec = RecurrenceSpec::weekly().with_by_weekday(vec![
            WeekdaySelector::abbrev("mo"),
            WeekdaySelector::abbrev("WE"),
            WeekdaySelector::abbrev("FR"),
            WeekdaySelector::nth(1, WeekdayToken::Abbrev("SU".into())),
            WeekdaySelector::nth(-1, WeekdayToken::Index(2)),
        ]);

        assert_eq!(
            build_rule_string(&spec),
            "FREQ=WEEKLY;BYDAY=MO,WE,FR,1SU,-1WE"
        );
    }

    #[test]
    fn emission_order_is_fixed() {
        let until_ms = Utc
            .with_ymd_and_hms(2025, 6, 30, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        let spec = RecurrenceSpec::weekly()
            .with_by_weekday(vec![WeekdaySelector::abbrev("MO")])
            .with_until(until_ms)
            .with_count(10)
            .with_interval(2);

        assert_eq!(
            build_rule_string(&spec),
            "FREQ=WEEKLY;INTERVAL=2;COUNT=10;UNTIL=20250630T000000Z;BYDAY=MO"
        );
    }

    #[test]
    fn interval_one_is_emitted_when_present() {
        let spec = RecurrenceSpec::daily().with_interval(1);
        assert_eq!(build_rule_string(&spec), "FREQ=DAILY;INTERVAL=1");
    }

    #[test]
    fn unmappable_weekdays_are_dropped() {
        let spec = RecurrenceSpec::weekly().with_by_weekday(vec![
            WeekdaySelector::abbrev("XX"),
            WeekdaySelector::index(4),
            WeekdaySelector::index(9),
        ]);
        assert_eq!(build_rule_string(&spec), "FREQ=WEEKLY;BYDAY=FR");
    }

    #[test]
    fn byday_is_omitted_when_nothing_survives() {
        let spec = RecurrenceSpec::weekly()
            .with_by_weekday(vec![WeekdaySelector::abbrev("XX"), WeekdaySelector::index(7)]);
        assert_eq!(build_rule_string(&spec), "FREQ=WEEKLY");
    }

    #[test]
    fn ignored_field_groups_never_serialize() {
        let mut spec = RecurrenceSpec::daily();
        spec.by_hour = vec![9, 17];
        spec.by_month = vec![1];
        spec.by_setpos = vec![-1];
        spec.weekstart = Some(WeekdayToken::Abbrev("MO".into()));

        assert_eq!(build_rule_string(&spec), "FREQ=DAILY");
    }

    #[test]
    fn unrepresentable_until_is_omitted() {
        let spec = RecurrenceSpec::daily().with_until(i64::MAX);
        assert_eq!(build_rule_string(&spec), "FREQ=DAILY");
    }
}
