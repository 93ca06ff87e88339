//! Structured recurrence specification, as entered in the chore form.

use serde::{Deserialize, Serialize};

use super::{Frequency, WeekdaySelector, WeekdayToken};

/// Structured recurrence input.
///
/// The fields fall into two groups. The builder-serialized group
/// (`frequency`, `interval`, `count`, `until`, `by_weekday`) is
/// everything [`build_rule_string`] emits — the constrained subset the
/// chore form offers. The remaining `by_*`/`weekstart` fields are
/// accepted so a payload carrying them deserializes cleanly, but the
/// builder never emits them; such parts only take effect when they
/// appear in a hand-authored rule string interpreted by the
/// library-backed evaluator.
///
/// [`build_rule_string`]: crate::recur::build::build_rule_string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceSpec {
    /// Recurrence frequency (required).
    pub frequency: Frequency,

    /// Interval between frequency periods.
    #[serde(default)]
    pub interval: Option<u32>,

    /// Total number of occurrences.
    #[serde(default)]
    pub count: Option<u32>,

    /// End boundary as epoch milliseconds, UTC.
    #[serde(default)]
    pub until: Option<i64>,

    /// Applicable weekdays; input order is preserved in the emitted
    /// BYDAY list.
    #[serde(default)]
    pub by_weekday: Vec<WeekdaySelector>,

    // Accepted but never serialized by the builder.
    /// By-hour list (0-23).
    #[serde(default)]
    pub by_hour: Vec<u8>,
    /// By-minute list (0-59).
    #[serde(default)]
    pub by_minute: Vec<u8>,
    /// By-second list (0-60).
    #[serde(default)]
    pub by_second: Vec<u8>,
    /// By-monthday list (-31 to 31, excluding 0).
    #[serde(default)]
    pub by_monthday: Vec<i8>,
    /// By-setpos list (-366 to 366, excluding 0).
    #[serde(default)]
    pub by_setpos: Vec<i16>,
    /// By-month list (1-12).
    #[serde(default)]
    pub by_month: Vec<u8>,
    /// By-weekno list (-53 to 53, excluding 0).
    #[serde(default)]
    pub by_weekno: Vec<i8>,
    /// By-yearday list (-366 to 366, excluding 0).
    #[serde(default)]
    pub by_yearday: Vec<i16>,
    /// Week start day.
    #[serde(default)]
    pub weekstart: Option<WeekdayToken>,
}

impl RecurrenceSpec {
    /// Creates a spec with the given frequency and no modifiers.
    #[must_use]
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: None,
            count: None,
            until: None,
            by_weekday: Vec::new(),
            by_hour: Vec::new(),
            by_minute: Vec::new(),
            by_second: Vec::new(),
            by_monthday: Vec::new(),
            by_setpos: Vec::new(),
            by_month: Vec::new(),
            by_weekno: Vec::new(),
            by_yearday: Vec::new(),
            weekstart: None,
        }
    }

    /// Creates a daily spec.
    #[must_use]
    pub fn daily() -> Self {
        Self::new(Frequency::Daily)
    }

    /// Creates a weekly spec.
    #[must_use]
    pub fn weekly() -> Self {
        Self::new(Frequency::Weekly)
    }

    /// Creates a monthly spec.
    #[must_use]
    pub fn monthly() -> Self {
        Self::new(Frequency::Monthly)
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the occurrence count.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the end boundary (epoch milliseconds, UTC).
    #[must_use]
    pub fn with_until(mut self, until_ms: i64) -> Self {
        self.until = Some(until_ms);
        self
    }

    /// Sets the weekday list.
    #[must_use]
    pub fn with_by_weekday(mut self, by_weekday: Vec<WeekdaySelector>) -> Self {
        self.by_weekday = by_weekday;
        self
    }
}
