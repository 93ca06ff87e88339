//! Occurrence counting through the `rrule` crate.
//!
//! The engine's single point of contact with the recurrence library:
//! everything else hands it a prefixed rule line, a UTC anchor, and a
//! UTC window, and gets back an occurrence count. Interval stepping,
//! BYDAY expansion, COUNT/UNTIL truncation, and ordinal weekdays are all
//! the library's concern.

use chrono::{DateTime, Utc};
use rota_core::util::time::format_ical_utc;
use rrule::{RRuleSet, Tz};

use crate::error::{RecurError, RecurResult};

/// Counts occurrences of `rule_line` within the inclusive window
/// `[window_start, window_end]`, anchored at `dtstart` (UTC).
///
/// `rule_line` must already carry its `RRULE:` prefix. At most `limit`
/// occurrences are counted; callers that only need existence pass 1.
///
/// ## Errors
///
/// Returns [`RecurError::RuleParse`] if the recurrence library rejects
/// the rule line.
pub fn count_occurrences_in_window(
    rule_line: &str,
    dtstart: DateTime<Utc>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    limit: u16,
) -> RecurResult<usize> {
    let rule_set_text = format!("DTSTART:{}\n{rule_line}", format_ical_utc(dtstart));

    let rule_set = rule_set_text
        .parse::<RRuleSet>()
        .map_err(|err| RecurError::RuleParse(err.to_string()))?
        .after(window_start.with_timezone(&Tz::UTC))
        .before(window_end.with_timezone(&Tz::UTC));

    let result = rule_set.all(limit);
    tracing::trace!(
        count = result.dates.len(),
        limited = result.limited,
        "Expanded rule over window"
    );

    Ok(result.dates.len())
}
