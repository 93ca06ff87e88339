//! Minimal rule-string reading for the fallback evaluator.
//!
//! Only the shapes the fallback evaluator can act on are extracted;
//! everything else degrades to `None`. Full grammar interpretation is
//! the library-backed evaluator's job.

/// The subset of rule shapes the fallback evaluator understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackRule {
    /// `FREQ=DAILY`; every modifier is ignored.
    Daily,
    /// `FREQ=WEEKLY` with an optional BYDAY weekday list.
    Weekly {
        /// Upper-cased two-letter abbreviations, when BYDAY was present
        /// and non-empty.
        by_day: Option<Vec<String>>,
    },
}

/// Extracts the fallback-evaluable shape of a rule string.
///
/// Tokenizes on `;`, splits each token on its first `=`, and upper-cases
/// both sides; a token without a non-empty key and value is skipped.
/// Only `FREQ=DAILY` and `FREQ=WEEKLY` are recognized — any other
/// frequency, a missing FREQ, or blank input yields `None`. Never fails.
#[must_use]
pub fn parse_for_fallback(rule: Option<&str>) -> Option<FallbackRule> {
    let rule = rule?.trim();
    if rule.is_empty() {
        return None;
    }

    let mut freq = None;
    let mut by_day = None;

    for token in rule.split(';') {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_uppercase();
        let value = value.trim().to_ascii_uppercase();
        if key.is_empty() || value.is_empty() {
            continue;
        }

        match key.as_str() {
            "FREQ" => freq = Some(value),
            "BYDAY" => {
                let days: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|day| !day.is_empty())
                    .map(String::from)
                    .collect();
                if !days.is_empty() {
                    by_day = Some(days);
                }
            }
            _ => {}
        }
    }

    match freq.as_deref() {
        Some("DAILY") => Some(FallbackRule::Daily),
        Some("WEEKLY") => Some(FallbackRule::Weekly { by_day }),
        _ => {
            tracing::trace!(rule, "Rule has no fallback-evaluable shape");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_is_recognized_and_modifiers_ignored() {
        assert_eq!(
            parse_for_fallback(Some("FREQ=DAILY;INTERVAL=2;COUNT=5")),
            Some(FallbackRule::Daily)
        );
    }

    #[test]
    fn weekly_extracts_byday_list() {
        assert_eq!(
            parse_for_fallback(Some("FREQ=WEEKLY;BYDAY=MO,WE,FR")),
            Some(FallbackRule::Weekly {
                by_day: Some(vec!["MO".into(), "WE".into(), "FR".into()])
            })
        );
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims_entries() {
        assert_eq!(
            parse_for_fallback(Some("freq=weekly;byday= mo , we ")),
            Some(FallbackRule::Weekly {
                by_day: Some(vec!["MO".into(), "WE".into()])
            })
        );
    }

    #[test]
    fn weekly_without_byday_has_no_day_list() {
        assert_eq!(
            parse_for_fallback(Some("FREQ=WEEKLY")),
            Some(FallbackRule::Weekly { by_day: None })
        );
        assert_eq!(
            parse_for_fallback(Some("FREQ=WEEKLY;BYDAY=, ,")),
            Some(FallbackRule::Weekly { by_day: None })
        );
    }

    #[test]
    fn unsupported_frequencies_degrade_to_none() {
        assert_eq!(parse_for_fallback(Some("FREQ=MONTHLY;BYDAY=1MO")), None);
        assert_eq!(parse_for_fallback(Some("FREQ=YEARLY")), None);
        assert_eq!(parse_for_fallback(Some("INTERVAL=2")), None);
    }

    #[test]
    fn blank_and_missing_input_degrade_to_none() {
        assert_eq!(parse_for_fallback(None), None);
        assert_eq!(parse_for_fallback(Some("")), None);
        assert_eq!(parse_for_fallback(Some("   ")), None);
    }

    #[test]
    fn malformed_tokens_are_skipped() {
        assert_eq!(
            parse_for_fallback(Some("garbage;=DAILY;FREQ=;FREQ=DAILY")),
            Some(FallbackRule::Daily)
        );
    }
}
