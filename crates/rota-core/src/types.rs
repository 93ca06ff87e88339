//! Chore records as supplied by the surrounding persistence layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chore as persisted by the CRUD layer.
///
/// The recurrence columns are carried verbatim: `recurrence_rule` holds the
/// canonical rule string for a repeating chore, and `start_date` the
/// ISO-8601 anchor the rule expands relative to. Both are optional; a chore
/// with neither never occurs, a chore with only a start date occurs exactly
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    /// UUID v7 primary key.
    pub id: Uuid,
    /// Human-readable chore title.
    pub title: String,
    /// Canonical recurrence rule string, if the chore repeats.
    #[serde(default)]
    pub recurrence_rule: Option<String>,
    /// Anchor date-time the recurrence expands relative to.
    #[serde(default)]
    pub start_date: Option<String>,
}

impl Chore {
    /// Creates a one-off chore with no recurrence.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            recurrence_rule: None,
            start_date: None,
        }
    }

    /// Sets the persisted recurrence rule string.
    #[must_use]
    pub fn with_recurrence_rule(mut self, rule: impl Into<String>) -> Self {
        self.recurrence_rule = Some(rule.into());
        self
    }

    /// Sets the anchor start date.
    #[must_use]
    pub fn with_start_date(mut self, start: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chore_builder_sets_recurrence_columns() {
        let chore = Chore::new("Take out the bins")
            .with_recurrence_rule("FREQ=WEEKLY;BYDAY=MO")
            .with_start_date("2025-01-06T08:00:00.000Z");

        assert_eq!(chore.title, "Take out the bins");
        assert_eq!(chore.recurrence_rule.as_deref(), Some("FREQ=WEEKLY;BYDAY=MO"));
        assert_eq!(chore.start_date.as_deref(), Some("2025-01-06T08:00:00.000Z"));
    }

    #[test]
    fn chore_deserializes_without_recurrence_columns() {
        let chore: Chore = serde_json::from_value(serde_json::json!({
            "id": "01890a5d-ac96-774b-bcce-b302099a8057",
            "title": "Water the plants",
        }))
        .expect("valid chore payload");

        assert!(chore.recurrence_rule.is_none());
        assert!(chore.start_date.is_none());
    }
}
