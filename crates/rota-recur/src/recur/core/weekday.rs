//! Weekday designators and the codec between their encodings.
//!
//! A chore form payload encodes weekdays three ways: two-letter
//! abbreviations (`"MO"`, any case), numeric indices with 0 = Monday
//! through 6 = Sunday, and ordinal objects such as
//! `{nth: -1, weekday: "WE"}` ("last Wednesday"). All of them map to the
//! canonical upper-case abbreviation; an entry that maps to nothing is
//! dropped by the builder, not rejected.
//!
//! The numeric convention here is Monday-first. `chrono`'s day-of-week
//! type enters only through the explicit `From` conversion below; the
//! two numbering schemes never share an integer type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
            Self::Sunday => "SU",
        }
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "MO" => Self::Monday,
            "TU" => Self::Tuesday,
            "WE" => Self::Wednesday,
            "TH" => Self::Thursday,
            "FR" => Self::Friday,
            "SA" => Self::Saturday,
            "SU" => Self::Sunday,
            _ => return None,
        })
    }

    /// Maps a builder index (0 = Monday .. 6 = Sunday) to a weekday.
    ///
    /// Indices outside that range map to `None`.
    #[must_use]
    pub const fn from_builder_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Monday),
            1 => Some(Self::Tuesday),
            2 => Some(Self::Wednesday),
            3 => Some(Self::Thursday),
            4 => Some(Self::Friday),
            5 => Some(Self::Saturday),
            6 => Some(Self::Sunday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// A weekday as a client payload encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekdayToken {
    /// Two-letter abbreviation, any case.
    Abbrev(String),
    /// Builder index, 0 = Monday through 6 = Sunday.
    Index(i64),
}

impl WeekdayToken {
    /// Resolves the token to a weekday, if it maps to one.
    #[must_use]
    pub fn to_weekday(&self) -> Option<Weekday> {
        match self {
            Self::Abbrev(abbrev) => Weekday::parse(abbrev),
            Self::Index(index) => Weekday::from_builder_index(*index),
        }
    }
}

/// One entry of a spec's `by_weekday` list: a plain weekday, or an
/// ordinal occurrence such as "first Sunday" or "last Wednesday".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekdaySelector {
    /// Weekday with an occurrence number, e.g. `{nth: -1, weekday: "WE"}`.
    Ordinal {
        /// Signed occurrence number, rendered verbatim and unpadded.
        nth: i32,
        /// The day of the week, in either payload encoding.
        weekday: WeekdayToken,
    },
    /// Every occurrence of the weekday.
    Day(WeekdayToken),
}

impl WeekdaySelector {
    /// Creates a plain entry from an abbreviation.
    #[must_use]
    pub fn abbrev(value: impl Into<String>) -> Self {
        Self::Day(WeekdayToken::Abbrev(value.into()))
    }

    /// Creates a plain entry from a builder index.
    #[must_use]
    pub const fn index(value: i64) -> Self {
        Self::Day(WeekdayToken::Index(value))
    }

    /// Creates an ordinal entry.
    #[must_use]
    pub const fn nth(nth: i32, weekday: WeekdayToken) -> Self {
        Self::Ordinal { nth, weekday }
    }

    /// Serializes the entry to its BYDAY token (`MO`, `1SU`, `-1WE`).
    ///
    /// Entries whose weekday does not resolve yield `None` and are
    /// dropped from the emitted list.
    #[must_use]
    pub fn to_byday_token(&self) -> Option<String> {
        match self {
            Self::Day(token) => token.to_weekday().map(|day| day.as_str().to_owned()),
            Self::Ordinal { nth, weekday } => weekday
                .to_weekday()
                .map(|day| format!("{nth}{}", day.as_str())),
        }
    }
}
