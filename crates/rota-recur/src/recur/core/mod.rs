//! Core value types of the recurrence grammar subset.
//!
//! These types model what the chore form can express: a frequency, the
//! common numeric modifiers, and weekday lists in the three encodings a
//! client payload may use.

mod frequency;
mod spec;
mod weekday;

pub use frequency::Frequency;
pub use spec::RecurrenceSpec;
pub use weekday::{Weekday, WeekdaySelector, WeekdayToken};
