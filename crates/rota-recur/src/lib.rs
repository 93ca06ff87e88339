//! Recurrence engine for recurring chores.
//!
//! Translates the structured recurrence specification a chore form
//! produces into a canonical rule string (a constrained subset of the
//! RFC 5545 RECUR grammar), and answers, for any calendar date, whether
//! a chore occurs on that date relative to its start. Membership is
//! computed on demand; no occurrence records are ever materialized.

pub mod error;
pub mod recur;

pub use error::{RecurError, RecurResult};
pub use recur::build::build_rule_string;
pub use recur::core::{Frequency, RecurrenceSpec, Weekday, WeekdaySelector, WeekdayToken};
pub use recur::eval::{chore_occurs_on_date, occurs_on_date};
