use thiserror::Error;

/// Recurrence evaluation errors
#[derive(Error, Debug)]
pub enum RecurError {
    #[error("Failed to parse recurrence rule: {0}")]
    RuleParse(String),

    #[error("Invalid start date-time: {0}")]
    InvalidStartDate(String),
}

pub type RecurResult<T> = std::result::Result<T, RecurError>;
