//! History errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Missing field: {0} is required")]
    MissingField(&'static str),

    #[error("Invalid history configuration: {0}")]
    InvalidConfig(String),
}

pub type HistoryResult<T> = Result<T, HistoryError>;
