use std::fmt::{self, Display};

/// Errors produced by model constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidDirection(String),
    InvalidRecordId(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidDirection(raw) => {
                write!(f, "invalid sort direction: {raw:?}")
            }
            ModelError::InvalidRecordId(raw) => {
                write!(f, "invalid record id: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
