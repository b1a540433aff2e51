//! Error type shared by the validating entry points.

use std::fmt;

/// Errors for inputs outside an algorithm's domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrillError {
    InvalidInput { reason: String },
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl DrillError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange { value, min, max }
    }
}

impl fmt::Display for DrillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::OutOfRange { value, min, max } => {
                write!(f, "value {value} outside [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for DrillError {}

pub type Result<T> = std::result::Result<T, DrillError>;
