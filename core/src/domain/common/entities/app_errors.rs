use thiserror::Error;

use crate::domain::analysis::regression::RegressionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Already exists")]
    AlreadyExists,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl From<RegressionError> for CoreError {
    fn from(error: RegressionError) -> Self {
        match error {
            RegressionError::InsufficientData { .. } => {
                CoreError::InsufficientData(error.to_string())
            }
            RegressionError::DegenerateInput => CoreError::DegenerateInput(error.to_string()),
        }
    }
}
