use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayoffError {
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Debt repository error: {0}")]
    Repository(String),
}

impl PayoffError {
    /// True for errors caused by malformed caller input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PayoffError::InvalidOptions(_) | PayoffError::Validation(_)
        )
    }
}
