use thiserror::Error;

/// Raised when a population cannot be built from the requested counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopulationError {
    #[error("invalid population: {reason}")]
    InvalidPopulation { reason: String },
}

impl PopulationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PopulationError::InvalidPopulation {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("scenario validation error: {0}")]
    Invalid(String),
}
