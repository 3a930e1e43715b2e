use thiserror::Error;

use super::feature::ValidationError;
use super::prediction::RequestError;
use super::submission::{SubmissionState, TransitionError};

/// Core domain errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("A submission is already in progress ({state})")]
    Busy { state: SubmissionState },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn busy(state: SubmissionState) -> Self {
        Self::Busy { state }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
