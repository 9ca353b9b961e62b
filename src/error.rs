//! Error taxonomy for user-initiated actions.
//!
//! Two families: validation errors are caught at the action boundary and
//! never reach the remote layer; transport errors come back from the API
//! client. Neither is fatal - every failure degrades to "no state change".

use thiserror::Error;

use crate::api::ApiError;

/// A precondition on a user action was not met. The action is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("plant name must not be empty")]
    EmptyPlantName,
    #[error("plant type must not be empty")]
    EmptyPlantType,
    #[error("no image selected")]
    NoImageSelected,
    #[error("no plant selected")]
    NoPlantSelected,
}

impl ValidationError {
    /// A short human-readable message suitable for an on-screen notice.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyPlantName => "Enter a plant name first.",
            ValidationError::EmptyPlantType => "Enter a plant type first.",
            ValidationError::NoImageSelected => "Select an image before analyzing.",
            ValidationError::NoPlantSelected => "Select a plant before analyzing.",
        }
    }
}

/// Why a user-initiated command did not take effect.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] ApiError),
}

impl ActionError {
    /// A short human-readable message suitable for an on-screen notice.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Validation(e) => e.user_message().to_string(),
            ActionError::Transport(e) => e.user_message(),
        }
    }

    /// Whether re-triggering the action could succeed without user changes.
    pub fn is_retryable(&self) -> bool {
        match self {
            ActionError::Validation(_) => false,
            ActionError::Transport(e) => e.is_retryable(),
        }
    }
}
