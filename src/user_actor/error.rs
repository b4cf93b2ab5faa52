use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<crate::actor_framework::FrameworkError> for UserError {
    fn from(e: crate::actor_framework::FrameworkError) -> Self {
        use crate::actor_framework::FrameworkError;
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::Rejected(msg) => UserError::ValidationError(msg),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
