use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(format!("order {}", id)),
            FrameworkError::Rejected(msg) => OrderError::InvalidState(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<crate::product_actor::ProductError> for OrderError {
    fn from(e: crate::product_actor::ProductError) -> Self {
        use crate::product_actor::ProductError;
        match e {
            ProductError::NotFound(id) => OrderError::NotFound(format!("product {}", id)),
            ProductError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
            other => OrderError::InvalidState(other.to_string()),
        }
    }
}

impl From<crate::user_actor::UserError> for OrderError {
    fn from(e: crate::user_actor::UserError) -> Self {
        use crate::user_actor::UserError;
        match e {
            UserError::NotFound(id) => OrderError::NotFound(format!("user {}", id)),
            UserError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
            other => OrderError::InvalidState(other.to_string()),
        }
    }
}
