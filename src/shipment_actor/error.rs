use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during shipment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShipmentError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ShipmentError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ShipmentError::NotFound(id),
            FrameworkError::Rejected(msg) => ShipmentError::InvalidState(msg),
            other => ShipmentError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<crate::order_actor::OrderError> for ShipmentError {
    fn from(e: crate::order_actor::OrderError) -> Self {
        use crate::order_actor::OrderError;
        match e {
            OrderError::NotFound(what) => ShipmentError::NotFound(what),
            OrderError::InvalidState(msg) => ShipmentError::InvalidState(msg),
            OrderError::ActorCommunicationError(msg) => ShipmentError::ActorCommunicationError(msg),
        }
    }
}
