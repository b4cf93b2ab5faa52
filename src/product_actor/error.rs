use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Invalid product: {0}")]
    Invalid(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<crate::actor_framework::FrameworkError> for ProductError {
    fn from(e: crate::actor_framework::FrameworkError) -> Self {
        use crate::actor_framework::FrameworkError;
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Rejected(msg) => ProductError::Invalid(msg),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
