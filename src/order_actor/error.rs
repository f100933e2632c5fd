use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::error::ValidationError;
use crate::product_actor::ProductError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Product lookup failed: {0}")]
    ProductLookup(#[from] ProductError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::Validation(e) => OrderError::Validation(e),
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
