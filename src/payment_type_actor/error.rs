//! Error types for the PaymentType actor.

use thiserror::Error;

/// Errors that can occur during payment type operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentTypeError {
    /// The requested payment type was not found.
    #[error("Payment type not found: {0}")]
    NotFound(String),

    /// The owning customer does not exist.
    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),

    /// The payment type data provided is invalid.
    #[error("Payment type validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
