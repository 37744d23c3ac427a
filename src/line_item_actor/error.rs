//! Error types for the line item actor.

use thiserror::Error;

/// Errors that can occur during line item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LineItemError {
    /// The requested line item was not found.
    #[error("Line item not found: {0}")]
    NotFound(String),

    /// The referenced order does not exist.
    #[error("Unknown order: {0}")]
    UnknownOrder(String),

    /// The order is placed, or is not the acting customer's cart.
    #[error("Order not open: {0}")]
    OrderNotOpen(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
