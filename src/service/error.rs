use crate::repository::RepositoryError;
use thiserror::Error;

/// Errors returned by [`OrderService`](super::OrderService) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderServiceError {
    /// A referenced order, product or payment type does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request itself is malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requester may not act on the order.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The record stores failed.
    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}
