//! # Framework Errors
//!
//! Errors shared by every actor and client. Entity-specific failures travel inside
//! [`FrameworkError::EntityError`] and are mapped to the resource's own error type by its client.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A uniqueness rule rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
