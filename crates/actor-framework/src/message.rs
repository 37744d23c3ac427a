//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of record (the [`ActorEntity`]). Instead of ad-hoc messages
/// for every operation, requests are standardized around the operations a record store offers:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new record. Subject to the
///   entity's uniqueness rule.
/// - **Get**: Fetches the current state of a record by ID.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing record. Subject to the
///   entity's uniqueness rule.
/// - **Query**: Returns every record selected by an [`ActorEntity::Filter`], in ID order.
///
/// Records are never removed; the stores in this system only grow.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Query {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
}
