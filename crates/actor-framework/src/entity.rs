//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every record type (Customer, Product, Order, …)
//! implements to be owned by a generic [`ResourceActor`](crate::ResourceActor). It names the
//! identifier, the create/update DTOs, the query filter, the injected context and the error
//! type, and provides the hooks the actor calls while processing requests.
//!
//! # Uniqueness Rules
//! An entity can declare that two records must never coexist by overriding
//! [`ActorEntity::conflicts_with`]. The actor evaluates the rule against every stored record
//! on Create and Update and rejects the request with
//! [`FrameworkError::Conflict`](crate::FrameworkError::Conflict). Because the actor handles one
//! request at a time, the check and the write happen atomically, which makes the rule the
//! in-process equivalent of a (partial) unique index.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` type is injected into every
/// hook by [`ResourceActor::run`](crate::ResourceActor::run), which allows dependencies to be
/// bound after the actor is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so that
    /// query results come back in allocation order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Selection criteria accepted by `Query` requests.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per request: clients handle a single
    /// `OrderError`, at the price of some variants being unreachable from some requests.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the allocated ID and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update. The actor calls this on a copy and only commits the copy when the
    /// hook and the uniqueness rule both succeed, so a failed update leaves the record as it was.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Queries & Constraints ---

    /// Returns true when this record is selected by `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Returns true when this record and `other` must not both be stored.
    /// `other` is never the record being written itself.
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}
