//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent record stores in Rust. Each record type is owned
//! by one actor task that processes requests sequentially, which gives every request
//! record-level atomicity without locks, while different actors run in parallel.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its DTOs, its query filter and its
//!    uniqueness rule
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Requests
//!
//! | Request | Client method | Notes |
//! |---------|---------------|-------|
//! | Create | [`ResourceClient::create`] | allocates a sequential `u32`-based ID; uniqueness rule checked |
//! | Get | [`ResourceClient::get`] | `Ok(None)` when absent |
//! | Update | [`ResourceClient::update`] | applied to a copy; committed only if the rule holds |
//! | Query | [`ResourceClient::query`] | all records matching a filter, in ID order |
//!
//! ## Context Injection
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time, so
//! actors can be created first and wired afterwards:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = ResourceActor::<Product>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(order_actor.run(()));
//! ```
//!
//! ## Shutdown
//!
//! An actor stops when every client for it has been dropped: `recv()` returns `None`, the
//! loop logs its final size and the task completes.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so code
//! built on clients can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
