//! Order-specific resource logic and entity implementation.
//!
//! The order actor is the single writer of orders. Its uniqueness rule keeps at most one open
//! order per customer, so concurrent "find or create" attempts for the same customer can never
//! both succeed in creating one.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
