//! Line items attaching products to orders.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::LineItemClient;
use crate::model::OrderLineItem;
use actor_framework::ResourceActor;

/// Creates a new line item actor and its client.
///
/// Run it with an [`OrderClient`](crate::clients::OrderClient) as context.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderLineItem>, LineItemClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, LineItemClient::new(generic_client))
}
