//! Payment methods registered by customers.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PaymentTypeClient;
use crate::model::PaymentType;
use actor_framework::ResourceActor;

/// Creates a new PaymentType actor and its client.
///
/// The actor must be run with a [`CustomerClient`](crate::clients::CustomerClient) as context;
/// it verifies the owner of every new payment type.
pub fn new(buffer_size: usize) -> (ResourceActor<PaymentType>, PaymentTypeClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PaymentTypeClient::new(generic_client))
}
