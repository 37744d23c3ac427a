use super::id::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for Customers.
    CustomerId,
    "customer"
);

/// A registered customer, the acting principal of every cart operation.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity); see
/// [`customer_actor`](crate::customer_actor). Customers are read-only to the order core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

/// Payload for registering a customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
}
