use super::id::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for Products.
    ProductId,
    "product"
);

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// The order core only reads products. The cart view serializes them exactly as the
/// catalog does, through this type's `Serialize` impl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (allocated by the actor system)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `description` - Free-form display text
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub description: String,
}
