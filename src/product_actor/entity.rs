//! Entity trait implementation for the Product domain type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = ();
    type Error = ProductError;

    /// Creates a new Product from creation parameters.
    ///
    /// # Validation
    /// - `name` must not be blank
    /// - `price` must be a finite, non-negative number
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(ProductError::ValidationError(format!(
                "invalid price: {}",
                params.price
            )));
        }
        Ok(Self::new(id, params.name, params.price, params.description))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}
