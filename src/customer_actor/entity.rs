//! Entity trait implementation for the Customer domain type.
//!
//! Customers are created by the directory and never modified through the order core, so the
//! update type is uninhabited.

use super::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = ();
    type Error = CustomerError;

    /// Creates a new Customer from creation parameters.
    ///
    /// # Validation
    /// - `name` must not be blank
    /// - `email` must contain `@`
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(CustomerError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        if !params.email.contains('@') {
            return Err(CustomerError::ValidationError(format!(
                "invalid email: {}",
                params.email
            )));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}
