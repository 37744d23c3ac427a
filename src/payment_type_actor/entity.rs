//! Entity trait implementation for the PaymentType domain type.
//!
//! Creation is validated against the customer directory injected as context: a payment type
//! can only be registered for a customer that exists.

use super::PaymentTypeError;
use crate::clients::CustomerClient;
use crate::model::{PaymentType, PaymentTypeCreate, PaymentTypeId};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for PaymentType {
    type Id = PaymentTypeId;
    type Create = PaymentTypeCreate;
    type Update = Infallible;
    type Filter = ();
    type Context = CustomerClient;
    type Error = PaymentTypeError;

    fn from_create_params(
        id: PaymentTypeId,
        params: PaymentTypeCreate,
    ) -> Result<Self, Self::Error> {
        if params.merchant_name.trim().is_empty() {
            return Err(PaymentTypeError::ValidationError(
                "merchant name must not be empty".to_string(),
            ));
        }
        if params.account_number.trim().is_empty() {
            return Err(PaymentTypeError::ValidationError(
                "account number must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            customer_id: params.customer_id,
            merchant_name: params.merchant_name,
            account_number: params.account_number,
        })
    }

    /// Checks that the owning customer exists.
    async fn on_create(&mut self, customers: &CustomerClient) -> Result<(), Self::Error> {
        let owner = customers
            .get(self.customer_id)
            .await
            .map_err(|e| PaymentTypeError::ActorCommunicationError(e.to_string()))?;
        if owner.is_none() {
            return Err(PaymentTypeError::UnknownCustomer(
                self.customer_id.to_string(),
            ));
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &CustomerClient,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}
