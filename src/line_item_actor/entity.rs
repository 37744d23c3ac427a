//! Entity trait implementation for [`OrderLineItem`].
//!
//! Line items are immutable. Creation is checked against the order actor, injected as context:
//! items only go into an open order of the customer adding them.

use super::LineItemError;
use crate::clients::OrderClient;
use crate::model::{LineItemCreate, LineItemFilter, LineItemId, OrderLineItem};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for OrderLineItem {
    type Id = LineItemId;
    type Create = LineItemCreate;
    type Update = Infallible;
    type Filter = LineItemFilter;
    type Context = OrderClient;
    type Error = LineItemError;

    fn from_create_params(id: LineItemId, params: LineItemCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            order_id: params.order_id,
            product_id: params.product_id,
            customer_id: params.customer_id,
        })
    }

    /// Refuses line items for missing orders, placed orders and other customers' carts.
    async fn on_create(&mut self, orders: &OrderClient) -> Result<(), Self::Error> {
        let order = orders
            .get(self.order_id)
            .await
            .map_err(|e| LineItemError::ActorCommunicationError(e.to_string()))?
            .ok_or_else(|| LineItemError::UnknownOrder(self.order_id.to_string()))?;
        if !order.is_open() || order.customer_id != self.customer_id {
            return Err(LineItemError::OrderNotOpen(format!(
                "{} is not an open cart of {}",
                order.id, self.customer_id
            )));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderClient) -> Result<(), Self::Error> {
        match update {}
    }

    fn matches(&self, filter: &LineItemFilter) -> bool {
        match filter {
            LineItemFilter::ForOrder(order_id) => self.order_id == *order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, Order, OrderId, PaymentTypeId, ProductId};
    use actor_framework::mock::MockClient;

    fn item(customer: u32) -> OrderLineItem {
        OrderLineItem {
            id: LineItemId(1),
            order_id: OrderId(2),
            product_id: ProductId(3),
            customer_id: CustomerId(customer),
        }
    }

    #[tokio::test]
    async fn test_rejects_placed_and_foreign_orders() {
        let mut orders = MockClient::<Order>::new();
        orders.expect_get(OrderId(2)).return_ok(Some(Order {
            id: OrderId(2),
            customer_id: CustomerId(1),
            payment_type_id: Some(PaymentTypeId(4)),
        }));
        orders
            .expect_get(OrderId(2))
            .return_ok(Some(Order::open(OrderId(2), CustomerId(1))));
        orders
            .expect_get(OrderId(2))
            .return_ok(Some(Order::open(OrderId(2), CustomerId(1))));
        orders.expect_get(OrderId(2)).return_ok(None);
        let client = OrderClient::new(orders.client());

        let placed = item(1).on_create(&client).await;
        assert!(matches!(placed, Err(LineItemError::OrderNotOpen(_))));

        let foreign = item(5).on_create(&client).await;
        assert!(matches!(foreign, Err(LineItemError::OrderNotOpen(_))));

        assert_eq!(item(1).on_create(&client).await, Ok(()));

        let missing = item(1).on_create(&client).await;
        assert_eq!(
            missing,
            Err(LineItemError::UnknownOrder("order_2".to_string()))
        );
        orders.verify();
    }
}
