//! Entity trait implementation for the Order domain type.
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Filter = OrderFilter;
    type Context = ();
    type Error = OrderError;

    /// Every order starts as an open cart.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::open(id, params.customer_id))
    }

    /// Replaces the customer and payment type.
    ///
    /// A placed order cannot go back to being a cart; replacing one payment type with another
    /// is allowed.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if !self.is_open() && update.payment_type_id.is_none() {
            return Err(OrderError::ValidationError(format!(
                "{} is already placed",
                self.id
            )));
        }
        self.customer_id = update.customer_id;
        self.payment_type_id = update.payment_type_id;
        Ok(())
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::OpenFor(customer_id) => {
                self.is_open() && self.customer_id == *customer_id
            }
        }
    }

    /// Two open orders of the same customer never coexist.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.is_open() && other.is_open() && self.customer_id == other.customer_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, PaymentTypeId};

    fn placed(id: u32, customer: u32) -> Order {
        Order {
            id: OrderId(id),
            customer_id: CustomerId(customer),
            payment_type_id: Some(PaymentTypeId(1)),
        }
    }

    #[test]
    fn test_conflicts_only_between_open_orders_of_one_customer() {
        let a = Order::open(OrderId(1), CustomerId(1));
        let b = Order::open(OrderId(2), CustomerId(1));
        let c = Order::open(OrderId(3), CustomerId(2));

        assert!(a.conflicts_with(&b));
        assert!(!a.conflicts_with(&c));
        assert!(!a.conflicts_with(&placed(4, 1)));
        assert!(!placed(5, 1).conflicts_with(&placed(4, 1)));
    }

    #[test]
    fn test_open_filter_skips_placed_orders() {
        let filter = OrderFilter::OpenFor(CustomerId(1));
        assert!(Order::open(OrderId(1), CustomerId(1)).matches(&filter));
        assert!(!Order::open(OrderId(2), CustomerId(2)).matches(&filter));
        assert!(!placed(3, 1).matches(&filter));
    }

    #[tokio::test]
    async fn test_placed_order_cannot_be_reopened() {
        let mut order = placed(7, 1);
        let result = order
            .on_update(
                OrderUpdate {
                    customer_id: CustomerId(1),
                    payment_type_id: None,
                },
                &(),
            )
            .await;
        assert_eq!(
            result,
            Err(OrderError::ValidationError("order_7 is already placed".to_string()))
        );
        assert!(!order.is_open());
    }
}
