//! Orders and the cart state they encode.

use super::customer::CustomerId;
use super::id::entity_id;
use super::payment_type::PaymentTypeId;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

/// A customer's order.
///
/// An order with no payment type is the customer's open cart; attaching a payment type
/// places it. A customer has at most one open order at any time, enforced by the order
/// actor's uniqueness rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub payment_type_id: Option<PaymentTypeId>,
}

impl Order {
    /// An open cart for `customer_id`.
    pub fn open(id: OrderId, customer_id: CustomerId) -> Self {
        Self {
            id,
            customer_id,
            payment_type_id: None,
        }
    }

    /// True while no payment type is attached.
    pub fn is_open(&self) -> bool {
        self.payment_type_id.is_none()
    }
}

/// Payload for opening a cart.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
}

/// Full replacement of an order's mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
    pub customer_id: CustomerId,
    pub payment_type_id: Option<PaymentTypeId>,
}

impl From<&Order> for OrderUpdate {
    fn from(order: &Order) -> Self {
        Self {
            customer_id: order.customer_id,
            payment_type_id: order.payment_type_id,
        }
    }
}

/// Selection criteria for order queries.
#[derive(Debug, Clone)]
pub enum OrderFilter {
    /// The open order of a customer, if any.
    OpenFor(CustomerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_order_has_no_payment_type() {
        let order = Order::open(OrderId(1), CustomerId(4));
        assert!(order.is_open());

        let placed = Order {
            payment_type_id: Some(PaymentTypeId(2)),
            ..order
        };
        assert!(!placed.is_open());
    }

    #[test]
    fn test_update_carries_mutable_fields() {
        let order = Order {
            id: OrderId(9),
            customer_id: CustomerId(1),
            payment_type_id: Some(PaymentTypeId(3)),
        };
        let update = OrderUpdate::from(&order);
        assert_eq!(update.customer_id, CustomerId(1));
        assert_eq!(update.payment_type_id, Some(PaymentTypeId(3)));
    }

    #[test]
    fn test_wire_shape() {
        let order = Order::open(OrderId(2), CustomerId(5));
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 2, "customer_id": 5, "payment_type_id": null })
        );
    }
}
