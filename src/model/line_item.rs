//! Line items: one row per product placed in an order.

use super::customer::CustomerId;
use super::id::entity_id;
use super::order::OrderId;
use super::product::ProductId;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for order line items.
    LineItemId,
    "line_item"
);

/// Associates one product with one order.
///
/// Quantity is represented by repetition: adding the same product twice yields two line items.
/// Line items are never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub id: LineItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    /// The customer who added the item.
    pub customer_id: CustomerId,
}

/// Payload for attaching a product to an order.
///
/// The line item actor refuses the create unless the order is an open cart of `customer_id`.
#[derive(Debug, Clone)]
pub struct LineItemCreate {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub customer_id: CustomerId,
}

/// Selection criteria for line item queries.
#[derive(Debug, Clone)]
pub enum LineItemFilter {
    /// Every line item attached to the order, in creation order.
    ForOrder(OrderId),
}
