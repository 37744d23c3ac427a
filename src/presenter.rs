//! # Response Shaping
//!
//! Builds the wire representation of orders. Referenced records are expanded explicitly, two
//! levels deep: an order embeds its customer and payment type, and the payment type embeds its
//! owner. Each expansion is a keyed lookup; nothing is loaded implicitly.
//!
//! A reference that cannot be resolved (an order whose customer is gone) is a
//! [`PresentError::DanglingReference`], which the API reports as an internal error.

use crate::model::{
    mask_account_number, Customer, CustomerId, LineItemId, Order, OrderId, OrderLineItem,
    PaymentType, PaymentTypeId, Product, ProductId,
};
use crate::repository::{
    CustomerDirectory, OrderRepository, PaymentTypeDirectory, ProductCatalog, RepositoryError,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PresentError {
    #[error("dangling reference: {0}")]
    DanglingReference(String),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerView {
    pub id: CustomerId,
    pub url: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentTypeView {
    pub id: PaymentTypeId,
    pub url: String,
    pub merchant_name: String,
    /// Only the last four characters are shown.
    pub account_number: String,
    pub customer: CustomerView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemView {
    pub id: LineItemId,
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub url: String,
    pub customer: CustomerView,
    pub payment_type: Option<PaymentTypeView>,
    pub line_items: Vec<LineItemView>,
}

/// The add-to-cart response: the new line item with its order and product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItemView {
    pub id: LineItemId,
    pub url: String,
    pub order: OrderView,
    pub product: Product,
}

#[derive(Clone)]
pub struct Presenter {
    base_url: String,
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerDirectory>,
    payment_types: Arc<dyn PaymentTypeDirectory>,
    catalog: Arc<dyn ProductCatalog>,
}

impl Presenter {
    /// `base_url` must not end with a slash.
    pub fn new(
        base_url: impl Into<String>,
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerDirectory>,
        payment_types: Arc<dyn PaymentTypeDirectory>,
        catalog: Arc<dyn ProductCatalog>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            orders,
            customers,
            payment_types,
            catalog,
        }
    }

    fn url(&self, collection: &str, id: u32) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    pub async fn customer_view(&self, id: CustomerId) -> Result<CustomerView, PresentError> {
        let customer: Customer = self
            .customers
            .get_customer(id)
            .await?
            .ok_or_else(|| PresentError::DanglingReference(id.to_string()))?;
        Ok(CustomerView {
            id: customer.id,
            url: self.url("customers", customer.id.0),
            name: customer.name,
            email: customer.email,
        })
    }

    pub async fn payment_type_view(
        &self,
        id: PaymentTypeId,
    ) -> Result<PaymentTypeView, PresentError> {
        let payment_type: PaymentType = self
            .payment_types
            .get_payment_type(id)
            .await?
            .ok_or_else(|| PresentError::DanglingReference(id.to_string()))?;
        Ok(PaymentTypeView {
            id: payment_type.id,
            url: self.url("paymenttypes", payment_type.id.0),
            account_number: mask_account_number(&payment_type.account_number),
            merchant_name: payment_type.merchant_name,
            customer: self.customer_view(payment_type.customer_id).await?,
        })
    }

    pub async fn order_view(&self, order: &Order) -> Result<OrderView, PresentError> {
        let payment_type = match order.payment_type_id {
            Some(id) => Some(self.payment_type_view(id).await?),
            None => None,
        };
        let line_items = self
            .orders
            .list_line_items_by_order(order.id)
            .await?
            .into_iter()
            .map(|item| LineItemView {
                id: item.id,
                product_id: item.product_id,
            })
            .collect();
        Ok(OrderView {
            id: order.id,
            url: self.url("orders", order.id.0),
            customer: self.customer_view(order.customer_id).await?,
            payment_type,
            line_items,
        })
    }

    pub async fn cart_item_view(&self, item: &OrderLineItem) -> Result<CartItemView, PresentError> {
        let order = self
            .orders
            .get_order(item.order_id)
            .await?
            .ok_or_else(|| PresentError::DanglingReference(item.order_id.to_string()))?;
        let product = self
            .catalog
            .get_product(item.product_id)
            .await?
            .ok_or_else(|| PresentError::DanglingReference(item.product_id.to_string()))?;
        Ok(CartItemView {
            id: item.id,
            url: self.url("lineitems", item.id.0),
            order: self.order_view(&order).await?,
            product,
        })
    }
}
