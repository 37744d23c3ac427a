//! # Persistence Seams
//!
//! The order core never talks to actors directly. It goes through these traits, which the
//! actor clients implement ([`ActorOrderRepository`] for orders and line items, the catalog and
//! directory clients for the read-only collaborators). Tests substitute scripted
//! implementations at the same seams.

mod actor;

pub use actor::ActorOrderRepository;

use crate::model::{
    Customer, CustomerId, LineItemCreate, Order, OrderCreate, OrderId, OrderLineItem,
    PaymentType, PaymentTypeId, Product, ProductId,
};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the record stores.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    /// The store's uniqueness rule rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The record to update does not exist.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The store refused the record as invalid.
    #[error("rejected: {0}")]
    Rejected(String),

    /// The store task is gone or stopped answering.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Orders and their line items.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// The customer's order with no payment type, if any.
    async fn find_open_order_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Order>, RepositoryError>;

    /// Stores a new open order. Fails with [`RepositoryError::Conflict`] when the customer
    /// already has one.
    async fn create_order(&self, params: OrderCreate) -> Result<Order, RepositoryError>;

    /// Replaces the stored order's customer and payment type.
    async fn update_order(&self, order: Order) -> Result<Order, RepositoryError>;

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Attaches a product to an order. Fails with [`RepositoryError::Conflict`] unless the
    /// order is an open cart of the customer named in `params`.
    async fn create_line_item(
        &self,
        params: LineItemCreate,
    ) -> Result<OrderLineItem, RepositoryError>;

    /// Line items of the order in creation order.
    async fn list_line_items_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderLineItem>, RepositoryError>;
}

/// Read access to the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
}

/// Read access to registered payment methods.
#[async_trait]
pub trait PaymentTypeDirectory: Send + Sync {
    async fn get_payment_type(
        &self,
        id: PaymentTypeId,
    ) -> Result<Option<PaymentType>, RepositoryError>;
}

/// Read access to customer records.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;
}
