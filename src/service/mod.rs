//! # Order Lifecycle
//!
//! [`OrderService`] owns the cart state machine: an order is an open cart until a payment type
//! is attached, and a customer has at most one open cart.
//!
//! ```text
//!   add_product_to_cart ──► [open cart] ──finalize_order──► [placed]
//!          ▲  (find or create)                                   │
//!          └──────────── next add opens a new cart ◄────────────┘
//! ```

mod error;
mod order_service;
mod policy;

pub use error::OrderServiceError;
pub use order_service::OrderService;
pub use policy::{OwnershipPolicy, Requester};
