//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client maps [`FrameworkError`](actor_framework::FrameworkError) into its resource's own
//! error type. Entity errors raised inside the actor arrive boxed and are unboxed back into
//! that type, so callers can match on `OrderError::Conflict` and friends directly.

pub mod customer_client;
pub mod line_item_client;
pub mod order_client;
pub mod payment_type_client;
pub mod product_client;

pub use customer_client::*;
pub use line_item_client::*;
pub use order_client::*;
pub use payment_type_client::*;
pub use product_client::*;
