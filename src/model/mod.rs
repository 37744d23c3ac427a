//! Pure data structures (records and DTOs) implementing the
//! [`ActorEntity`](actor_framework::ActorEntity) trait.
//!
//! Every record carries a type-safe ID; see [`id`] for the shared ID behaviour.

pub mod id;

pub mod customer;
pub mod line_item;
pub mod order;
pub mod payment_type;
pub mod product;

pub use customer::*;
pub use id::ParseIdError;
pub use line_item::*;
pub use order::*;
pub use payment_type::*;
pub use product::*;
