//! Startup and shutdown of the whole actor system.

mod order_system;

pub use actor_framework::tracing::setup_tracing;
pub use order_system::{OrderSystem, SystemError};
