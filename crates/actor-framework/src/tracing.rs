//! # Observability & Tracing
//!
//! Structured logging for every actor system built on this crate.
//!
//! Actors emit events with an `entity_type` field (`Order`, `Product`, …) instead of relying on
//! module paths, so [`setup_tracing`] hides the target and uses the compact format, which shows
//! span nesting inline:
//!
//! ```text
//! INFO add_product_to_cart{customer=customer_1 product=product_2}: Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! Payloads are logged once at `debug` when a request reaches the actor; state changes are
//! logged at `info`; rejected requests at `warn`.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=actor_framework=warn,cart_orders=debug cargo run
//! ```

/// Initializes the tracing subscriber for the application.
///
/// The filter comes from `RUST_LOG`; nothing is logged when it is unset. Call once, at
/// startup; a second call panics because the global subscriber is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
