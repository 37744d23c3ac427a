//! # Cart Orders
//!
//! An order and cart core for an online shop, built from resource actors.
//!
//! A customer fills a cart (an order with no payment type), looks at it, and places it by
//! attaching one of their payment methods. Staff, or the owner, can read any placed order.
//!
//! ## 🏗️ Design
//!
//! ### One actor per record type
//! Every record type lives in one [`ResourceActor`](actor_framework::ResourceActor) task that
//! handles requests one at a time. A request therefore never sees a half-applied write, and
//! the order actor's uniqueness rule (no two open orders for one customer) is checked and
//! applied in the same step. Concurrent "add to cart" calls for a new customer converge on a
//! single cart: the losing create is rejected and [`OrderService`](service::OrderService)
//! picks up the winner's order.
//!
//! ### Explicit references
//! Records point at each other by ID only. The service and the [`presenter`] load what they
//! need with keyed lookups; nothing is fetched behind the caller's back.
//!
//! ### Ownership policy
//! Reads and finalization are restricted to the order's owner by default
//! ([`OwnershipPolicy::Enforced`](service::OwnershipPolicy::Enforced)). The permissive
//! behaviour is available as
//! [`OwnershipPolicy::Unrestricted`](service::OwnershipPolicy::Unrestricted).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Records ([`model`])
//! Customers, products, payment types, orders and line items, with type-safe IDs.
//!
//! ### 2. Actors ([`customer_actor`], [`product_actor`], [`payment_type_actor`], [`order_actor`], [`line_item_actor`])
//! `ActorEntity` implementations: validation, uniqueness rules, cross-actor checks.
//!
//! ### 3. The Interface ([`clients`], [`repository`])
//! Typed clients over the actors, and the traits the service is written against.
//!
//! ### 4. The Core ([`service`], [`presenter`], [`api`])
//! The cart lifecycle, response shaping and the status-code mapping.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`OrderSystem`](lifecycle::OrderSystem) spins up and wires every actor from an
//! [`OrdersConfig`](config::OrdersConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Tests
//! cargo test --workspace
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod lifecycle;
pub mod line_item_actor;
pub mod model;
pub mod order_actor;
pub mod payment_type_actor;
pub mod presenter;
pub mod product_actor;
pub mod repository;
pub mod service;
