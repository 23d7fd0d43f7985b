//! # Order Service
//!
//! Creates customer orders: checks that the customer and every requested product exist
//! and that stock covers the request, then stores the order and decrements stock as one
//! unit of work.
//!
//! ## Module Tour
//!
//! - [`service`]: [`CreateOrderService`](service::CreateOrderService), the workflow itself.
//!   It only knows the store traits.
//! - [`store`]: the [`CustomerStore`](store::CustomerStore),
//!   [`ProductStore`](store::ProductStore) and [`OrderStore`](store::OrderStore) contracts
//!   and the compensating [`UnitOfWork`](store::UnitOfWork).
//! - [`clients`]: store implementations backed by resource actors.
//! - [`customer_actor`], [`product_actor`], [`order_actor`]: the `ActorEntity`
//!   implementations behind those clients.
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem) spawns and wires everything.
//! - [`model`]: plain data types.
//! - [`config`]: TOML configuration.
//!
//! ## Concurrency
//!
//! Each actor processes its mailbox sequentially, so every store call is atomic within
//! its store. Across stores, product records are versioned: a stock update computed from
//! a stale read is rejected as a whole, and the service retries the order from a fresh
//! read.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --customer C1 --item P1=2 --item P2=1
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod service;
pub mod store;
