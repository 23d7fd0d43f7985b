//! # System Lifecycle
//!
//! Starts the three resource actors, wires them together and hands out the clients and
//! the order service built on top of them.
//!
//! Dependencies are injected when an actor starts running, not when it is built: the
//! order actor receives a [`ProductClient`](crate::clients::ProductClient) through
//! `run(context)` so it can check product references. The dependency graph is acyclic,
//! so dropping every client is enough to stop all actors.

pub mod order_system;

pub use order_system::*;
