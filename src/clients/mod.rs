//! Domain clients over the resource actors.
//!
//! Each client wraps a [`ResourceClient`](actor_framework::ResourceClient) and implements
//! the matching store trait from [`crate::store`], which is all the order service sees.

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
