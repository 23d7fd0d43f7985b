//! Order resource actor.
//!
//! Orders reference products, so the actor runs with a
//! [`ProductClient`](crate::clients::ProductClient) as its context and refuses orders whose
//! line items point at products the product store does not know.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
