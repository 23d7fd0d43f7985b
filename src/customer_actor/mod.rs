//! Customer resource actor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Customer;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
