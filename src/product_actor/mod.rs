//! # Product Actor
//!
//! Holds the catalog and the stock level of every product.
//!
//! Stock changes go through batched, version-checked updates
//! ([`ResourceClient::update_many`](actor_framework::ResourceClient::update_many)), so a
//! stock level computed from a stale read is rejected instead of applied.
//!
//! ```rust
//! use order_service::clients::ProductClient;
//! use order_service::model::{ProductCreate, ProductId};
//! use order_service::product_actor;
//! use order_service::store::ProductStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, generic_client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!     let client = ProductClient::new(generic_client);
//!
//!     client
//!         .create_product(ProductCreate::new("Widget", 29.99, 100).with_id("P1"))
//!         .await
//!         .unwrap();
//!     let found = client.find_all_by_id(&[ProductId::from("P1")]).await.unwrap();
//!     assert_eq!(found[0].entity.quantity, 100);
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
