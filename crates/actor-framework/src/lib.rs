//! # Actor Framework
//!
//! Building blocks for in-process resource stores: each resource type lives in its own
//! [`ResourceActor`], which owns a map of versioned entities and processes requests one at
//! a time. Callers talk to it through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain type plus its create/update payloads and hooks
//! 2. **Runtime** ([`ResourceActor`]) - the mailbox loop and the store
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/response calls
//!
//! ## Consistency
//!
//! - Every stored entity carries a version ([`Versioned`]), starting at 1.
//! - [`ResourceClient::update_many`] applies a batch all-or-nothing and can require each
//!   entity to still be at the version the caller read ([`VersionedUpdate`]); a mismatch
//!   fails the whole batch with [`FrameworkError::Conflict`].
//! - Reads are snapshots: a `get` followed by an update from the same caller is not
//!   atomic unless the update carries the version it read.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`], not to `new`, so actors can be
//! created first and wired afterwards (an order store that checks product references
//! gets the product client as its context).
//!
//! ## Testing
//!
//! See [`mock`] for [`mock::MockClient`] and the channel-level helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response, Versioned, VersionedUpdate};
