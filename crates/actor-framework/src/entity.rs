//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored resource (customers, products,
//! orders, ...) implements to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//! It names the id, creation and update payloads, the runtime context and the error type,
//! and provides the lifecycle hooks the actor calls (`on_create`, `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::requested_id`]
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults let the actor generate every id and accept every create/delete.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors (e.g. an order checking that
/// the products it references exist). The `Context` associated type carries those
/// dependencies; it is handed to `run()` rather than `new()` so actors can be created
/// before they are wired together.
///
/// # Atomicity
/// `on_update` runs against a staged copy of the entity. If any update of a batch fails,
/// none of the staged copies are written back, so the hook may mutate `self` freely
/// before returning an error.
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// `From<u32>` is used for ids the actor generates itself.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Per-actor error type, boxed into
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) on the way out.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id the caller chose for a new entity, if any.
    ///
    /// `None` lets the actor generate one from its sequence (`Id::from(n)`), skipping
    /// ids that are already taken. A chosen id that is taken fails with
    /// [`FrameworkError::AlreadyExists`](crate::FrameworkError::AlreadyExists).
    fn requested_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Construct the full entity from the id and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// Returning an error aborts the creation.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies one update payload.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
