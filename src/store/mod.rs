//! Store contracts the order service depends on.
//!
//! The service only sees these traits. The in-process implementations live in
//! [`crate::clients`]; any other backend plugs in by implementing the same traits.
//!
//! Write operations take the caller's [`UnitOfWork`] and register a compensating
//! action on it, so a failure later in the same workflow can undo them.

pub mod unit_of_work;

pub use unit_of_work::*;

use crate::model::{Customer, CustomerId, NewOrder, Order, ProductId, ProductRecord, QuantityUpdate};
use actor_framework::FrameworkError;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The record changed since it was read; nothing was written.
    #[error("Concurrent modification of {id}: read version {expected}, store has {actual}")]
    Conflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    /// The store refused the write (e.g. a broken product reference).
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<FrameworkError> for StoreError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => StoreError::NotFound(id),
            FrameworkError::AlreadyExists(id) => StoreError::AlreadyExists(id),
            FrameworkError::Conflict {
                id,
                expected,
                actual,
            } => StoreError::Conflict {
                id,
                expected,
                actual,
            },
            e @ FrameworkError::DuplicateInBatch(_) => StoreError::Rejected(e.to_string()),
            FrameworkError::EntityError(inner) => StoreError::Rejected(inner.to_string()),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                StoreError::Unavailable(e.to_string())
            }
        }
    }
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, StoreError>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Returns the products that exist among `ids`, each at most once.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<ProductRecord>, StoreError>;

    /// Sets new stock levels in one all-or-nothing write.
    ///
    /// Fails with [`StoreError::Conflict`] if any product is no longer at the
    /// expected version.
    async fn update_quantity(
        &self,
        uow: &mut UnitOfWork,
        updates: Vec<QuantityUpdate>,
    ) -> Result<(), StoreError>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order and returns it as stored.
    async fn create(&self, uow: &mut UnitOfWork, order: NewOrder) -> Result<Order, StoreError>;
}
