//! # Generic Messages
//!
//! Message types exchanged between a [`ResourceClient`](crate::ResourceClient) and its
//! [`ResourceActor`](crate::ResourceActor), plus the [`Versioned`] record the actor stores.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// An entity together with the store-assigned version.
///
/// Versions start at 1 when the entity is created and grow by one on every
/// successful update. Callers read the version alongside the entity and hand it back
/// in a [`VersionedUpdate`] to detect writes that happened in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub version: u64,
    pub entity: T,
}

impl<T> Versioned<T> {
    pub fn new(entity: T) -> Self {
        Self { version: 1, entity }
    }
}

/// One entry of a batched update.
///
/// With `expected_version: Some(v)` the update only applies if the stored version is
/// still `v`; `None` skips the check.
#[derive(Debug)]
pub struct VersionedUpdate<T: ActorEntity> {
    pub id: T::Id,
    pub update: T::Update,
    pub expected_version: Option<u64>,
}

impl<T: ActorEntity> VersionedUpdate<T> {
    pub fn new(id: T::Id, update: T::Update, expected_version: Option<u64>) -> Self {
        Self {
            id,
            update,
            expected_version,
        }
    }
}

/// Request sent to the actor.
///
/// The variants follow the resource lifecycle: `Create`, `Get`/`GetMany` (read),
/// `UpdateMany` (mutation, applied all-or-nothing) and `Delete`.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<Versioned<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<Versioned<T>>>,
    },
    /// Returns each existing entity once, in order of first appearance in `ids`.
    /// Unknown ids are skipped.
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<Versioned<T>>>,
    },
    /// Responds with the states the batch replaced, one per update.
    UpdateMany {
        updates: Vec<VersionedUpdate<T>>,
        respond_to: Response<Vec<Versioned<T>>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
