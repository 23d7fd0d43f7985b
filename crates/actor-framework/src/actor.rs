//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the server half of the framework. It owns the
//! entity store and processes messages sequentially, so each request (including a whole
//! batch update) observes and leaves a consistent store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Versioned, VersionedUpdate};
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of versioned entities.
///
/// **Concurrency Model**:
/// The actor processes one message at a time in its own task, so the `store` needs no
/// lock. Two clients racing on the same entity are serialized by the mailbox; a client
/// that read a stale version is told so through [`FrameworkError::Conflict`].
///
/// # Usage Pattern
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, value: u32 }
/// #[derive(Debug)] struct CounterCreate;
/// #[derive(Debug)] struct CounterUpdate(u32);
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = CounterCreate;
///     type Update = CounterUpdate;
///     type Context = ();
///     type Error = CounterError;
///
///     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, value: 0 })
///     }
///     async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), Self::Error> {
///         self.value = update.0;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let created = client.create(CounterCreate).await.unwrap();
///     assert_eq!(created.version, 1);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: takes the caller's id from [`ActorEntity::requested_id`] (rejecting one
///   that is taken) or generates the next free one, builds the entity, runs `on_create`,
///   stores it at version 1.
/// * **Get / GetMany**: clone-out reads; `GetMany` skips unknown ids and repeated ids.
/// * **UpdateMany**: applies every update to staged copies, checking expected versions;
///   the staged copies replace the stored ones only if the whole batch succeeded. Each
///   id may appear once per batch.
/// * **Delete**: runs `on_delete`, then removes the entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, Versioned<T>>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let requested = ids.len();
                    let items = self.get_many(ids);
                    debug!(entity_type, requested, found = items.len(), "GetMany");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::UpdateMany {
                    updates,
                    respond_to,
                } => {
                    debug!(entity_type, ?updates, "UpdateMany");
                    let count = updates.len();
                    let result = self.update_many(updates, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, count, "Updated"),
                        Err(e) => warn!(entity_type, error = %e, "Update rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<Versioned<T>, FrameworkError> {
        let id = match T::requested_id(&params) {
            Some(id) if self.store.contains_key(&id) => {
                return Err(FrameworkError::AlreadyExists(id.to_string()));
            }
            Some(id) => id,
            None => self.next_free_id(),
        };

        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::entity)?;
        item.on_create(context)
            .await
            .map_err(FrameworkError::entity)?;

        let record = Versioned::new(item);
        self.store.insert(id.clone(), record.clone());
        info!(entity_type = entity_type::<T>(), %id, size = self.store.len(), "Created");
        Ok(record)
    }

    /// Next generated id not already taken by a caller-chosen one.
    fn next_free_id(&mut self) -> T::Id {
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id += 1;
            if !self.store.contains_key(&id) {
                return id;
            }
        }
    }

    fn get_many(&self, ids: Vec<T::Id>) -> Vec<Versioned<T>> {
        let mut seen = HashSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(id.clone()))
            .filter_map(|id| self.store.get(&id).cloned())
            .collect()
    }

    async fn update_many(
        &mut self,
        updates: Vec<VersionedUpdate<T>>,
        context: &T::Context,
    ) -> Result<Vec<Versioned<T>>, FrameworkError> {
        {
            let mut seen = HashSet::new();
            if let Some(dup) = updates.iter().find(|u| !seen.insert(&u.id)) {
                return Err(FrameworkError::DuplicateInBatch(dup.id.to_string()));
            }
        }

        let mut staged: HashMap<T::Id, Versioned<T>> = HashMap::new();
        let mut replaced = Vec::with_capacity(updates.len());

        for VersionedUpdate {
            id,
            update,
            expected_version,
        } in updates
        {
            let current = self
                .store
                .get(&id)
                .cloned()
                .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

            if let Some(expected) = expected_version {
                if expected != current.version {
                    return Err(FrameworkError::Conflict {
                        id: id.to_string(),
                        expected,
                        actual: current.version,
                    });
                }
            }

            let mut next = current.clone();
            next.entity
                .on_update(update, context)
                .await
                .map_err(FrameworkError::entity)?;
            next.version += 1;

            replaced.push(current);
            staged.insert(id, next);
        }

        self.store.extend(staged);
        Ok(replaced)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.entity
            .on_delete(context)
            .await
            .map_err(FrameworkError::entity)?;
        self.store.remove(id);
        Ok(())
    }
}

/// Short type name used as the `entity_type` log field (e.g. `Product`).
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
