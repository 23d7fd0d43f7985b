use actor_framework::{ActorEntity, FrameworkError, ResourceActor, VersionedUpdate};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ShelfId(String);

impl From<u32> for ShelfId {
    fn from(seq: u32) -> Self {
        Self(format!("shelf_{seq}"))
    }
}

impl std::fmt::Display for ShelfId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn id(raw: &str) -> ShelfId {
    ShelfId(raw.to_string())
}

#[derive(Clone, Debug, PartialEq)]
struct Shelf {
    id: ShelfId,
    capacity: u32,
    items: u32,
}

#[derive(Debug)]
struct ShelfCreate {
    id: Option<ShelfId>,
    capacity: u32,
}

#[derive(Debug)]
struct ShelfUpdate {
    items: u32,
}

#[derive(Debug, thiserror::Error)]
enum ShelfError {
    #[error("shelf over capacity: {0}")]
    OverCapacity(u32),
    #[error("shelf must have capacity")]
    ZeroCapacity,
    #[error("shelf still holds {0} items")]
    NotEmpty(u32),
}

#[async_trait]
impl ActorEntity for Shelf {
    type Id = ShelfId;
    type Create = ShelfCreate;
    type Update = ShelfUpdate;
    type Context = ();
    type Error = ShelfError;

    fn requested_id(params: &ShelfCreate) -> Option<ShelfId> {
        params.id.clone()
    }

    fn from_create_params(id: ShelfId, params: ShelfCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            capacity: params.capacity,
            items: 0,
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        if self.capacity == 0 {
            return Err(ShelfError::ZeroCapacity);
        }
        Ok(())
    }

    async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if update.items > self.capacity {
            return Err(ShelfError::OverCapacity(update.items));
        }
        self.items = update.items;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.items > 0 {
            return Err(ShelfError::NotEmpty(self.items));
        }
        Ok(())
    }
}

fn shelf(id: Option<&str>, capacity: u32) -> ShelfCreate {
    ShelfCreate {
        id: id.map(self::id),
        capacity,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create with generated and explicit ids
    let generated = client.create(shelf(None, 10)).await.unwrap();
    assert_eq!(generated.entity.id, id("shelf_1"));
    assert_eq!(generated.version, 1);
    let named = client.create(shelf(Some("A"), 5)).await.unwrap();
    assert_eq!(named.entity.id, id("A"));

    // 2. Batch update bumps versions
    let replaced = client
        .update_many(vec![
            VersionedUpdate::new(id("shelf_1"), ShelfUpdate { items: 3 }, Some(1)),
            VersionedUpdate::new(id("A"), ShelfUpdate { items: 2 }, None),
        ])
        .await
        .unwrap();
    assert_eq!(replaced.len(), 2);
    assert_eq!(replaced[0].entity.items, 0);
    assert_eq!(replaced[0].version, 1);

    let current = client.get(id("shelf_1")).await.unwrap().unwrap();
    assert_eq!(current.version, 2);
    assert_eq!(current.entity.items, 3);

    // 3. Delete requires an empty shelf
    let err = client.delete(id("A")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));
    client
        .update_many(vec![VersionedUpdate::new(
            id("A"),
            ShelfUpdate { items: 0 },
            None,
        )])
        .await
        .unwrap();
    client.delete(id("A")).await.unwrap();
    assert!(client.get(id("A")).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_get_many_skips_unknown_and_repeated_ids() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    client.create(shelf(Some("A"), 1)).await.unwrap();
    client.create(shelf(Some("B"), 1)).await.unwrap();

    let found = client
        .get_many(vec![
            id("B"),
            id("missing"),
            id("A"),
            id("B"),
        ])
        .await
        .unwrap();
    let ids: Vec<_> = found.iter().map(|r| r.entity.id.0.as_str()).collect();
    assert_eq!(ids, vec!["B", "A"]);
}

#[tokio::test]
async fn test_update_many_is_all_or_nothing_on_version_conflict() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    client.create(shelf(Some("A"), 10)).await.unwrap();
    client.create(shelf(Some("B"), 10)).await.unwrap();

    let err = client
        .update_many(vec![
            VersionedUpdate::new(id("A"), ShelfUpdate { items: 4 }, Some(1)),
            VersionedUpdate::new(id("B"), ShelfUpdate { items: 4 }, Some(7)),
        ])
        .await
        .unwrap_err();
    match err {
        FrameworkError::Conflict {
            id,
            expected,
            actual,
        } => {
            assert_eq!(id, "B");
            assert_eq!(expected, 7);
            assert_eq!(actual, 1);
        }
        other => panic!("expected conflict, got {other}"),
    }

    // "A" was staged before the conflict but must not have been written.
    let a = client.get(id("A")).await.unwrap().unwrap();
    assert_eq!(a.version, 1);
    assert_eq!(a.entity.items, 0);
}

#[tokio::test]
async fn test_update_many_is_all_or_nothing_on_hook_failure() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    client.create(shelf(Some("A"), 10)).await.unwrap();
    client.create(shelf(Some("B"), 2)).await.unwrap();

    let err = client
        .update_many(vec![
            VersionedUpdate::new(id("A"), ShelfUpdate { items: 4 }, None),
            VersionedUpdate::new(id("B"), ShelfUpdate { items: 9 }, None),
        ])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("over capacity"));

    let a = client.get(id("A")).await.unwrap().unwrap();
    assert_eq!(a.entity.items, 0);
}

#[tokio::test]
async fn test_update_many_unknown_id_is_not_found() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .update_many(vec![VersionedUpdate::new(
            id("ghost"),
            ShelfUpdate { items: 1 },
            None,
        )])
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "ghost"));
}

#[tokio::test]
async fn test_create_rejects_duplicate_ids_and_failed_hooks() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    client.create(shelf(Some("A"), 1)).await.unwrap();
    let dup = client.create(shelf(Some("A"), 1)).await.unwrap_err();
    assert!(matches!(dup, FrameworkError::AlreadyExists(id) if id == "A"));

    let rejected = client.create(shelf(Some("Z"), 0)).await.unwrap_err();
    assert!(matches!(rejected, FrameworkError::EntityError(_)));
    assert!(client.get(id("Z")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    drop(actor);

    let err = client.get(id("A")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}

#[tokio::test]
async fn test_generated_ids_skip_caller_chosen_ones() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    client.create(shelf(Some("shelf_2"), 1)).await.unwrap();

    let first = client.create(shelf(None, 1)).await.unwrap();
    let second = client.create(shelf(None, 1)).await.unwrap();
    assert_eq!(first.entity.id, id("shelf_1"));
    assert_eq!(second.entity.id, id("shelf_3"));

    let dup = client.create(shelf(Some("shelf_3"), 1)).await.unwrap_err();
    assert!(matches!(dup, FrameworkError::AlreadyExists(taken) if taken == "shelf_3"));
}

#[tokio::test]
async fn test_update_many_rejects_repeated_id_in_one_batch() {
    let (actor, client) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(actor.run(()));

    client.create(shelf(Some("A"), 10)).await.unwrap();

    let err = client
        .update_many(vec![
            VersionedUpdate::new(id("A"), ShelfUpdate { items: 2 }, Some(1)),
            VersionedUpdate::new(id("A"), ShelfUpdate { items: 5 }, None),
        ])
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::DuplicateInBatch(id) if id == "A"));

    let a = client.get(id("A")).await.unwrap().unwrap();
    assert_eq!(a.version, 1);
    assert_eq!(a.entity.items, 0);
}
