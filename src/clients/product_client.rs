//! # Product Client
//!
//! Wraps a `ResourceClient<Product>` and serves as the [`ProductStore`].
//! Stock updates are sent as one version-checked batch and register a
//! [`RestoreStock`] compensation on the caller's unit of work.
use crate::model::{Product, ProductCreate, ProductId, ProductRecord, ProductUpdate, QuantityUpdate};
use crate::store::{Compensation, ProductStore, StoreError, UnitOfWork};
use actor_framework::{ActorClient, FrameworkError, ResourceClient, VersionedUpdate};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, StoreError> {
        debug!("Sending request");
        let created = self.inner.create(params).await?;
        Ok(created.entity)
    }

    /// Current stock level, or `None` for an unknown product.
    #[instrument(skip(self))]
    pub async fn stock(&self, id: ProductId) -> Result<Option<u32>, StoreError> {
        Ok(self.get(id).await?.map(|product| product.quantity))
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::from(e)
    }
}

#[async_trait]
impl ProductStore for ProductClient {
    #[instrument(skip(self))]
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<ProductRecord>, StoreError> {
        let found = self.inner.get_many(ids.to_vec()).await?;
        debug!(requested = ids.len(), found = found.len(), "Products fetched");
        Ok(found)
    }

    #[instrument(skip(self, uow, updates), fields(uow = uow.id(), count = updates.len()))]
    async fn update_quantity(
        &self,
        uow: &mut UnitOfWork,
        updates: Vec<QuantityUpdate>,
    ) -> Result<(), StoreError> {
        let batch = updates
            .into_iter()
            .map(|u| {
                VersionedUpdate::new(
                    u.product_id,
                    ProductUpdate {
                        price: None,
                        quantity: Some(u.quantity),
                    },
                    Some(u.expected_version),
                )
            })
            .collect();

        let replaced = self.inner.update_many(batch).await?;
        info!(products = replaced.len(), "Stock updated");
        uow.record(RestoreStock {
            client: self.inner.clone(),
            previous: replaced,
        });
        Ok(())
    }
}

/// Puts stock levels back to what they were before an `update_quantity` call.
///
/// Each restore expects the version the update produced, so it does not clobber a
/// later write by someone else; such a product is reported as a conflict instead.
pub struct RestoreStock {
    client: ResourceClient<Product>,
    previous: Vec<ProductRecord>,
}

#[async_trait]
impl Compensation for RestoreStock {
    fn describe(&self) -> String {
        let ids: Vec<&str> = self.previous.iter().map(|r| r.entity.id.0.as_str()).collect();
        format!("restore stock for {}", ids.join(","))
    }

    async fn compensate(self: Box<Self>) -> Result<(), StoreError> {
        let batch = self
            .previous
            .into_iter()
            .map(|record| {
                VersionedUpdate::new(
                    record.entity.id,
                    ProductUpdate {
                        price: None,
                        quantity: Some(record.entity.quantity),
                    },
                    Some(record.version + 1),
                )
            })
            .collect();
        self.client.update_many(batch).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_update_many, MockClient};
    use actor_framework::Versioned;

    fn record(id: &str, quantity: u32, version: u64) -> ProductRecord {
        Versioned {
            version,
            entity: Product {
                id: ProductId::from(id),
                name: format!("Product {id}"),
                price: 10.0,
                quantity,
            },
        }
    }

    #[tokio::test]
    async fn test_update_quantity_sends_versioned_batch() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            let mut uow = UnitOfWork::begin();
            let result = product_client
                .update_quantity(
                    &mut uow,
                    vec![
                        QuantityUpdate {
                            product_id: ProductId::from("P1"),
                            quantity: 3,
                            expected_version: 1,
                        },
                        QuantityUpdate {
                            product_id: ProductId::from("P2"),
                            quantity: 2,
                            expected_version: 4,
                        },
                    ],
                )
                .await;
            let pending = uow.pending();
            uow.commit();
            (result, pending)
        });

        let (updates, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected UpdateMany request");
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].id, ProductId::from("P1"));
        assert_eq!(updates[0].update.quantity, Some(3));
        assert_eq!(updates[0].expected_version, Some(1));
        assert_eq!(updates[1].id, ProductId::from("P2"));
        assert_eq!(updates[1].update.quantity, Some(2));
        assert_eq!(updates[1].expected_version, Some(4));
        responder
            .send(Ok(vec![record("P1", 5, 1), record("P2", 3, 4)]))
            .unwrap();

        let (result, pending) = task.await.unwrap();
        assert!(result.is_ok());
        assert_eq!(pending, 1);
    }

    #[tokio::test]
    async fn test_conflict_is_reported_and_nothing_recorded() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_update_many().return_err(FrameworkError::Conflict {
            id: "P1".to_string(),
            expected: 1,
            actual: 2,
        });
        let product_client = ProductClient::new(mock.client());

        let mut uow = UnitOfWork::begin();
        let err = product_client
            .update_quantity(
                &mut uow,
                vec![QuantityUpdate {
                    product_id: ProductId::from("P1"),
                    quantity: 0,
                    expected_version: 1,
                }],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict { actual: 2, .. }));
        assert_eq!(uow.pending(), 0);
        uow.commit();
        mock.verify();
    }

    #[tokio::test]
    async fn test_rollback_restores_previous_stock() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            let mut uow = UnitOfWork::begin();
            product_client
                .update_quantity(
                    &mut uow,
                    vec![QuantityUpdate {
                        product_id: ProductId::from("P1"),
                        quantity: 3,
                        expected_version: 1,
                    }],
                )
                .await?;
            uow.rollback().await
        });

        let (_, responder) = expect_update_many(&mut receiver).await.unwrap();
        responder.send(Ok(vec![record("P1", 5, 1)])).unwrap();

        let (restore, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected restoring UpdateMany");
        assert_eq!(restore.len(), 1);
        assert_eq!(restore[0].update.quantity, Some(5));
        assert_eq!(restore[0].expected_version, Some(2));
        responder.send(Ok(vec![record("P1", 3, 2)])).unwrap();

        task.await.unwrap().unwrap();
    }
}
