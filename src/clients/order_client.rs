//! # Order Client
//!
//! Wraps a `ResourceClient<Order>` and serves as the [`OrderStore`]. Product references
//! are checked by the order actor itself (see [`crate::order_actor`]); a rejected order
//! comes back as [`StoreError::Rejected`].
use crate::model::{NewOrder, Order, OrderId};
use crate::store::{Compensation, OrderStore, StoreError, UnitOfWork};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::from(e)
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(skip(self, uow, order), fields(uow = uow.id(), customer_id = %order.customer.id))]
    async fn create(&self, uow: &mut UnitOfWork, order: NewOrder) -> Result<Order, StoreError> {
        debug!(?order, "Sending request");
        let created = self.inner.create(order).await?.entity;
        info!(order_id = %created.id, lines = created.line_items.len(), "Order stored");
        uow.record(DeleteOrder {
            client: self.inner.clone(),
            id: created.id.clone(),
        });
        Ok(created)
    }
}

/// Removes an order created earlier in a unit of work that is being rolled back.
pub struct DeleteOrder {
    client: ResourceClient<Order>,
    id: OrderId,
}

#[async_trait]
impl Compensation for DeleteOrder {
    fn describe(&self) -> String {
        format!("delete order {}", self.id)
    }

    async fn compensate(self: Box<Self>) -> Result<(), StoreError> {
        self.client.delete(self.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, CustomerId, OrderLineItem, ProductId};
    use actor_framework::mock::{create_mock_client, expect_create, expect_delete, MockClient};
    use actor_framework::Versioned;

    fn new_order() -> NewOrder {
        NewOrder {
            customer: Customer {
                id: CustomerId::from("C1"),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
            line_items: vec![OrderLineItem {
                product_id: ProductId::from("P1"),
                quantity: 2,
                unit_price: 10.0,
            }],
        }
    }

    fn stored(order: &NewOrder) -> Order {
        Order {
            id: OrderId::from("order_1"),
            customer: order.customer.clone(),
            line_items: order.line_items.clone(),
        }
    }

    #[tokio::test]
    async fn test_create_records_delete_compensation() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            let mut uow = UnitOfWork::begin();
            let order = order_client.create(&mut uow, new_order()).await?;
            assert_eq!(uow.pending(), 1);
            uow.rollback().await?;
            Ok::<_, StoreError>(order)
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.line_items.len(), 1);
        responder.send(Ok(Versioned::new(stored(&params)))).unwrap();

        let (id, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected compensating Delete");
        assert_eq!(id, OrderId::from("order_1"));
        responder.send(Ok(())).unwrap();

        let order = task.await.unwrap().unwrap();
        assert_eq!(order.id, OrderId::from("order_1"));
    }

    #[tokio::test]
    async fn test_rejected_order_records_nothing() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            crate::order_actor::OrderError::UnknownProduct {
                order: "order_1".to_string(),
                products: "P9".to_string(),
            },
        )));
        let order_client = OrderClient::new(mock.client());

        let mut uow = UnitOfWork::begin();
        let err = order_client.create(&mut uow, new_order()).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(msg) if msg.contains("P9")));
        assert_eq!(uow.pending(), 0);
        uow.commit();
        mock.verify();
    }
}
