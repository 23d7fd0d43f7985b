//! [`ActorEntity`] implementation for [`Order`].

use super::OrderError;
use crate::clients::ProductClient;
use crate::model::{NewOrder, Order, OrderId, ProductId};
use crate::store::ProductStore;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = NewOrder;
    type Update = ();
    type Context = ProductClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: NewOrder) -> Result<Self, Self::Error> {
        if params.line_items.is_empty() {
            return Err(OrderError::Empty(id.to_string()));
        }
        Ok(Self {
            id,
            customer: params.customer,
            line_items: params.line_items,
        })
    }

    /// Every line item must reference an existing product.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), Self::Error> {
        let referenced: Vec<ProductId> = self
            .line_items
            .iter()
            .map(|item| item.product_id.clone())
            .collect();

        let found: HashSet<ProductId> = products
            .find_all_by_id(&referenced)
            .await
            .map_err(|e| OrderError::ProductLookup {
                order: self.id.to_string(),
                reason: e.to_string(),
            })?
            .into_iter()
            .map(|record| record.entity.id)
            .collect();

        let mut unknown: Vec<String> = Vec::new();
        for id in referenced.iter().filter(|id| !found.contains(*id)) {
            if !unknown.contains(&id.0) {
                unknown.push(id.0.clone());
            }
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(OrderError::UnknownProduct {
                order: self.id.to_string(),
                products: unknown.join(","),
            })
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &ProductClient) -> Result<(), Self::Error> {
        Err(OrderError::Immutable(self.id.to_string()))
    }
}
