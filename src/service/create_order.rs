//! # Create Order
//!
//! One call to [`CreateOrderService::execute`] runs these steps:
//!
//! 1. the customer must exist;
//! 2. every line must ask for at least one unit;
//! 3. every requested product must exist (one batched lookup);
//! 4. stock must cover the requested quantity, summed per product;
//! 5. the order is stored with each line priced at the current product price;
//! 6. stock is decremented in one version-checked batch.
//!
//! Steps 1 to 4 only read. Steps 5 and 6 share a [`UnitOfWork`]: if either fails, the
//! order is deleted again. If step 6 finds that stock moved since step 3, the whole
//! sequence runs again from a fresh read. Each such conflict means another order's stock
//! update went through, so the retries end once stock is either claimed or exhausted.

use super::{CreateOrderError, StockShortfall, ValidationError};
use crate::model::{
    CustomerId, NewOrder, Order, OrderLineItem, ProductId, ProductRecord, ProductRequest,
    QuantityUpdate,
};
use crate::store::{CustomerStore, OrderStore, ProductStore, StoreError, UnitOfWork};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Creates orders on top of the three store traits.
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerStore,
    P: ProductStore,
    O: OrderStore,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Validates the request and creates the order.
    ///
    /// Validation failures are reported before anything is written. Line items follow
    /// the request order, one per request line, even when a product is listed twice.
    ///
    /// A version conflict on the stock update is never returned: the attempt is rolled
    /// back and the order is validated again against the new stock.
    #[instrument(skip(self, customer_id, products), fields(customer_id = %customer_id, lines = products.len()))]
    pub async fn execute(
        &self,
        customer_id: &CustomerId,
        products: Vec<ProductRequest>,
    ) -> Result<Order, CreateOrderError> {
        let mut attempt: u32 = 1;
        loop {
            match self.try_create(customer_id, &products).await {
                Err(e @ CreateOrderError::Store(StoreError::Conflict { .. })) => {
                    warn!(attempt, error = %e, "Stock changed concurrently, retrying");
                    attempt = attempt.saturating_add(1);
                }
                Ok(order) => {
                    info!(order_id = %order.id, total = order.total(), attempt, "Order created");
                    return Ok(order);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Order rejected");
                    return Err(e);
                }
            }
        }
    }

    async fn try_create(
        &self,
        customer_id: &CustomerId,
        requests: &[ProductRequest],
    ) -> Result<Order, CreateOrderError> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| ValidationError::CustomerNotFound(customer_id.clone()))?;

        let zero: Vec<&str> = requests
            .iter()
            .filter(|r| r.quantity == 0)
            .map(|r| r.product_id.0.as_str())
            .collect();
        if !zero.is_empty() {
            return Err(ValidationError::InvalidQuantity(zero.join(",")).into());
        }

        let totals = sum_by_product(requests.iter().map(|r| (&r.product_id, r.quantity)));
        let ids: Vec<ProductId> = totals.iter().map(|(id, _)| (*id).clone()).collect();
        let records = self.products.find_all_by_id(&ids).await?;
        if records.is_empty() {
            return Err(ValidationError::ProductsNotFound.into());
        }
        let found: HashMap<&ProductId, &ProductRecord> =
            records.iter().map(|r| (&r.entity.id, r)).collect();

        let missing: Vec<&str> = ids
            .iter()
            .filter(|id| !found.contains_key(id))
            .map(|id| id.0.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingProducts(missing.join(",")).into());
        }

        let shortfalls: Vec<StockShortfall> = totals
            .iter()
            .filter_map(|(id, requested)| {
                let stock = found.get(id)?.entity.quantity;
                (stock < *requested).then(|| StockShortfall {
                    product_id: (*id).clone(),
                    stock,
                    requested: *requested,
                })
            })
            .collect();
        if !shortfalls.is_empty() {
            return Err(ValidationError::InsufficientStock(shortfalls).into());
        }

        let line_items: Vec<OrderLineItem> = requests
            .iter()
            .filter_map(|r| {
                found.get(&r.product_id).map(|record| OrderLineItem {
                    product_id: r.product_id.clone(),
                    quantity: r.quantity,
                    unit_price: record.entity.price,
                })
            })
            .collect();
        debug!(?line_items, "Validation passed");

        let mut uow = UnitOfWork::begin();
        let order = match self
            .orders
            .create(&mut uow, NewOrder { customer, line_items })
            .await
        {
            Ok(order) => order,
            Err(e) => return Err(abort(uow, e).await),
        };

        let updates = stock_updates(&order, &found);
        match self.products.update_quantity(&mut uow, updates).await {
            Ok(()) => {
                uow.commit();
                Ok(order)
            }
            Err(e) => Err(abort(uow, e).await),
        }
    }
}

/// Sums quantities per product, keeping first-appearance order.
fn sum_by_product<'a>(
    lines: impl IntoIterator<Item = (&'a ProductId, u32)>,
) -> Vec<(&'a ProductId, u32)> {
    let mut totals: Vec<(&ProductId, u32)> = Vec::new();
    for (id, quantity) in lines {
        match totals.iter_mut().find(|(seen, _)| *seen == id) {
            Some((_, total)) => *total = total.saturating_add(quantity),
            None => totals.push((id, quantity)),
        }
    }
    totals
}

/// New stock levels for the products of a stored order, based on the records read
/// during validation and guarded by their versions.
fn stock_updates(order: &Order, found: &HashMap<&ProductId, &ProductRecord>) -> Vec<QuantityUpdate> {
    sum_by_product(
        order
            .line_items
            .iter()
            .map(|item| (&item.product_id, item.quantity)),
    )
    .into_iter()
    .filter_map(|(id, ordered)| {
        let record = found.get(id)?;
        Some(QuantityUpdate {
            product_id: id.clone(),
            quantity: record.entity.quantity.saturating_sub(ordered),
            expected_version: record.version,
        })
    })
    .collect()
}

async fn abort(uow: UnitOfWork, cause: StoreError) -> CreateOrderError {
    match uow.rollback().await {
        Ok(()) => CreateOrderError::Store(cause),
        Err(rollback) => CreateOrderError::RollbackFailed { cause, rollback },
    }
}
