use super::{Customer, ProductId};
use serde::{Deserialize, Serialize};

string_id!(
    /// Type-safe identifier for orders.
    OrderId,
    "order"
);

/// One product line of an order.
///
/// `unit_price` is the product price at the time the order was placed and is never
/// recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderLineItem {
    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A persisted customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub line_items: Vec<OrderLineItem>,
}

impl Order {
    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        self.line_items.iter().map(OrderLineItem::total).sum()
    }
}

/// Payload for the order store: everything but the id.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer: Customer,
    pub line_items: Vec<OrderLineItem>,
}
