//! Error types for order creation.

use crate::model::{CustomerId, ProductId};
use crate::store::StoreError;
use std::fmt;
use thiserror::Error;

/// A request the service refuses before writing anything.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Customer {0} not found")]
    CustomerNotFound(CustomerId),

    /// Comma-joined ids of the lines with a zero quantity.
    #[error("Quantity must be positive for: {0}")]
    InvalidQuantity(String),

    /// None of the requested products exist.
    #[error("Products not found")]
    ProductsNotFound,

    /// Comma-joined ids of the requested products that do not exist.
    #[error("Products not found: {0}")]
    MissingProducts(String),

    #[error("Not enough stock for: {}", join_shortfalls(.0))]
    InsufficientStock(Vec<StockShortfall>),
}

/// One product whose stock cannot cover the requested quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct StockShortfall {
    pub product_id: ProductId,
    pub stock: u32,
    pub requested: u32,
}

impl fmt::Display for StockShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product {}, stock {}, requested {}",
            self.product_id, self.stock, self.requested
        )
    }
}

fn join_shortfalls(shortfalls: &[StockShortfall]) -> String {
    shortfalls
        .iter()
        .map(StockShortfall::to_string)
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Errors returned by [`CreateOrderService::execute`](super::CreateOrderService::execute).
#[derive(Debug, Error)]
pub enum CreateOrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A store call failed. Writes made earlier in the same call were undone.
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),

    /// A store call failed and undoing the earlier writes failed too.
    #[error("{cause}; rollback failed: {rollback}")]
    RollbackFailed {
        cause: StoreError,
        rollback: StoreError,
    },
}

impl CreateOrderError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CreateOrderError::Validation(_))
    }
}
