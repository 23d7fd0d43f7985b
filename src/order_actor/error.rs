//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// An order needs at least one line item.
    #[error("Order {0} has no line items")]
    Empty(String),

    /// A line item references a product the product store does not have.
    #[error("Order {order} references unknown products: {products}")]
    UnknownProduct { order: String, products: String },

    /// The product store could not be asked.
    #[error("Product lookup failed for order {order}: {reason}")]
    ProductLookup { order: String, reason: String },

    /// Orders are never modified after creation.
    #[error("Order {0} cannot be modified")]
    Immutable(String),
}
