//! Error types for the Product actor.

use thiserror::Error;

/// Errors raised while creating or updating a product.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// Prices must be finite and not negative.
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: String, price: f64 },

    #[error("Product name must not be empty")]
    EmptyName,
}
