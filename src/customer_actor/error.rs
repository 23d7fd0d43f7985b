//! Error types for the Customer actor.

use thiserror::Error;

/// Errors raised by the Customer actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The email address is not plausible.
    #[error("Invalid email for customer {id}: {email:?}")]
    InvalidEmail { id: String, email: String },

    #[error("Customer name must not be empty")]
    EmptyName,

    /// Customers are read-only once registered.
    #[error("Customer {0} cannot be modified")]
    Immutable(String),
}
