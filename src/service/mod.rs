//! Order creation workflow.
//!
//! [`CreateOrderService`] validates a request against the customer and product stores
//! and, only if everything checks out, writes the order and the new stock levels inside
//! one [`UnitOfWork`](crate::store::UnitOfWork).

pub mod create_order;
pub mod error;

pub use create_order::*;
pub use error::*;
