//! Compensating unit of work.
//!
//! The stores behind [`OrderStore`](super::OrderStore) and
//! [`ProductStore`](super::ProductStore) are independent, so there is no shared
//! database transaction to lean on. Instead, each write records how to undo itself on
//! the [`UnitOfWork`] it was given; [`UnitOfWork::rollback`] replays those undo steps in
//! reverse order and [`UnitOfWork::commit`] discards them.
//!
//! ```rust,ignore
//! let mut uow = UnitOfWork::begin();
//! let order = orders.create(&mut uow, new_order).await?;
//! match products.update_quantity(&mut uow, updates).await {
//!     Ok(()) => uow.commit(),
//!     Err(e) => { uow.rollback().await?; return Err(e.into()); }
//! }
//! ```

use super::StoreError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// An undo step registered by a store write.
#[async_trait]
pub trait Compensation: Send {
    /// Short human-readable label for logs, e.g. `delete order order_3`.
    fn describe(&self) -> String;

    async fn compensate(self: Box<Self>) -> Result<(), StoreError>;
}

static NEXT_UOW_ID: AtomicU64 = AtomicU64::new(1);

/// A scope whose store writes either all stay or are all undone.
///
/// Must be finished with [`commit`](Self::commit) or [`rollback`](Self::rollback).
/// Dropping it with pending undo steps logs a warning; the steps are not run, since
/// undoing requires async store calls.
pub struct UnitOfWork {
    id: u64,
    pending: Vec<Box<dyn Compensation>>,
}

impl UnitOfWork {
    pub fn begin() -> Self {
        let id = NEXT_UOW_ID.fetch_add(1, Ordering::Relaxed);
        debug!(uow = id, "Unit of work started");
        Self {
            id,
            pending: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Registers the undo step for a write that just succeeded.
    pub fn record(&mut self, compensation: impl Compensation + 'static) {
        debug!(uow = self.id, step = %compensation.describe(), "Compensation recorded");
        self.pending.push(Box::new(compensation));
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Keeps every write made in this unit of work.
    pub fn commit(mut self) {
        info!(uow = self.id, writes = self.pending.len(), "Unit of work committed");
        self.pending.clear();
    }

    /// Undoes every recorded write, newest first.
    ///
    /// All steps are attempted even if one fails; the first failure is returned.
    pub async fn rollback(mut self) -> Result<(), StoreError> {
        let steps = std::mem::take(&mut self.pending);
        info!(uow = self.id, writes = steps.len(), "Rolling back unit of work");

        let mut first_error = None;
        for step in steps.into_iter().rev() {
            let label = step.describe();
            match step.compensate().await {
                Ok(()) => debug!(uow = self.id, step = %label, "Compensated"),
                Err(e) => {
                    warn!(uow = self.id, step = %label, error = %e, "Compensation failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            warn!(
                uow = self.id,
                writes = self.pending.len(),
                "Unit of work dropped without commit or rollback"
            );
        }
    }
}
