//! # Customer Client
//!
//! Wraps a `ResourceClient<Customer>` and serves as the [`CustomerStore`].
use crate::model::{Customer, CustomerCreate, CustomerId};
use crate::store::{CustomerStore, StoreError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, StoreError> {
        debug!("Sending request");
        let created = self.inner.create(params).await?;
        Ok(created.entity)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::from(e)
    }
}

#[async_trait]
impl CustomerStore for CustomerClient {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, StoreError> {
        self.get(id.clone()).await
    }
}
