//! [`ActorEntity`] implementation for [`Customer`].

use super::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

impl Customer {
    fn validate(&self) -> Result<(), CustomerError> {
        if self.name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        if !self.email.contains('@') {
            return Err(CustomerError::InvalidEmail {
                id: self.id.to_string(),
                email: self.email.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = ();
    type Context = ();
    type Error = CustomerError;

    fn requested_id(params: &CustomerCreate) -> Option<CustomerId> {
        params.id.clone()
    }

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        let customer = Self {
            id,
            name: params.name,
            email: params.email,
        };
        customer.validate()?;
        Ok(customer)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Err(CustomerError::Immutable(self.id.to_string()))
    }
}
