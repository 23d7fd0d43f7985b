use serde::{Deserialize, Serialize};

string_id!(
    /// Type-safe identifier for customers.
    CustomerId,
    "customer"
);

/// A registered customer.
///
/// Order creation only checks that the customer exists; the order keeps its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

/// Payload for registering a customer. `id: None` lets the store generate one.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub id: Option<CustomerId>,
    pub name: String,
    pub email: String,
}

impl CustomerCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<CustomerId>) -> Self {
        self.id = Some(id.into());
        self
    }
}
