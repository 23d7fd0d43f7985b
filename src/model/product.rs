use actor_framework::Versioned;
use serde::{Deserialize, Serialize};

string_id!(
    /// Type-safe identifier for products.
    ProductId,
    "product"
);

/// A product in the catalog, with its current stock level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// A product as read from the product store: the entity plus the version the
/// store had when it was read. Stock updates hand the version back.
pub type ProductRecord = Versioned<Product>;

/// Payload for adding a product to the catalog. `id: None` lets the store generate one.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Partial product update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

/// One line of an order request: which product and how many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl ProductRequest {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// New stock level for one product, valid only if the product is still at
/// `expected_version`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityUpdate {
    pub product_id: ProductId,
    pub quantity: u32,
    pub expected_version: u64,
}
