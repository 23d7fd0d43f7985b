//! Service configuration, loaded from TOML.
//!
//! Every key is optional:
//!
//! ```toml
//! channel_buffer = 32
//! log_filter = "info,actor_framework=debug"
//!
//! [[customers]]
//! id = "C1"
//! name = "Ada Lovelace"
//! email = "ada@example.com"
//!
//! [[products]]
//! id = "P1"
//! name = "Widget"
//! price = 10.0
//! stock = 5
//! ```
//!
//! The `customers` and `products` tables seed the in-memory stores at startup.

use crate::model::{CustomerCreate, ProductCreate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Mailbox capacity of each actor.
    pub channel_buffer: usize,
    /// Default `tracing` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
    pub customers: Vec<CustomerSeed>,
    pub products: Vec<ProductSeed>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            log_filter: "info".to_string(),
            customers: Vec::new(),
            products: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSeed {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&CustomerSeed> for CustomerCreate {
    fn from(seed: &CustomerSeed) -> Self {
        CustomerCreate::new(seed.name.clone(), seed.email.clone()).with_id(seed.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSeed {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl From<&ProductSeed> for ProductCreate {
    fn from(seed: &ProductSeed) -> Self {
        ProductCreate::new(seed.name.clone(), seed.price, seed.stock).with_id(seed.id.as_str())
    }
}

impl ServiceConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid {
                field: "channel_buffer",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
