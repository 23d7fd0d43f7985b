//! Plain data types for customers, products and orders.
//!
//! The entity types ([`Customer`], [`Product`], [`Order`]) implement
//! [`ActorEntity`](actor_framework::ActorEntity) in their `*_actor` modules; the
//! remaining types are request payloads exchanged with the stores.

/// Declares a string-backed id newtype.
///
/// Generated ids look like `<prefix>_<n>`; ids supplied by callers are kept verbatim.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl From<u32> for $name {
            fn from(seq: u32) -> Self {
                Self(format!(concat!($prefix, "_{}"), seq))
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
