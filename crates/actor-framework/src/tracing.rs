//! # Observability & Tracing
//!
//! Every actor logs with structured fields (`entity_type`, `id`, `size`, `error`) and
//! every domain client method opens a span via `#[instrument]`, so one order shows up as
//! a nested trace:
//!
//! ```text
//! INFO create_order: Creating order customer_id=C1 lines=2
//! INFO create_order:find_all_by_id: ...
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Updated entity_type="Product" count=2
//! ```
//!
//! `RUST_LOG` wins over the default filter passed in by the application:
//!
//! ```bash
//! RUST_LOG=debug cargo run        # full payloads (`?params`, `?updates`)
//! RUST_LOG=actor_framework=warn,order_service=info cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global compact subscriber.
///
/// `default_filter` is used when `RUST_LOG` is unset or unparsable. Calling this
/// twice is a no-op for the second call.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type carries the context instead of module paths
        .compact()
        .try_init();
}
