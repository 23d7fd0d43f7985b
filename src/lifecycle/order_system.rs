use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::config::ServiceConfig;
use crate::model::{CustomerCreate, ProductCreate};
use crate::service::CreateOrderService;
use crate::store::StoreError;
use crate::{customer_actor, order_actor, product_actor};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The order service wired to the in-process stores.
pub type OrderService = CreateOrderService<CustomerClient, ProductClient, OrderClient>;

/// Runtime for the order service: one actor per entity type plus the service on top.
///
/// ```rust
/// use order_service::config::ServiceConfig;
/// use order_service::lifecycle::OrderSystem;
/// use order_service::model::{CustomerCreate, ProductCreate, ProductRequest};
///
/// #[tokio::main]
/// async fn main() {
///     let system = OrderSystem::new(&ServiceConfig::default());
///     let customer = system
///         .customer_client
///         .create_customer(CustomerCreate::new("Ada", "ada@example.com"))
///         .await
///         .unwrap();
///     system
///         .product_client
///         .create_product(ProductCreate::new("Widget", 10.0, 5).with_id("P1"))
///         .await
///         .unwrap();
///
///     let order = system
///         .service
///         .execute(&customer.id, vec![ProductRequest::new("P1", 2)])
///         .await
///         .unwrap();
///     assert_eq!(order.total(), 20.0);
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub service: OrderService,
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns the actors on the current Tokio runtime.
    pub fn new(config: &ServiceConfig) -> Self {
        let (customer_actor, customer_client) = customer_actor::new(config.channel_buffer);
        let (product_actor, product_client) = product_actor::new(config.channel_buffer);
        let (order_actor, order_client) = order_actor::new(config.channel_buffer);

        let customer_client = CustomerClient::new(customer_client);
        let product_client = ProductClient::new(product_client);
        let order_client = OrderClient::new(order_client);

        let customer_handle = tokio::spawn(customer_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        // Orders check their product references against the product actor.
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));

        let service = CreateOrderService::new(
            customer_client.clone(),
            product_client.clone(),
            order_client.clone(),
        );

        info!(channel_buffer = config.channel_buffer, "Order system started");

        Self {
            customer_client,
            product_client,
            order_client,
            service,
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    /// Loads the customers and products listed in `config` into the stores.
    pub async fn seed(&self, config: &ServiceConfig) -> Result<(), StoreError> {
        for customer in &config.customers {
            self.customer_client
                .create_customer(CustomerCreate::from(customer))
                .await?;
        }
        for product in &config.products {
            self.product_client
                .create_product(ProductCreate::from(product))
                .await?;
        }
        info!(
            customers = config.customers.len(),
            products = config.products.len(),
            "Stores seeded"
        );
        Ok(())
    }

    /// Drops every client and waits for the actors to drain their mailboxes and stop.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");
        drop(self.service);
        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
