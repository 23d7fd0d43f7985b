use actor_framework::tracing::setup_tracing;
use anyhow::{bail, Context, Result};
use clap::Parser;
use order_service::config::{CustomerSeed, ProductSeed, ServiceConfig};
use order_service::lifecycle::OrderSystem;
use order_service::model::{CustomerId, ProductRequest};
use std::path::PathBuf;
use tracing::{error, info, Instrument};

/// Places one order against an in-memory catalog.
#[derive(Debug, Parser)]
#[command(name = "order-service", version, about)]
struct Args {
    /// TOML config file; seeds a small demo catalog when it lists no data.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Customer placing the order.
    #[arg(long, default_value = "C1")]
    customer: String,

    /// Order line as `<product_id>=<quantity>`; repeatable.
    #[arg(long = "item", value_parser = parse_item, required = true)]
    items: Vec<ProductRequest>,
}

fn parse_item(raw: &str) -> Result<ProductRequest, String> {
    let (id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <product_id>=<quantity>, got '{raw}'"))?;
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity in '{raw}': {e}"))?;
    if id.trim().is_empty() {
        return Err(format!("missing product id in '{raw}'"));
    }
    Ok(ProductRequest::new(id.trim(), quantity))
}

fn demo_catalog(config: &mut ServiceConfig) {
    if config.customers.is_empty() {
        config.customers.push(CustomerSeed {
            id: "C1".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        });
    }
    if config.products.is_empty() {
        config.products = vec![
            ProductSeed {
                id: "P1".to_string(),
                name: "Widget".to_string(),
                price: 10.0,
                stock: 5,
            },
            ProductSeed {
                id: "P2".to_string(),
                name: "Gadget".to_string(),
                price: 20.0,
                stock: 3,
            },
        ];
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = ServiceConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    setup_tracing(&config.log_filter);
    demo_catalog(&mut config);

    let system = OrderSystem::new(&config);
    system
        .seed(&config)
        .instrument(tracing::info_span!("seeding"))
        .await
        .context("Failed to seed stores")?;

    let customer_id = CustomerId::from(args.customer);
    let result = system
        .service
        .execute(&customer_id, args.items)
        .instrument(tracing::info_span!("order_processing"))
        .await;

    let placed = match result {
        Ok(order) => {
            info!(order_id = %order.id, "Order processed successfully");
            println!("Order {} for customer {}", order.id, order.customer.id);
            for item in &order.line_items {
                println!(
                    "  {} x{} @ {:.2} = {:.2}",
                    item.product_id,
                    item.quantity,
                    item.unit_price,
                    item.total()
                );
            }
            println!("Total: {:.2}", order.total());
            true
        }
        Err(e) => {
            error!(error = %e, "Order processing failed");
            println!("Order rejected: {e}");
            false
        }
    };

    system.shutdown().await.context("Actor task failed")?;

    if !placed {
        bail!("order was not created");
    }
    info!("Application completed successfully");
    Ok(())
}
