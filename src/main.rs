use std::time::Duration;
use clap::Parser;
use tracing::{error, info, Instrument};
use agri_market::app_system::{setup_tracing, MarketSystem};
use agri_market::config::{self, LifecycleConfig};
use agri_market::domain::Role;

/// Walks one order from placement to delivery on the demo catalog.
#[derive(Debug, Clone, Parser)]
#[command(name = "agri-market", version)]
struct Cli {
    /// Product to order.
    #[arg(long, default_value = "prod-3")]
    product: String,

    /// Kilograms to order.
    #[arg(long, default_value_t = 200)]
    quantity: u32,

    /// Actor channel capacity.
    #[arg(long, env = "AGRI_BUFFER_SIZE", default_value_t = config::DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Milliseconds until a pending order is accepted.
    #[arg(long, env = "AGRI_ACCEPT_DELAY_MS", default_value_t = config::DEFAULT_ACCEPT_DELAY_MS)]
    accept_delay_ms: u64,

    /// Milliseconds a shipment waits for pickup.
    #[arg(long, env = "AGRI_DISPATCH_DELAY_MS", default_value_t = config::DEFAULT_DISPATCH_DELAY_MS)]
    dispatch_delay_ms: u64,

    /// Milliseconds in transit.
    #[arg(long, env = "AGRI_DELIVERY_DELAY_MS", default_value_t = config::DEFAULT_DELIVERY_DELAY_MS)]
    delivery_delay_ms: u64,
}

impl Cli {
    fn lifecycle_config(&self) -> LifecycleConfig {
        LifecycleConfig {
            buffer_size: self.buffer_size,
            accept_delay: Duration::from_millis(self.accept_delay_ms),
            dispatch_delay: Duration::from_millis(self.dispatch_delay_ms),
            delivery_delay: Duration::from_millis(self.delivery_delay_ms),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    setup_tracing();

    let config = cli.lifecycle_config();
    let system = MarketSystem::new(config);
    system.seed_demo_data().await?;
    system.seed_demo_orders().await?;

    let buyer_id = system
        .user_client
        .user_id_by_role(Role::Wholesaler)
        .await
        .map_err(|e| e.to_string())?
        .ok_or("No wholesaler registered")?;
    let logistics_id = system
        .user_client
        .user_id_by_role(Role::Logistics)
        .await
        .map_err(|e| e.to_string())?
        .ok_or("No logistics company registered")?;

    let span = tracing::info_span!("order_processing");
    let order = async {
        info!("Placing order");
        system
            .order_client
            .create_order(cli.product.clone(), buyer_id, cli.quantity)
            .await
    }
    .instrument(span)
    .await;

    let order = match order {
        Ok(order) => order,
        Err(e) => {
            error!(error = %e, "Order placement failed");
            system.shutdown().await?;
            return Err(e.to_string());
        }
    };
    info!(order_id = %order.id, total_price = order.total_price, "Order placed");

    // Let the farmer accept it
    tokio::time::sleep(config.accept_delay + Duration::from_millis(100)).await;

    let span = tracing::info_span!("shipping");
    let shipment = async {
        system
            .shipment_client
            .create_shipment(order.id.clone(), logistics_id)
            .await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    info!(shipment_id = %shipment.id, estimated_delivery = %shipment.estimated_delivery, "Shipment booked");

    tokio::time::sleep(config.transit_time() + Duration::from_millis(100)).await;

    let report = system
        .shipment_client
        .track_order(order.id.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(status = %report.order_status, "Tracking report");
    for event in &report.history {
        info!(at = %event.timestamp, "{}", event.label);
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
