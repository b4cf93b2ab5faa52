use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::{OrderClient, ProductClient, ShipmentClient, UserClient};
use crate::clock::{Clock, TokioClock};
use crate::config::LifecycleConfig;
use crate::domain::{Order, Product, Shipment, User};
use crate::scheduler::{Scheduler, SchedulerShutdown};
use super::LifecycleDriver;

/// Sequential ids of the form `<prefix>-<n>`, starting at 1.
fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}-{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

/// The marketplace: every actor started, wired together, and shut down as one.
pub struct MarketSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub shipment_client: ShipmentClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
    driver_handle: tokio::task::JoinHandle<()>,
    scheduler_shutdown: SchedulerShutdown,
}

impl MarketSystem {
    /// Starts the system with a clock that follows tokio's time.
    pub fn new(config: LifecycleConfig) -> Self {
        Self::with_clock(config, Arc::new(TokioClock::new()))
    }

    pub fn with_clock(config: LifecycleConfig, clock: Arc<dyn Clock>) -> Self {
        info!(?config, "Starting market system");
        let (scheduler, fired, scheduler_shutdown) = Scheduler::new();

        // 1. User directory
        let (user_actor, user_resource_client) =
            ResourceActor::<User>::new(config.buffer_size, sequential_ids("user"));
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // 2. Product catalog
        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.buffer_size, sequential_ids("prod"));
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 3. Orders
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.buffer_size, sequential_ids("order"));
        let order_client = OrderClient::new(
            order_resource_client,
            user_client.clone(),
            product_client.clone(),
            scheduler.clone(),
            clock.clone(),
            config.accept_delay,
        );
        let order_handle = tokio::spawn(order_actor.run());

        // 4. Shipments
        let (shipment_actor, shipment_resource_client) =
            ResourceActor::<Shipment>::new(config.buffer_size, sequential_ids("ship"));
        let shipment_client = ShipmentClient::new(
            shipment_resource_client,
            order_client.clone(),
            scheduler.clone(),
            clock,
            config,
        );
        let shipment_handle = tokio::spawn(shipment_actor.run());

        // 5. Deferred transitions
        let driver = LifecycleDriver::new(
            fired,
            order_client.clone(),
            shipment_client.clone(),
            scheduler,
            config.delivery_delay,
        );
        let driver_handle = tokio::spawn(driver.run());

        Self {
            user_client,
            product_client,
            order_client,
            shipment_client,
            handles: vec![user_handle, product_handle, order_handle, shipment_handle],
            driver_handle,
            scheduler_shutdown,
        }
    }

    /// Stops pending timers and the driver, then lets every actor drain.
    ///
    /// Actors stop once the last client clone is gone, so callers must not keep
    /// clones of the clients past this call.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        self.scheduler_shutdown.trigger();
        if let Err(e) = self.driver_handle.await {
            error!("Lifecycle driver failed: {:?}", e);
            return Err(format!("Lifecycle driver failed: {:?}", e));
        }

        drop(self.shipment_client);
        drop(self.order_client);
        drop(self.product_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
