use std::sync::Arc;
use chrono::Duration;
use tracing::{error, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::clients::OrderClient;
use crate::clock::Clock;
use crate::config::LifecycleConfig;
use crate::domain::{OrderStatus, Shipment, ShipmentCreate, ShipmentStatus, TrackingEvent, TrackingReport};
use crate::scheduler::{Scheduler, Transition};
use crate::shipment_actor::{ShipmentAction, ShipmentActionResult, ShipmentError};

/// Client for the Shipment actor.
///
/// Binds shipments to Accepted orders and exposes the steps the lifecycle
/// driver uses to move them to delivery.
#[derive(Clone)]
pub struct ShipmentClient {
    inner: ResourceClient<Shipment>,
    order_client: OrderClient,
    scheduler: Scheduler,
    clock: Arc<dyn Clock>,
    config: LifecycleConfig,
}

impl_client_methods!(ShipmentClient, Shipment, ShipmentError, shipment);

impl ShipmentClient {
    pub fn new(
        inner: ResourceClient<Shipment>,
        order_client: OrderClient,
        scheduler: Scheduler,
        clock: Arc<dyn Clock>,
        config: LifecycleConfig,
    ) -> Self {
        Self {
            inner,
            order_client,
            scheduler,
            clock,
            config,
        }
    }

    /// A logistics actor takes an Accepted order.
    ///
    /// The order flips to Shipped first; that step fails for anything but an
    /// Accepted order, so only one shipment can ever claim it. If the order
    /// changes before the shipment is attached, the shipment is discarded.
    ///
    /// # Errors
    /// - `NotFound` for an unknown order.
    /// - `InvalidState` unless the order is Accepted.
    #[instrument(skip(self))]
    pub async fn create_shipment(
        &self,
        order_id: String,
        logistics_id: String,
    ) -> Result<Shipment, ShipmentError> {
        info!("Processing create_shipment request");

        // Step 1: Claim the order
        self.order_client.mark_shipped(order_id.clone()).await?;

        // Step 2: Create the shipment
        let pickup_date = self.clock.now();
        let transit = Duration::from_std(self.config.transit_time()).unwrap_or(Duration::zero());
        let payload = ShipmentCreate {
            order_id: order_id.clone(),
            logistics_id,
            pickup_date,
            estimated_delivery: pickup_date + transit,
        };
        let shipment = self.inner.create(payload).await?;

        // Step 3: Back-reference from the order
        if let Err(e) = self.order_client.attach_shipment(order_id, shipment.id.clone()).await {
            warn!(error = %e, shipment_id = %shipment.id, "Order changed before attach, discarding shipment");
            if let Err(cleanup) = self.inner.delete(shipment.id.clone()).await {
                error!(error = %cleanup, "Shipment cleanup failed");
            }
            return Err(e.into());
        }
        info!(shipment_id = %shipment.id, "Shipment created successfully");

        self.scheduler.schedule(
            self.config.dispatch_delay,
            Transition::DispatchShipment(shipment.id.clone()),
        );

        Ok(shipment)
    }

    /// Guarded Awaiting Pickup → In Transit.
    ///
    /// # Errors
    /// `InvalidState` when the bound order is no longer Shipped; the shipment
    /// then stays where it is.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, shipment_id: String) -> Result<(ShipmentActionResult, Shipment), ShipmentError> {
        let shipment = self.require_shipment(shipment_id.clone()).await?;
        if shipment.status != ShipmentStatus::AwaitingPickup {
            return Ok((ShipmentActionResult::Skipped { current: shipment.status }, shipment));
        }
        let order = self.order_client.require_order(shipment.order_id.clone()).await?;
        if order.status != OrderStatus::Shipped {
            return Err(ShipmentError::InvalidState(format!(
                "Order {} is {}, shipment {} halted",
                order.id, order.status, shipment.id
            )));
        }

        let at = self.clock.now();
        Ok(self.inner.perform_action(shipment_id, ShipmentAction::Dispatch { at }).await?)
    }

    /// Guarded In Transit → Delivered, together with the bound order.
    ///
    /// The order moves first. Its Shipped → Delivered step fails for a
    /// cancelled or overwritten order, and then the shipment is left In Transit,
    /// so a Delivered shipment always has a Delivered order.
    #[instrument(skip(self))]
    pub async fn deliver(&self, shipment_id: String) -> Result<(ShipmentActionResult, Shipment), ShipmentError> {
        let shipment = self.require_shipment(shipment_id.clone()).await?;
        if shipment.status != ShipmentStatus::InTransit {
            return Ok((ShipmentActionResult::Skipped { current: shipment.status }, shipment));
        }

        self.order_client
            .mark_delivered(shipment.order_id.clone(), self.clock.now())
            .await?;
        Ok(self.inner.perform_action(shipment_id, ShipmentAction::Deliver).await?)
    }

    /// Like `get_shipment`, but an unknown id is an error.
    pub async fn require_shipment(&self, shipment_id: String) -> Result<Shipment, ShipmentError> {
        self.get_shipment(shipment_id.clone())
            .await?
            .ok_or_else(|| ShipmentError::NotFound(format!("shipment {}", shipment_id)))
    }

    #[instrument(skip(self))]
    pub async fn get_shipments_by_logistics(&self, logistics_id: String) -> Result<Vec<Shipment>, ShipmentError> {
        let shipments = self.list_shipments().await?;
        Ok(shipments.into_iter().filter(|s| s.logistics_id == logistics_id).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_shipment_for_order(&self, order_id: String) -> Result<Option<Shipment>, ShipmentError> {
        let shipments = self.list_shipments().await?;
        Ok(shipments.into_iter().find(|s| s.order_id == order_id))
    }

    /// Tracking page data, built from the dates recorded along the way.
    ///
    /// # Errors
    /// `NotFound` for an unknown order.
    #[instrument(skip(self))]
    pub async fn track_order(&self, order_id: String) -> Result<TrackingReport, ShipmentError> {
        let order = self.order_client.require_order(order_id.clone()).await?;
        let shipment = match &order.shipping_id {
            Some(id) => self.get_shipment(id.clone()).await?,
            None => None,
        };

        let mut history = vec![TrackingEvent::new("Order Placed", order.order_date)];
        if let Some(shipment) = &shipment {
            history.push(TrackingEvent::new("Picked Up", shipment.pickup_date));
            if let Some(at) = shipment.in_transit_date {
                history.push(TrackingEvent::new("In Transit", at));
            }
        }
        if let Some(at) = order.delivery_date {
            history.push(TrackingEvent::new("Delivered", at));
        }
        history.reverse();

        Ok(TrackingReport {
            order_id,
            order_status: order.status,
            shipment_status: shipment.as_ref().map(|s| s.status),
            estimated_delivery: shipment.as_ref().map(|s| s.estimated_delivery),
            history,
        })
    }
}
