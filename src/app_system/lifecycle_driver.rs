use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use crate::clients::{OrderClient, ShipmentClient};
use crate::order_actor::OrderActionResult;
use crate::scheduler::{Scheduler, Transition};
use crate::shipment_actor::{ShipmentActionResult, ShipmentError};

/// Applies fired transitions, one at a time.
///
/// Every transition is guarded by its source state, so a transition that no
/// longer applies (a cancelled order, a repeated timer) is skipped and logged.
pub struct LifecycleDriver {
    receiver: mpsc::UnboundedReceiver<Transition>,
    order_client: OrderClient,
    shipment_client: ShipmentClient,
    scheduler: Scheduler,
    delivery_delay: Duration,
}

impl LifecycleDriver {
    pub fn new(
        receiver: mpsc::UnboundedReceiver<Transition>,
        order_client: OrderClient,
        shipment_client: ShipmentClient,
        scheduler: Scheduler,
        delivery_delay: Duration,
    ) -> Self {
        Self {
            receiver,
            order_client,
            shipment_client,
            scheduler,
            delivery_delay,
        }
    }

    #[instrument(name = "lifecycle_driver", skip(self))]
    pub async fn run(mut self) {
        info!("LifecycleDriver starting");
        loop {
            tokio::select! {
                biased;
                _ = self.scheduler.stopped() => {
                    info!("LifecycleDriver shutting down");
                    break;
                }
                next = self.receiver.recv() => match next {
                    Some(transition) => self.apply(transition).await,
                    None => break,
                },
            }
        }
        info!("LifecycleDriver stopped");
    }

    async fn apply(&self, transition: Transition) {
        match transition {
            Transition::AcceptOrder(order_id) => self.handle_accept(order_id).await,
            Transition::DispatchShipment(shipment_id) => self.handle_dispatch(shipment_id).await,
            Transition::DeliverShipment(shipment_id) => self.handle_deliver(shipment_id).await,
        }
    }

    #[instrument(fields(order_id = %order_id), skip(self, order_id))]
    async fn handle_accept(&self, order_id: String) {
        match self.order_client.accept_order(order_id).await {
            Ok((OrderActionResult::Moved { .. }, _)) => info!("Order accepted"),
            Ok((OrderActionResult::Skipped { current }, _)) => {
                debug!(%current, "Order no longer Pending, acceptance skipped")
            }
            Ok((other, _)) => warn!(result = ?other, "Unexpected acceptance result"),
            Err(e) => error!(error = %e, "Order acceptance failed"),
        }
    }

    #[instrument(fields(shipment_id = %shipment_id), skip(self, shipment_id))]
    async fn handle_dispatch(&self, shipment_id: String) {
        match self.shipment_client.dispatch(shipment_id.clone()).await {
            Ok((ShipmentActionResult::Moved { .. }, _)) => {
                info!("Shipment in transit");
                self.scheduler
                    .schedule(self.delivery_delay, Transition::DeliverShipment(shipment_id));
            }
            Ok((ShipmentActionResult::Skipped { current }, _)) => {
                debug!(%current, "Shipment not awaiting pickup, dispatch skipped")
            }
            Err(ShipmentError::InvalidState(reason)) => warn!(%reason, "Shipment dispatch halted"),
            Err(e) => error!(error = %e, "Shipment dispatch failed"),
        }
    }

    /// Delivers the order and, in the same step, its shipment.
    #[instrument(fields(shipment_id = %shipment_id), skip(self, shipment_id))]
    async fn handle_deliver(&self, shipment_id: String) {
        match self.shipment_client.deliver(shipment_id).await {
            Ok((ShipmentActionResult::Moved { .. }, shipment)) => {
                info!(order_id = %shipment.order_id, "Shipment and order delivered")
            }
            Ok((ShipmentActionResult::Skipped { current }, _)) => {
                debug!(%current, "Shipment not in transit, delivery skipped")
            }
            Err(ShipmentError::InvalidState(reason)) => warn!(%reason, "Shipment delivery halted"),
            Err(e) => error!(error = %e, "Shipment delivery failed"),
        }
    }
}
