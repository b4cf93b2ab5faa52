use crate::actor_framework::Entity;
use crate::domain::{Shipment, ShipmentCreate, ShipmentStatus};
use super::actions::{ShipmentAction, ShipmentActionResult};

impl Entity for Shipment {
    type Id = String;
    type CreatePayload = ShipmentCreate;
    type Patch = ();
    type Action = ShipmentAction;
    type ActionResult = ShipmentActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(id: String, params: ShipmentCreate) -> Result<Self, String> {
        if params.estimated_delivery < params.pickup_date {
            return Err("Estimated delivery precedes pickup".to_string());
        }
        Ok(Self {
            id,
            order_id: params.order_id,
            logistics_id: params.logistics_id,
            status: ShipmentStatus::AwaitingPickup,
            pickup_date: params.pickup_date,
            estimated_delivery: params.estimated_delivery,
            in_transit_date: None,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: ShipmentAction) -> Result<ShipmentActionResult, String> {
        let from = self.status;
        match (action, from) {
            (ShipmentAction::Dispatch { at }, ShipmentStatus::AwaitingPickup) => {
                self.status = ShipmentStatus::InTransit;
                self.in_transit_date = Some(at);
                Ok(ShipmentActionResult::Moved { from })
            }
            (ShipmentAction::Deliver, ShipmentStatus::InTransit) => {
                self.status = ShipmentStatus::Delivered;
                Ok(ShipmentActionResult::Moved { from })
            }
            _ => Ok(ShipmentActionResult::Skipped { current: from }),
        }
    }
}
