use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderStatus};
use super::actions::{OrderAction, OrderActionResult};

impl Order {
    fn step(&mut self, next: OrderStatus) -> Result<OrderActionResult, String> {
        if !self.status.can_transition_to(next) {
            return Err(format!(
                "Order {} cannot move from {} to {}",
                self.id, self.status, next
            ));
        }
        let from = self.status;
        self.status = next;
        Ok(OrderActionResult::Moved { from })
    }
}

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Patch = (); // status changes go through actions
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Pending order.
    ///
    /// # Errors
    /// Rejects a zero quantity.
    fn from_create(id: String, params: OrderCreate) -> Result<Self, String> {
        if params.quantity == 0 {
            return Err("Order quantity must be positive".to_string());
        }
        Ok(Self {
            id,
            product_id: params.product_id,
            product_name: params.product_name,
            buyer_id: params.buyer_id,
            seller_id: params.seller_id,
            quantity: params.quantity,
            total_price: params.total_price,
            status: OrderStatus::Pending,
            order_date: params.order_date,
            delivery_date: None,
            shipping_id: None,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::Accept => {
                if self.status == OrderStatus::Pending {
                    self.step(OrderStatus::Accepted)
                } else {
                    Ok(OrderActionResult::Skipped { current: self.status })
                }
            }
            OrderAction::Ship => self.step(OrderStatus::Shipped),
            OrderAction::AttachShipment(shipping_id) => {
                if self.status != OrderStatus::Shipped {
                    return Err(format!("Order {} is {}, not Shipped", self.id, self.status));
                }
                if let Some(existing) = &self.shipping_id {
                    return Err(format!("Order {} already has shipment {}", self.id, existing));
                }
                self.shipping_id = Some(shipping_id);
                Ok(OrderActionResult::ShipmentAttached)
            }
            OrderAction::Deliver { at } => {
                let result = self.step(OrderStatus::Delivered)?;
                self.delivery_date = Some(at);
                Ok(result)
            }
            OrderAction::Cancel => self.step(OrderStatus::Cancelled),
            OrderAction::Overwrite { status, at } => {
                let from = self.status;
                self.status = status;
                if status != OrderStatus::Delivered {
                    self.delivery_date = None;
                } else if from != OrderStatus::Delivered {
                    self.delivery_date = Some(at);
                }
                Ok(OrderActionResult::Moved { from })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn pending() -> Order {
        let params = OrderCreate {
            product_id: "prod-1".into(),
            product_name: "Organic Tomatoes".into(),
            buyer_id: "user-3".into(),
            seller_id: "user-1".into(),
            quantity: 100,
            total_price: 250.0,
            order_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        Order::from_create("order-1".into(), params).unwrap()
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let order = pending();
        let params = OrderCreate {
            product_id: order.product_id,
            product_name: order.product_name,
            buyer_id: order.buyer_id,
            seller_id: order.seller_id,
            quantity: 0,
            total_price: 0.0,
            order_date: order.order_date,
        };
        assert!(Order::from_create("order-2".into(), params).is_err());
    }

    #[test]
    fn test_accept_applies_once() {
        let mut order = pending();
        assert_eq!(
            order.handle_action(OrderAction::Accept).unwrap(),
            OrderActionResult::Moved { from: OrderStatus::Pending }
        );
        assert_eq!(
            order.handle_action(OrderAction::Accept).unwrap(),
            OrderActionResult::Skipped { current: OrderStatus::Accepted }
        );
        assert_eq!(order.status, OrderStatus::Accepted);
    }

    #[test]
    fn test_accept_skips_cancelled_order() {
        let mut order = pending();
        order.handle_action(OrderAction::Cancel).unwrap();
        let result = order.handle_action(OrderAction::Accept).unwrap();
        assert_eq!(result, OrderActionResult::Skipped { current: OrderStatus::Cancelled });
    }

    #[test]
    fn test_ship_requires_accepted() {
        let mut order = pending();
        assert!(order.handle_action(OrderAction::Ship).is_err());
        order.handle_action(OrderAction::Accept).unwrap();
        order.handle_action(OrderAction::Ship).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_attach_shipment_only_once() {
        let mut order = pending();
        assert!(order.handle_action(OrderAction::AttachShipment("ship-1".into())).is_err());
        order.handle_action(OrderAction::Accept).unwrap();
        order.handle_action(OrderAction::Ship).unwrap();
        order.handle_action(OrderAction::AttachShipment("ship-1".into())).unwrap();
        assert!(order.handle_action(OrderAction::AttachShipment("ship-2".into())).is_err());
        assert_eq!(order.shipping_id.as_deref(), Some("ship-1"));
    }

    #[test]
    fn test_deliver_stamps_date() {
        let mut order = pending();
        let at = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
        assert!(order.handle_action(OrderAction::Deliver { at }).is_err());
        assert!(order.delivery_date.is_none());

        order.handle_action(OrderAction::Accept).unwrap();
        order.handle_action(OrderAction::Ship).unwrap();
        order.handle_action(OrderAction::Deliver { at }).unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.delivery_date, Some(at));
    }

    #[test]
    fn test_cancel_rejected_when_terminal() {
        let mut order = pending();
        order.handle_action(OrderAction::Cancel).unwrap();
        assert!(order.handle_action(OrderAction::Cancel).is_err());
    }

    #[test]
    fn test_overwrite_ignores_transition_table() {
        let mut order = pending();
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let result = order
            .handle_action(OrderAction::Overwrite { status: OrderStatus::Delivered, at })
            .unwrap();
        assert_eq!(result, OrderActionResult::Moved { from: OrderStatus::Pending });
        assert_eq!(order.delivery_date, Some(at));

        let result = order
            .handle_action(OrderAction::Overwrite { status: OrderStatus::Pending, at })
            .unwrap();
        assert_eq!(result, OrderActionResult::Moved { from: OrderStatus::Delivered });
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.delivery_date.is_none());
    }

    #[test]
    fn test_overwrite_keeps_existing_delivery_date() {
        let mut order = pending();
        let delivered_at = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
        order.handle_action(OrderAction::Accept).unwrap();
        order.handle_action(OrderAction::Ship).unwrap();
        order.handle_action(OrderAction::Deliver { at: delivered_at }).unwrap();

        let later = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        order
            .handle_action(OrderAction::Overwrite { status: OrderStatus::Delivered, at: later })
            .unwrap();
        assert_eq!(order.delivery_date, Some(delivered_at));
    }
}
