use chrono::{DateTime, Utc};
use crate::domain::OrderStatus;

/// Status changes an order accepts.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Farmer acceptance. Guarded: only a Pending order moves, anything else is skipped.
    Accept,
    /// Accepted → Shipped, taken by a logistics actor. Fails from any other state.
    Ship,
    /// Records the shipment bound to a Shipped order.
    AttachShipment(String),
    /// Shipped → Delivered, stamping the delivery date.
    Deliver { at: DateTime<Utc> },
    /// Any non-terminal state → Cancelled.
    Cancel,
    /// Manual override: sets the status without consulting the transition table.
    ///
    /// Entering Delivered stamps `at` as the delivery date; leaving it clears the date.
    Overwrite { status: OrderStatus, at: DateTime<Utc> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Status changed; the entity returned alongside holds the new one.
    Moved { from: OrderStatus },
    /// A guarded step did not apply. Nothing changed.
    Skipped { current: OrderStatus },
    ShipmentAttached,
}
