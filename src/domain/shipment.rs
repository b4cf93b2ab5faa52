use chrono::{DateTime, Utc};
use std::fmt;

/// Shipment progress: Awaiting Pickup → In Transit → Delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipmentStatus {
    AwaitingPickup,
    InTransit,
    Delivered,
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShipmentStatus::AwaitingPickup => "Awaiting Pickup",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delivered => "Delivered",
        };
        f.write_str(name)
    }
}

/// Physical transit of one shipped order.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub id: String,
    pub order_id: String,
    pub logistics_id: String,
    pub status: ShipmentStatus,
    pub pickup_date: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    pub in_transit_date: Option<DateTime<Utc>>,
}

/// Payload for creating a shipment. Always starts out Awaiting Pickup.
#[derive(Debug, Clone)]
pub struct ShipmentCreate {
    pub order_id: String,
    pub logistics_id: String,
    pub pickup_date: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}
