use chrono::{DateTime, Utc};

use super::{OrderStatus, ShipmentStatus};

/// One step in an order's journey.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingEvent {
    pub label: String,
    pub timestamp: DateTime<Utc>,
}

/// What a buyer sees on the tracking page. History is newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingReport {
    pub order_id: String,
    pub order_status: OrderStatus,
    pub shipment_status: Option<ShipmentStatus>,
    pub estimated_delivery: Option<DateTime<Utc>>,
    pub history: Vec<TrackingEvent>,
}

impl TrackingEvent {
    pub fn new(label: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            timestamp,
        }
    }
}
