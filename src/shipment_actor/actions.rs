use chrono::{DateTime, Utc};
use crate::domain::ShipmentStatus;

/// Both steps are guarded: they apply only from their source state.
#[derive(Debug, Clone)]
pub enum ShipmentAction {
    /// Awaiting Pickup → In Transit.
    Dispatch { at: DateTime<Utc> },
    /// In Transit → Delivered.
    Deliver,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShipmentActionResult {
    Moved { from: ShipmentStatus },
    Skipped { current: ShipmentStatus },
}
