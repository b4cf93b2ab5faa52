//! Shipment entity: Awaiting Pickup → In Transit → Delivered.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
