//! Cloneable handles over the resource actors, carrying the cross-entity workflows.

#[macro_use]
mod macros;

pub mod user_client;
pub mod product_client;
pub mod order_client;
pub mod shipment_client;

pub use user_client::UserClient;
pub use product_client::ProductClient;
pub use order_client::OrderClient;
pub use shipment_client::ShipmentClient;
