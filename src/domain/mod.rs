pub mod user;
pub mod product;
pub mod order;
pub mod shipment;
pub mod tracking;

pub use user::*;
pub use product::*;
pub use order::*;
pub use shipment::*;
pub use tracking::*;
