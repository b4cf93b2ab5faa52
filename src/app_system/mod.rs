//! System orchestration, startup, and shutdown logic.

pub mod market_system;
pub mod lifecycle_driver;
pub mod seed;
pub mod telemetry;

pub use market_system::*;
pub use lifecycle_driver::*;
pub use telemetry::*;
