//! # Agricultural marketplace
//!
//! Farmers list produce, wholesalers and retailers order it, logistics
//! companies carry it. Each entity store is an actor; clients wrap the actor
//! channels and carry the cross-entity workflows.
//!
//! ## Lifecycle
//!
//! ```text
//! Order:    Pending --(auto)--> Accepted --(create_shipment)--> Shipped --(via shipment)--> Delivered
//!           any non-terminal state --(cancel)--> Cancelled
//! Shipment: Awaiting Pickup --(auto)--> In Transit --(auto)--> Delivered
//! ```
//!
//! The automatic steps are [`scheduler::Transition`]s applied by the
//! [`app_system::LifecycleDriver`] once their delay has passed.
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use agri_market::app_system::MarketSystem;
//! use agri_market::config::LifecycleConfig;
//!
//! let system = MarketSystem::new(LifecycleConfig::default());
//! system.seed_demo_data().await?;
//!
//! let order = system
//!     .order_client
//!     .create_order("prod-3".into(), "user-2".into(), 200)
//!     .await?;
//! assert_eq!(order.total_price, 160.0);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod clock;
pub mod config;
pub mod domain;
pub mod order_actor;
pub mod product_actor;
pub mod scheduler;
pub mod shipment_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
