//! Configuration constants and lifecycle timing.
//!
//! The delays stand in for real-world farmer response and transit time.

use std::time::Duration;

/// Capacity of every actor's request channel.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Time before a Pending order is auto-accepted by the farmer.
pub const DEFAULT_ACCEPT_DELAY_MS: u64 = 5_000;

/// Time a new shipment waits for pickup before going In Transit.
pub const DEFAULT_DISPATCH_DELAY_MS: u64 = 5_000;

/// Time from In Transit to Delivered.
pub const DEFAULT_DELIVERY_DELAY_MS: u64 = 10_000;

/// Tunables of the order/shipment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleConfig {
    pub buffer_size: usize,
    pub accept_delay: Duration,
    pub dispatch_delay: Duration,
    pub delivery_delay: Duration,
}

impl LifecycleConfig {
    /// Total time a shipment spends between pickup and delivery.
    pub fn transit_time(&self) -> Duration {
        self.dispatch_delay + self.delivery_delay
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            accept_delay: Duration::from_millis(DEFAULT_ACCEPT_DELAY_MS),
            dispatch_delay: Duration::from_millis(DEFAULT_DISPATCH_DELAY_MS),
            delivery_delay: Duration::from_millis(DEFAULT_DELIVERY_DELAY_MS),
        }
    }
}
