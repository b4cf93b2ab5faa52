//! Time source for order and shipment timestamps.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Trait for providing the current time.
///
/// Lets time-dependent code be tested with deterministic, controllable values.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock anchored at construction and advanced by tokio's clock.
///
/// Under a paused tokio runtime the dates it hands out move exactly as far as
/// the virtual time does, so stamped dates line up with fired timers.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    anchor: DateTime<Utc>,
    started: tokio::time::Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    pub fn anchored_at(anchor: DateTime<Utc>) -> Self {
        Self {
            anchor,
            started: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = Duration::from_std(self.started.elapsed()).unwrap_or(Duration::zero());
        self.anchor + elapsed
    }
}

/// Settable clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct MockClock {
    millis: Arc<AtomicI64>,
}

impl MockClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.millis.store(at.timestamp_millis(), Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Default for MockClock {
    /// 2024-01-01 00:00:00 UTC
    fn default() -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(1_704_067_200_000)),
        }
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.millis.load(Ordering::SeqCst))
            .single()
            .unwrap_or_default()
    }
}
