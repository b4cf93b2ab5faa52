//! Deferred lifecycle transitions.
//!
//! Creation calls only *schedule* a [`Transition`]; the timer hands it to the
//! [`LifecycleDriver`](crate::app_system::LifecycleDriver) when it fires. Tests
//! drive the timers with tokio's paused clock instead of waiting on the wall clock.

use std::fmt;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

/// A state change that happens on its own after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Pending → Accepted (farmer acceptance).
    AcceptOrder(String),
    /// Awaiting Pickup → In Transit.
    DispatchShipment(String),
    /// In Transit → Delivered, and the bound order with it.
    DeliverShipment(String),
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::AcceptOrder(id) => write!(f, "accept {}", id),
            Transition::DispatchShipment(id) => write!(f, "dispatch {}", id),
            Transition::DeliverShipment(id) => write!(f, "deliver {}", id),
        }
    }
}

/// Handle for scheduling transitions. Cheap to clone.
#[derive(Clone)]
pub struct Scheduler {
    sender: mpsc::UnboundedSender<Transition>,
    shutdown: watch::Receiver<bool>,
}

/// Owner side of a scheduler: stops all pending timers when told to.
pub struct SchedulerShutdown(watch::Sender<bool>);

impl SchedulerShutdown {
    pub fn trigger(&self) {
        let _ = self.0.send(true);
    }
}

impl Scheduler {
    /// Creates a scheduler and the receiver its fired transitions arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Transition>, SchedulerShutdown) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);
        let scheduler = Self {
            sender,
            shutdown: stop_rx,
        };
        (scheduler, receiver, SchedulerShutdown(stop_tx))
    }

    /// Fires `transition` once `delay` has elapsed, unless the scheduler shuts down first.
    #[instrument(skip(self, transition), fields(transition = %transition))]
    pub fn schedule(&self, delay: Duration, transition: Transition) {
        debug!(?delay, "Transition scheduled");
        let sender = self.sender.clone();
        let shutdown = self.shutdown.clone();
        if *shutdown.borrow() {
            debug!("Scheduler stopped, transition dropped");
            return;
        }
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    if sender.send(transition).is_err() {
                        debug!("Driver gone, transition dropped");
                    }
                }
                _ = stopped(shutdown) => {}
            }
        });
    }
}

impl Scheduler {
    /// Resolves once the owner triggers shutdown.
    pub async fn stopped(&self) {
        stopped(self.shutdown.clone()).await
    }
}

/// Resolves once shutdown is triggered. Never resolves if the owner side is
/// dropped without triggering.
async fn stopped(mut shutdown: watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
