use chrono::{DateTime, Utc};
use std::fmt;

/// Order status. Moves forward along Pending → Accepted → Shipped → Delivered;
/// Cancelled is terminal and reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Accepted,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether `self → next` is a legal step of the lifecycle.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (Pending, Accepted) | (Accepted, Shipped) | (Shipped, Delivered) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// A buyer's purchase of a quantity of one product.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub quantity: u32,
    /// Snapshot of quantity × unit price at order time.
    pub total_price: f64,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub shipping_id: Option<String>,
}

/// Payload for creating a new order. Always starts out Pending.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub product_id: String,
    pub product_name: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub quantity: u32,
    pub total_price: f64,
    pub order_date: DateTime<Utc>,
}

/// Price of `quantity` kg at `unit_price`, rounded to cents.
pub fn order_total(quantity: u32, unit_price: f64) -> f64 {
    (f64::from(quantity) * unit_price * 100.0).round() / 100.0
}
