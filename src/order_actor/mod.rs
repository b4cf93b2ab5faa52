//! Order entity: the status state machine and the actions that drive it.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
