//! User directory: registration and lookups. Users are never mutated by the order lifecycle.

pub mod entity;
pub mod error;

pub use error::*;
