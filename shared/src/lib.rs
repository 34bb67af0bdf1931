//! Shared types for the Mesa POS core
//!
//! Common types used by the engine and any front end: data models,
//! error types, and broadcast event payloads.

pub mod error;
pub mod events;
pub mod models;
pub mod util;

// Re-exports
pub use error::{PosError, PosResult};
pub use events::PosEvent;
pub use models::{
    BillTotals, Discount, MenuItem, Order, OrderItem, OrderStatus, Table, TableStatus,
};
pub use serde::{Deserialize, Serialize};
