//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table occupancy status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableStatus::Available => write!(f, "AVAILABLE"),
            TableStatus::Occupied => write!(f, "OCCUPIED"),
            TableStatus::Reserved => write!(f, "RESERVED"),
        }
    }
}

/// Physical dining table.
///
/// Invariant: `status == Occupied` iff `order_id` is set, and
/// `status == Available` iff it is not. The table holds the active order's
/// *id* only; the order store owns the canonical order, so the two views
/// can never disagree about an order's items or status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub id: u32,
    /// Display identifier, unique
    pub number: u32,
    pub seats: u32,
    pub status: TableStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl Table {
    pub fn new(id: u32, number: u32, seats: u32) -> Self {
        Self {
            id,
            number,
            seats,
            status: TableStatus::Available,
            order_id: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }
}
