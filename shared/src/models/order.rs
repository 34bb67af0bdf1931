//! Order and order item models

use crate::models::MenuItem;
use crate::util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status
///
/// `Paid` is terminal: once an order is paid its items and discount are
/// frozen. Intermediate kitchen statuses (Preparing/Ready) are reached only
/// through an explicit status-setting operation, never driven by item
/// mutations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
    Paid,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Preparing => write!(f, "PREPARING"),
            OrderStatus::Ready => write!(f, "READY"),
            OrderStatus::Served => write!(f, "SERVED"),
            OrderStatus::Paid => write!(f, "PAID"),
        }
    }
}

/// Discount descriptor. Applying a discount replaces any existing one;
/// discounts never stack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Discount {
    /// Percentage of the subtotal, 0-100
    Percentage(Decimal),
    /// Fixed currency amount, clamped to the subtotal at billing time
    FixedAmount(Decimal),
}

/// One line within an order: a menu item reference with a name/price
/// snapshot captured at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Unique for the process lifetime
    pub id: String,
    /// Originating catalog ID, for traceability only; never re-resolved
    pub menu_item_id: String,
    pub name: String,
    pub price: Decimal,
    /// Always >= 1; removal deletes the item rather than storing 0
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderItem {
    /// Snapshot a menu item into a new line item
    pub fn from_menu_item(menu_item: &MenuItem, quantity: u32, notes: Option<String>) -> Self {
        Self {
            id: util::new_id(),
            menu_item_id: menu_item.id.clone(),
            name: menu_item.name.clone(),
            price: menu_item.price,
            quantity,
            notes,
        }
    }
}

/// A customer's in-progress or completed purchase tied to one table and
/// one server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub table_number: u32,
    pub server_name: String,
    /// Insertion order is meaningful for receipt rendering
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new empty pending order for a table
    pub fn new(table_number: u32, server_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: util::new_id(),
            table_number,
            server_name: server_name.into(),
            items: Vec::new(),
            status: OrderStatus::Pending,
            discount: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn item(&self, item_id: &str) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
