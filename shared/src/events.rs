//! Broadcast events surfaced to UI/telemetry collaborators
//!
//! Informational, not contractual: each variant carries enough context
//! (table number, item, amounts) for a notification layer to render a
//! message without another store lookup.

use crate::models::{BillTotals, Discount, Order};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosEvent {
    OrderCreated {
        order_id: String,
        table_number: u32,
        server_name: String,
    },
    ItemAdded {
        order_id: String,
        table_number: u32,
        item_id: String,
        name: String,
        quantity: u32,
        price: Decimal,
    },
    ItemRemoved {
        order_id: String,
        table_number: u32,
        item_id: String,
        name: String,
    },
    DiscountApplied {
        order_id: String,
        table_number: u32,
        discount: Discount,
    },
    OrderServed {
        order_id: String,
        table_number: u32,
    },
    /// Carries the full paid order plus computed totals so the archive
    /// worker can persist without reaching back into the store.
    PaymentCompleted {
        order: Order,
        totals: BillTotals,
    },
}

impl PosEvent {
    /// Event type tag, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            PosEvent::OrderCreated { .. } => "ORDER_CREATED",
            PosEvent::ItemAdded { .. } => "ITEM_ADDED",
            PosEvent::ItemRemoved { .. } => "ITEM_REMOVED",
            PosEvent::DiscountApplied { .. } => "DISCOUNT_APPLIED",
            PosEvent::OrderServed { .. } => "ORDER_SERVED",
            PosEvent::PaymentCompleted { .. } => "PAYMENT_COMPLETED",
        }
    }
}
