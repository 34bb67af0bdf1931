//! Computed bill totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals derived from an order's items and discount.
///
/// `total = subtotal - discount_amount + tax`, every figure rounded to
/// 2 decimal places. Produced by the bill calculator; consumed by receipt
/// rendering and the paid-order archive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct BillTotals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl BillTotals {
    /// Subtotal minus discount: the base tax is computed against
    pub fn taxable_base(&self) -> Decimal {
        self.subtotal - self.discount_amount
    }
}
