//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entry. Immutable from the order engine's point of view;
/// owned by the catalog provider. Orders snapshot name/price at add time,
/// so later catalog edits never retroactively alter a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Stable catalog ID
    pub id: String,
    pub name: String,
    /// Unit price, non-negative
    pub price: Decimal,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
