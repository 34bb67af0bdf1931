//! Data models for the POS order core

pub mod bill;
pub mod menu_item;
pub mod order;
pub mod table;

// Re-exports
pub use bill::BillTotals;
pub use menu_item::MenuItem;
pub use order::{Discount, Order, OrderItem, OrderStatus};
pub use table::{Table, TableStatus};
