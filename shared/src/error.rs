//! Error taxonomy for the POS order core
//!
//! Every error here is a local, recoverable condition: the cashier either
//! re-acts (select a table first, pick an existing item) or the failure is
//! logged for operational follow-up. Nothing is fatal to the process.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PosError {
    /// A mutation was attempted with no order selected.
    /// Surfaced to the user as "select a table first".
    #[error("No active order selected")]
    NoActiveOrder,

    /// The operation is not valid for the current order/table state,
    /// e.g. opening an occupied table or mutating a paid order.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Table not found: {0}")]
    TableNotFound(u32),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order item not found: {0}")]
    ItemNotFound(String),

    /// Caller supplied a quantity that can never be stored (items always
    /// carry quantity >= 1; removal deletes the item).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("Invalid discount: {0}")]
    InvalidDiscount(String),

    /// Archive failure at payment time. Logged, non-fatal: the in-memory
    /// payment transition is already complete and is never unwound.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

pub type PosResult<T> = Result<T, PosError>;
