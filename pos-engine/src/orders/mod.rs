//! Order lifecycle management
//!
//! This module owns the order/table state machine and billing:
//! - `manager`: lifecycle operations (create, mutate, discount, pay)
//! - `store`: session-lifetime order collection (active + history)
//! - `billing`: pure bill calculator (subtotal/discount/tax/total)
//! - `archive` / `archive_worker`: durable record of paid orders,
//!   driven off the event broadcast so payment never blocks on disk

pub mod archive;
pub mod archive_worker;
pub mod billing;
pub mod manager;
pub mod store;

// Re-exports
pub use archive::{PersistenceSink, RedbArchive};
pub use archive_worker::ArchiveWorker;
pub use manager::{OrderManager, Session};
pub use store::OrderStore;
