//! Mesa POS engine - single-restaurant order/table core
//!
//! # Architecture
//!
//! The engine keeps one authoritative in-memory copy of tables and orders
//! per session and moves them through the service lifecycle
//! (create -> fill -> discount -> pay -> free table):
//!
//! - **Catalog** (`catalog`): menu items consumed by the cashier UI;
//!   prices are snapshotted into orders at add time
//! - **Tables** (`tables`): fixed table registry, the anchor of the
//!   lifecycle (occupy on create, release on payment)
//! - **Orders** (`orders`): lifecycle manager, order store, pure bill
//!   calculator, and the redb-backed paid-order archive
//! - **Core** (`core`): environment-driven configuration
//!
//! # Module structure
//!
//! ```text
//! pos-engine/src/
//! ├── core/          # configuration
//! ├── catalog.rs     # catalog provider
//! ├── tables.rs      # table registry
//! ├── orders/        # lifecycle manager, billing, store, archive
//! └── utils/         # logging
//! ```

pub mod catalog;
pub mod core;
pub mod orders;
pub mod tables;
pub mod utils;

// Re-export public types
pub use catalog::{CatalogProvider, StaticCatalog};
pub use core::Config;
pub use orders::{
    ArchiveWorker, OrderManager, OrderStore, PersistenceSink, RedbArchive, Session,
};
pub use tables::TableRegistry;
pub use utils::logger::init_logger;
