//! redb-backed archive of paid orders
//!
//! # Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `paid_orders` | `order_id` | JSON-serialized [`PaidOrderRecord`] |
//!
//! redb commits with `Durability::Immediate`, so a record is on disk the
//! moment `commit()` returns. In-memory state is authoritative during
//! service; the archive is the permanent record that survives restarts.

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use shared::models::{BillTotals, Order};
use shared::{PosError, PosResult};

/// Paid orders: key = order_id, value = JSON-serialized PaidOrderRecord
const PAID_ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("paid_orders");

/// Everything the receipt showed, frozen at payment time
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PaidOrderRecord {
    pub order: Order,
    pub totals: BillTotals,
    pub archived_at: i64,
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ArchiveResult<T> = Result<T, ArchiveError>;

impl From<ArchiveError> for PosError {
    fn from(err: ArchiveError) -> Self {
        PosError::Persistence(err.to_string())
    }
}

/// Destination for settled orders
#[async_trait]
pub trait PersistenceSink: Send + Sync {
    async fn record_paid_order(&self, order: &Order, totals: &BillTotals) -> PosResult<()>;
}

/// Durable paid-order archive backed by redb
#[derive(Clone)]
pub struct RedbArchive {
    db: Arc<Database>,
}

impl RedbArchive {
    /// Open or create the archive at the given path
    pub fn open(path: impl AsRef<Path>) -> ArchiveResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory archive (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> ArchiveResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> ArchiveResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PAID_ORDERS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Persist one settled order. Re-archiving the same order id
    /// overwrites the previous record, so retries are idempotent.
    pub fn store(&self, record: &PaidOrderRecord) -> ArchiveResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(PAID_ORDERS_TABLE)?;
            let value = serde_json::to_vec(record)?;
            table.insert(record.order.id.as_str(), value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    pub fn get(&self, order_id: &str) -> ArchiveResult<Option<PaidOrderRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PAID_ORDERS_TABLE)?;

        match table.get(order_id)? {
            Some(value) => {
                let record: PaidOrderRecord = serde_json::from_slice(value.value())?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// All archived orders (redb iterates in key order)
    pub fn list(&self) -> ArchiveResult<Vec<PaidOrderRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PAID_ORDERS_TABLE)?;

        let mut records = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            let record: PaidOrderRecord = serde_json::from_slice(value.value())?;
            records.push(record);
        }
        Ok(records)
    }

    pub fn count(&self) -> ArchiveResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PAID_ORDERS_TABLE)?;
        Ok(table.len()?)
    }
}

#[async_trait]
impl PersistenceSink for RedbArchive {
    async fn record_paid_order(&self, order: &Order, totals: &BillTotals) -> PosResult<()> {
        let record = PaidOrderRecord {
            order: order.clone(),
            totals: totals.clone(),
            archived_at: shared::util::now_millis(),
        };
        self.store(&record)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::OrderStatus;

    fn paid_order(table: u32) -> (Order, BillTotals) {
        let mut order = Order::new(table, "Alice".to_string());
        order.status = OrderStatus::Paid;
        let totals = BillTotals {
            subtotal: Decimal::new(30_97, 2),
            discount_amount: Decimal::ZERO,
            tax: Decimal::new(2_56, 2),
            total: Decimal::new(33_53, 2),
        };
        (order, totals)
    }

    #[tokio::test]
    async fn test_record_and_fetch() {
        let archive = RedbArchive::open_in_memory().unwrap();
        let (order, totals) = paid_order(5);

        archive.record_paid_order(&order, &totals).await.unwrap();

        let record = archive.get(&order.id).unwrap().unwrap();
        assert_eq!(record.order.table_number, 5);
        assert_eq!(record.totals.total, Decimal::new(33_53, 2));
        assert_eq!(archive.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rearchive_is_idempotent() {
        let archive = RedbArchive::open_in_memory().unwrap();
        let (order, totals) = paid_order(5);

        archive.record_paid_order(&order, &totals).await.unwrap();
        archive.record_paid_order(&order, &totals).await.unwrap();

        assert_eq!(archive.count().unwrap(), 1);
    }

    #[test]
    fn test_get_missing_order() {
        let archive = RedbArchive::open_in_memory().unwrap();
        assert!(archive.get("no-such-order").unwrap().is_none());
    }

    #[test]
    fn test_list_returns_all_records() {
        let archive = RedbArchive::open_in_memory().unwrap();
        for table in [1u32, 2, 3] {
            let (order, totals) = paid_order(table);
            archive
                .store(&PaidOrderRecord {
                    order,
                    totals,
                    archived_at: shared::util::now_millis(),
                })
                .unwrap();
        }
        assert_eq!(archive.list().unwrap().len(), 3);
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paid_orders.redb");
        let (order, totals) = paid_order(5);
        let order_id = order.id.clone();

        {
            let archive = RedbArchive::open(&path).unwrap();
            archive
                .store(&PaidOrderRecord {
                    order,
                    totals,
                    archived_at: shared::util::now_millis(),
                })
                .unwrap();
        }

        let reopened = RedbArchive::open(&path).unwrap();
        let record = reopened.get(&order_id).unwrap().unwrap();
        assert_eq!(record.order.table_number, 5);
        assert_eq!(record.order.status, OrderStatus::Paid);
    }
}
