//! Demo binary: runs one table through the full lifecycle
//!
//! Seeds the demo catalog and floor plan, opens an order, rings up a few
//! items, settles the bill, and leaves the paid order in the redb archive
//! under `DATA_DIR`.

use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;

use pos_engine::{
    ArchiveWorker, CatalogProvider, Config, OrderManager, RedbArchive, Session, StaticCatalog,
    TableRegistry, init_logger,
};
use shared::models::Discount;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env();
    init_logger(&config.log_level);

    tracing::info!(
        data_dir = %config.data_dir,
        tax_rate = %config.tax_rate,
        "Starting POS engine demo"
    );

    std::fs::create_dir_all(&config.data_dir)?;
    let archive = Arc::new(RedbArchive::open(config.archive_path())?);

    let catalog = StaticCatalog::demo();
    let mut manager = OrderManager::new(TableRegistry::seed(config.table_count), config.tax_rate);

    let worker = ArchiveWorker::new(archive.clone());
    let worker_handle = tokio::spawn(worker.run(manager.subscribe()));

    // One full table turn: seat, order, serve, discount, settle
    let mut session = Session::new();
    let order_id = manager.create_order(&mut session, 5, "Alice")?;
    tracing::info!(%order_id, table = 5, "Order opened");

    let burger = catalog
        .find("1")
        .ok_or_else(|| anyhow::anyhow!("demo catalog missing item 1"))?;
    let fries = catalog
        .find("4")
        .ok_or_else(|| anyhow::anyhow!("demo catalog missing item 4"))?;
    manager.add_item(&session, &burger, 2, None)?;
    manager.add_item(&session, &fries, 1, Some("extra crispy".to_string()))?;

    manager.complete_order(&session)?;
    manager.apply_discount(&session, Discount::Percentage(10.into()))?;

    let totals = manager.pay_order(&mut session)?;
    tracing::info!(
        subtotal = %totals.subtotal,
        discount = %totals.discount_amount,
        tax = %totals.tax,
        total = %totals.total,
        "Order settled"
    );

    // Dropping the manager closes the event channel and stops the worker
    drop(manager);
    worker_handle.await?;

    let archived = archive.count()?;
    tracing::info!(archived, "Demo complete");
    Ok(())
}
