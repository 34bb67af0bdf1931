//! Background worker that drains payment events into the archive
//!
//! Runs on its own task so a slow disk never blocks the cashier path.
//! A failed write is logged and dropped; the in-memory order store still
//! holds the paid order, so the loss is bounded to the durable copy.

use std::sync::Arc;

use tokio::sync::broadcast;

use shared::events::PosEvent;

use crate::orders::archive::PersistenceSink;

pub struct ArchiveWorker {
    sink: Arc<dyn PersistenceSink>,
}

impl ArchiveWorker {
    pub fn new(sink: Arc<dyn PersistenceSink>) -> Self {
        Self { sink }
    }

    /// Consume events until the sender is dropped
    pub async fn run(self, mut rx: broadcast::Receiver<PosEvent>) {
        tracing::info!("Archive worker started");
        loop {
            match rx.recv().await {
                Ok(PosEvent::PaymentCompleted { order, totals }) => {
                    if let Err(e) = self.sink.record_paid_order(&order, &totals).await {
                        tracing::error!(
                            order_id = %order.id,
                            table_number = order.table_number,
                            error = %e,
                            "Failed to archive paid order"
                        );
                    } else {
                        tracing::debug!(order_id = %order.id, "Paid order archived");
                    }
                }
                Ok(event) => {
                    tracing::trace!(kind = event.kind(), "Event not archivable, skipped");
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Archive worker lagged, events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event channel closed, archive worker stopping");
                    break;
                }
            }
        }
    }
}
