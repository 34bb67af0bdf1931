//! Order lifecycle manager
//!
//! Single-writer facade over the table registry and order store. Every
//! mutation goes through here so the occupancy invariant (a table is
//! occupied iff it carries an unpaid order) can never be violated by a
//! caller holding half the state.
//!
//! Mutations that touch "the current order" take an explicit [`Session`]
//! cursor rather than hidden ambient state, so two terminals can drive
//! one manager without clobbering each other's selection.

use rust_decimal::Decimal;
use tokio::sync::broadcast;

use shared::events::PosEvent;
use shared::models::{BillTotals, Discount, MenuItem, Order, OrderItem, OrderStatus, Table};
use shared::{PosError, PosResult};

use crate::orders::billing;
use crate::orders::store::OrderStore;
use crate::tables::TableRegistry;

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Per-terminal cursor: which order and table the operator is working on
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub active_order: Option<String>,
    pub active_table: Option<u32>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.active_order = None;
        self.active_table = None;
    }
}

/// Order/table lifecycle coordinator
pub struct OrderManager {
    store: OrderStore,
    tables: TableRegistry,
    tax_rate: Decimal,
    event_tx: broadcast::Sender<PosEvent>,
}

impl OrderManager {
    pub fn new(tables: TableRegistry, tax_rate: Decimal) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store: OrderStore::new(),
            tables,
            tax_rate,
            event_tx,
        }
    }

    /// Subscribe to lifecycle events. Events are emitted after the
    /// mutation has been applied, never before.
    pub fn subscribe(&self) -> broadcast::Receiver<PosEvent> {
        self.event_tx.subscribe()
    }

    // ========== Lifecycle mutations ==========

    /// Open a new order on a free table and select it.
    ///
    /// Fails with `InvalidState` when the table already has an order or is
    /// reserved; the existing order is never replaced.
    pub fn create_order(
        &mut self,
        session: &mut Session,
        table_number: u32,
        server_name: &str,
    ) -> PosResult<String> {
        let order = Order::new(table_number, server_name.to_string());
        self.tables.occupy(table_number, &order.id)?;

        let order_id = order.id.clone();
        self.store.insert(order);
        session.active_order = Some(order_id.clone());
        session.active_table = Some(table_number);

        let _ = self.event_tx.send(PosEvent::OrderCreated {
            order_id: order_id.clone(),
            table_number,
            server_name: server_name.to_string(),
        });
        Ok(order_id)
    }

    /// Point the session at an existing unpaid order (e.g. reopening a
    /// table's ticket on another terminal)
    pub fn select_order(&self, session: &mut Session, order_id: &str) -> PosResult<()> {
        let order = self.store.get(order_id)?;
        if order.status.is_terminal() {
            return Err(PosError::InvalidState(format!(
                "Order {} is already paid",
                order_id
            )));
        }
        session.active_order = Some(order.id.clone());
        session.active_table = Some(order.table_number);
        Ok(())
    }

    /// Add a menu item to the active order. Every call appends its own
    /// line with a fresh id, even for a menu item already on the order,
    /// so a later removal takes back exactly what one call added. Name
    /// and price are snapshotted from the catalog at add time.
    pub fn add_item(
        &mut self,
        session: &Session,
        menu_item: &MenuItem,
        quantity: u32,
        notes: Option<String>,
    ) -> PosResult<()> {
        if quantity == 0 {
            return Err(PosError::InvalidQuantity(0));
        }
        let order = self.active_order_mut(session)?;

        let line = OrderItem::from_menu_item(menu_item, quantity, notes);
        let (item_id, name, price) = (line.id.clone(), line.name.clone(), line.price);
        order.items.push(line);
        order.touch();
        let (order_id, table_number) = (order.id.clone(), order.table_number);

        let _ = self.event_tx.send(PosEvent::ItemAdded {
            order_id,
            table_number,
            item_id,
            name,
            quantity,
            price,
        });
        Ok(())
    }

    /// Set a line's quantity. A quantity of zero (or below, at the API
    /// boundary) removes the line instead of leaving a zero-quantity row.
    pub fn update_item_quantity(
        &mut self,
        session: &Session,
        item_id: &str,
        quantity: i64,
    ) -> PosResult<()> {
        if quantity <= 0 {
            return self.remove_item(session, item_id);
        }
        let quantity = u32::try_from(quantity).map_err(|_| PosError::InvalidQuantity(quantity))?;
        let order = self.active_order_mut(session)?;
        let line = order
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| PosError::ItemNotFound(item_id.to_string()))?;
        line.quantity = quantity;
        order.touch();
        Ok(())
    }

    /// Remove a line from the active order. Removing an id that is not on
    /// the order, or removing with no order selected, is a no-op, matching
    /// repeated taps on a stale UI row.
    pub fn remove_item(&mut self, session: &Session, item_id: &str) -> PosResult<()> {
        if session.active_order.is_none() {
            return Ok(());
        }
        let order = self.active_order_mut(session)?;
        let Some(pos) = order.items.iter().position(|i| i.id == item_id) else {
            return Ok(());
        };
        let removed = order.items.remove(pos);
        order.touch();
        let (order_id, table_number) = (order.id.clone(), order.table_number);

        let _ = self.event_tx.send(PosEvent::ItemRemoved {
            order_id,
            table_number,
            item_id: removed.id,
            name: removed.name,
        });
        Ok(())
    }

    /// Apply a discount to the active order, replacing any existing one.
    /// Discounts never stack.
    pub fn apply_discount(&mut self, session: &Session, discount: Discount) -> PosResult<()> {
        match &discount {
            Discount::Percentage(p) => {
                if *p < Decimal::ZERO || *p > Decimal::ONE_HUNDRED {
                    return Err(PosError::InvalidDiscount(format!(
                        "percentage must be between 0 and 100, got {}",
                        p
                    )));
                }
            }
            Discount::FixedAmount(a) => {
                if *a < Decimal::ZERO {
                    return Err(PosError::InvalidDiscount(format!(
                        "fixed amount must not be negative, got {}",
                        a
                    )));
                }
            }
        }
        let order = self.active_order_mut(session)?;
        order.discount = Some(discount.clone());
        order.touch();
        let (order_id, table_number) = (order.id.clone(), order.table_number);

        let _ = self.event_tx.send(PosEvent::DiscountApplied {
            order_id,
            table_number,
            discount,
        });
        Ok(())
    }

    /// Advance an order through the kitchen states. `Paid` is reserved for
    /// [`pay_order`]: it is rejected both as a target and as a source.
    pub fn set_status(&mut self, order_id: &str, status: OrderStatus) -> PosResult<()> {
        if status == OrderStatus::Paid {
            return Err(PosError::InvalidState(
                "payment must go through pay_order".to_string(),
            ));
        }
        let order = self.store.get_mut(order_id)?;
        if order.status.is_terminal() {
            return Err(PosError::InvalidState(format!(
                "Order {} is already paid",
                order_id
            )));
        }
        order.status = status;
        order.touch();
        Ok(())
    }

    /// Mark the active order served (kitchen done, food on the table)
    pub fn complete_order(&mut self, session: &Session) -> PosResult<()> {
        let order = self.active_order_mut(session)?;
        order.status = OrderStatus::Served;
        order.touch();
        let (order_id, table_number) = (order.id.clone(), order.table_number);

        let _ = self.event_tx.send(PosEvent::OrderServed {
            order_id,
            table_number,
        });
        Ok(())
    }

    /// Settle the active order: compute the final bill, mark it paid, free
    /// its table, and clear the session cursor. Returns the totals for the
    /// receipt.
    pub fn pay_order(&mut self, session: &mut Session) -> PosResult<BillTotals> {
        let tax_rate = self.tax_rate;
        let order = self.active_order_mut(session)?;

        let totals = billing::calculate_bill(&order.items, order.discount.as_ref(), tax_rate);
        order.status = OrderStatus::Paid;
        order.touch();
        let snapshot = order.clone();

        self.tables.release(snapshot.table_number)?;
        session.clear();

        let _ = self.event_tx.send(PosEvent::PaymentCompleted {
            order: snapshot,
            totals: totals.clone(),
        });
        Ok(totals)
    }

    // ========== Queries ==========

    pub fn order(&self, order_id: &str) -> PosResult<&Order> {
        self.store.get(order_id)
    }

    pub fn active_orders(&self) -> Vec<&Order> {
        self.store.active()
    }

    pub fn history(&self) -> Vec<&Order> {
        self.store.history()
    }

    pub fn tables(&self) -> &[Table] {
        self.tables.tables()
    }

    pub fn table(&self, number: u32) -> PosResult<&Table> {
        self.tables.get(number)
    }

    pub fn reserve_table(&mut self, number: u32) -> PosResult<()> {
        self.tables.reserve(number)
    }

    pub fn unreserve_table(&mut self, number: u32) -> PosResult<()> {
        self.tables.unreserve(number)
    }

    /// Current bill for any order, paid or not
    pub fn bill_for(&self, order_id: &str) -> PosResult<BillTotals> {
        let order = self.store.get(order_id)?;
        Ok(billing::calculate_bill(
            &order.items,
            order.discount.as_ref(),
            self.tax_rate,
        ))
    }

    // ========== Internal ==========

    /// Resolve the session's active order for mutation, rejecting paid
    /// orders so a settled ticket can never be edited
    fn active_order_mut(&mut self, session: &Session) -> PosResult<&mut Order> {
        let order_id = session.active_order.as_deref().ok_or(PosError::NoActiveOrder)?;
        let order = self.store.get_mut(order_id)?;
        if order.status.is_terminal() {
            return Err(PosError::InvalidState(format!(
                "Order {} is already paid",
                order.id
            )));
        }
        Ok(order)
    }
}
