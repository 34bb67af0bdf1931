//! In-memory order store
//!
//! Owns every order created during the service session, paid or not.
//! Iteration order is insertion order so order lists render stably.

use shared::models::{Order, OrderStatus};
use shared::{PosError, PosResult};

/// Canonical collection of session orders
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly created order
    pub fn insert(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn get(&self, order_id: &str) -> PosResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| PosError::OrderNotFound(order_id.to_string()))
    }

    pub fn get_mut(&mut self, order_id: &str) -> PosResult<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| PosError::OrderNotFound(order_id.to_string()))
    }

    /// The unpaid order currently on a table, if any
    pub fn active_order_for_table(&self, table_number: u32) -> Option<&Order> {
        self.orders
            .iter()
            .find(|o| o.table_number == table_number && !o.status.is_terminal())
    }

    /// All unpaid orders, in creation order
    pub fn active(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| !o.status.is_terminal())
            .collect()
    }

    /// Paid orders, in creation order
    pub fn history(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Paid)
            .collect()
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(table: u32) -> Order {
        Order::new(table, "Alice".to_string())
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = OrderStore::new();
        let o = order(5);
        let id = o.id.clone();
        store.insert(o);

        assert_eq!(store.get(&id).unwrap().table_number, 5);
        assert_eq!(
            store.get("missing").unwrap_err(),
            PosError::OrderNotFound("missing".to_string())
        );
    }

    #[test]
    fn test_active_order_for_table_skips_paid() {
        let mut store = OrderStore::new();
        let mut paid = order(5);
        paid.status = OrderStatus::Paid;
        let paid_id = paid.id.clone();
        store.insert(paid);

        // A paid order no longer occupies the table logically
        assert!(store.active_order_for_table(5).is_none());

        let fresh = order(5);
        let fresh_id = fresh.id.clone();
        store.insert(fresh);
        assert_eq!(store.active_order_for_table(5).unwrap().id, fresh_id);
        assert_ne!(fresh_id, paid_id);
    }

    #[test]
    fn test_active_and_history_partition() {
        let mut store = OrderStore::new();
        store.insert(order(1));
        let mut done = order(2);
        done.status = OrderStatus::Paid;
        store.insert(done);
        store.insert(order(3));

        let active: Vec<u32> = store.active().iter().map(|o| o.table_number).collect();
        assert_eq!(active, vec![1, 3]);
        let history: Vec<u32> = store.history().iter().map(|o| o.table_number).collect();
        assert_eq!(history, vec![2]);
        assert_eq!(store.len(), 3);
    }
}
