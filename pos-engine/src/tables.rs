//! Table registry - the anchor of the order lifecycle
//!
//! Tables are seeded once at startup and never destroyed. A table becomes
//! `Occupied` only when an order is created on it and returns to
//! `Available` only when that order is paid; `Reserved` is a manual
//! front-of-house marker on a free table.

use shared::models::{Table, TableStatus};
use shared::{PosError, PosResult};

/// Seat counts for the default 10-table floor plan
const DEFAULT_SEAT_PLAN: [u32; 10] = [2, 2, 4, 4, 6, 6, 8, 8, 2, 4];

/// Fixed set of physical tables with their occupancy state
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: Vec<Table>,
}

impl TableRegistry {
    /// Seed tables numbered 1..=count, cycling through the default seat
    /// plan when count exceeds it
    pub fn seed(count: u32) -> Self {
        let tables = (1..=count)
            .map(|n| {
                let seats = DEFAULT_SEAT_PLAN[((n - 1) as usize) % DEFAULT_SEAT_PLAN.len()];
                Table::new(n, n, seats)
            })
            .collect();
        Self { tables }
    }

    /// Seed from an explicit (number, seats) layout
    pub fn with_layout(layout: &[(u32, u32)]) -> Self {
        let tables = layout
            .iter()
            .enumerate()
            .map(|(i, &(number, seats))| Table::new(i as u32 + 1, number, seats))
            .collect();
        Self { tables }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn get(&self, number: u32) -> PosResult<&Table> {
        self.tables
            .iter()
            .find(|t| t.number == number)
            .ok_or(PosError::TableNotFound(number))
    }

    fn get_mut(&mut self, number: u32) -> PosResult<&mut Table> {
        self.tables
            .iter_mut()
            .find(|t| t.number == number)
            .ok_or(PosError::TableNotFound(number))
    }

    /// Mark a table occupied by an order. Fails when the table is not
    /// available: an occupied table is never silently overwritten, and a
    /// reserved one must be unreserved first.
    pub fn occupy(&mut self, number: u32, order_id: &str) -> PosResult<()> {
        let table = self.get_mut(number)?;
        if !table.is_available() {
            return Err(PosError::InvalidState(format!(
                "Table {} is already {}",
                number, table.status
            )));
        }
        table.status = TableStatus::Occupied;
        table.order_id = Some(order_id.to_string());
        Ok(())
    }

    /// Free a table after payment, clearing its order reference
    pub fn release(&mut self, number: u32) -> PosResult<()> {
        let table = self.get_mut(number)?;
        table.status = TableStatus::Available;
        table.order_id = None;
        Ok(())
    }

    /// Mark a free table as reserved
    pub fn reserve(&mut self, number: u32) -> PosResult<()> {
        let table = self.get_mut(number)?;
        if table.status != TableStatus::Available {
            return Err(PosError::InvalidState(format!(
                "Table {} cannot be reserved while {}",
                number, table.status
            )));
        }
        table.status = TableStatus::Reserved;
        Ok(())
    }

    /// Clear a reservation
    pub fn unreserve(&mut self, number: u32) -> PosResult<()> {
        let table = self.get_mut(number)?;
        if table.status != TableStatus::Reserved {
            return Err(PosError::InvalidState(format!(
                "Table {} is not reserved",
                number
            )));
        }
        table.status = TableStatus::Available;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_default_plan() {
        let registry = TableRegistry::seed(10);
        assert_eq!(registry.tables().len(), 10);
        assert_eq!(registry.get(1).unwrap().seats, 2);
        assert_eq!(registry.get(5).unwrap().seats, 6);
        assert_eq!(registry.get(10).unwrap().seats, 4);
        assert!(registry.tables().iter().all(|t| t.is_available()));
    }

    #[test]
    fn test_with_layout_uses_explicit_numbers() {
        let registry = TableRegistry::with_layout(&[(12, 2), (30, 8), (31, 6)]);
        assert_eq!(registry.tables().len(), 3);
        assert_eq!(registry.get(30).unwrap().seats, 8);
        // Only the listed numbers exist
        assert_eq!(registry.get(1).unwrap_err(), PosError::TableNotFound(1));
    }

    #[test]
    fn test_occupy_sets_status_and_reference() {
        let mut registry = TableRegistry::seed(10);
        registry.occupy(3, "order-1").unwrap();

        let table = registry.get(3).unwrap();
        assert_eq!(table.status, TableStatus::Occupied);
        assert_eq!(table.order_id.as_deref(), Some("order-1"));
    }

    #[test]
    fn test_occupy_occupied_table_is_rejected() {
        let mut registry = TableRegistry::seed(10);
        registry.occupy(3, "order-1").unwrap();

        let err = registry.occupy(3, "order-2").unwrap_err();
        assert!(matches!(err, PosError::InvalidState(_)));
        // The original order reference is untouched
        assert_eq!(registry.get(3).unwrap().order_id.as_deref(), Some("order-1"));
    }

    #[test]
    fn test_release_restores_invariant() {
        let mut registry = TableRegistry::seed(10);
        registry.occupy(3, "order-1").unwrap();
        registry.release(3).unwrap();

        let table = registry.get(3).unwrap();
        assert_eq!(table.status, TableStatus::Available);
        assert!(table.order_id.is_none());
    }

    #[test]
    fn test_unknown_table_number() {
        let mut registry = TableRegistry::seed(10);
        assert_eq!(registry.get(99).unwrap_err(), PosError::TableNotFound(99));
        assert_eq!(
            registry.occupy(99, "order-1").unwrap_err(),
            PosError::TableNotFound(99)
        );
    }

    #[test]
    fn test_reserve_and_unreserve() {
        let mut registry = TableRegistry::seed(10);
        registry.reserve(2).unwrap();
        assert_eq!(registry.get(2).unwrap().status, TableStatus::Reserved);

        // A reserved table cannot be reserved again
        assert!(matches!(
            registry.reserve(2).unwrap_err(),
            PosError::InvalidState(_)
        ));

        registry.unreserve(2).unwrap();
        assert!(registry.get(2).unwrap().is_available());
    }

    #[test]
    fn test_occupy_reserved_table_is_rejected() {
        let mut registry = TableRegistry::seed(10);
        registry.reserve(4).unwrap();
        // Walk-in seating must go through the host: reserved is not available
        assert!(matches!(
            registry.occupy(4, "order-1").unwrap_err(),
            PosError::InvalidState(_)
        ));
    }
}
