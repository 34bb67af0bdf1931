//! Bill calculation using rust_decimal for precision
//!
//! Pure functions of (items, discount, tax rate) -> totals. All arithmetic
//! is done in `Decimal`; every derived monetary figure is rounded to
//! 2 decimal places before it contributes to the total, which is the
//! rounding the printed receipt shows.

use rust_decimal::prelude::*;
use shared::models::{BillTotals, Discount, OrderItem};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary figure the way the receipt displays it
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of `price * quantity` over all line items
pub fn subtotal(items: &[OrderItem]) -> Decimal {
    let sum: Decimal = items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum();
    round_money(sum)
}

/// Discount amount for a given subtotal.
///
/// Percentage discounts are taken on the subtotal; fixed discounts are
/// clamped to the subtotal so the taxable base can never go negative.
pub fn discount_amount(subtotal: Decimal, discount: Option<&Discount>) -> Decimal {
    match discount {
        None => Decimal::ZERO,
        Some(Discount::Percentage(percent)) => {
            round_money(subtotal * *percent / Decimal::ONE_HUNDRED)
        }
        Some(Discount::FixedAmount(amount)) => (*amount).min(subtotal),
    }
}

/// Compute the full bill: subtotal, discount, tax on the discounted base,
/// and final total
pub fn calculate_bill(
    items: &[OrderItem],
    discount: Option<&Discount>,
    tax_rate: Decimal,
) -> BillTotals {
    let subtotal = subtotal(items);
    let discount_amount = discount_amount(subtotal, discount);
    let taxable_base = subtotal - discount_amount;
    let tax = round_money(taxable_base * tax_rate);

    BillTotals {
        subtotal,
        discount_amount,
        tax,
        total: taxable_base + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_TAX_RATE;
    use shared::models::MenuItem;

    fn menu_item(id: &str, name: &str, cents: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            category: "Main Course".to_string(),
            image: None,
            description: None,
        }
    }

    fn line(id: &str, name: &str, cents: i64, quantity: u32) -> OrderItem {
        OrderItem::from_menu_item(&menu_item(id, name, cents), quantity, None)
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_subtotal_is_additive() {
        let mut items = vec![line("1", "Burger", 12_99, 2)];
        let before = subtotal(&items);
        assert_eq!(before, dec("25.98"));

        // Adding a line increases the subtotal by exactly price * qty
        items.push(line("4", "Fries", 4_99, 3));
        assert_eq!(subtotal(&items), before + dec("14.97"));

        // Removing it restores the original subtotal
        items.pop();
        assert_eq!(subtotal(&items), before);
    }

    #[test]
    fn test_subtotal_of_empty_order_is_zero() {
        assert_eq!(subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_percentage_discount() {
        let s = dec("30.97");
        assert_eq!(
            discount_amount(s, Some(&Discount::Percentage(dec("10")))),
            dec("3.10")
        );
        assert_eq!(
            discount_amount(s, Some(&Discount::Percentage(Decimal::ZERO))),
            Decimal::ZERO
        );
        assert_eq!(
            discount_amount(s, Some(&Discount::Percentage(dec("100")))),
            s
        );
    }

    #[test]
    fn test_fixed_discount_is_clamped_to_subtotal() {
        let s = dec("20.00");
        assert_eq!(
            discount_amount(s, Some(&Discount::FixedAmount(dec("5.00")))),
            dec("5.00")
        );
        // A discount larger than the subtotal never produces a negative base
        assert_eq!(
            discount_amount(s, Some(&Discount::FixedAmount(dec("50.00")))),
            s
        );
    }

    #[test]
    fn test_tax_is_derived_from_discounted_base() {
        let items = vec![line("1", "Burger", 100_00, 1)];
        let bill = calculate_bill(
            &items,
            Some(&Discount::FixedAmount(dec("20.00"))),
            DEFAULT_TAX_RATE,
        );
        assert_eq!(bill.subtotal, dec("100.00"));
        assert_eq!(bill.discount_amount, dec("20.00"));
        assert_eq!(bill.taxable_base(), dec("80.00"));
        assert_eq!(bill.tax, dec("6.60")); // 80.00 * 0.0825
        assert_eq!(bill.total, dec("86.60"));
    }

    #[test]
    fn test_reference_scenario_without_discount() {
        // 2x 12.99 + 1x 4.99
        let items = vec![line("1", "Burger", 12_99, 2), line("4", "Fries", 4_99, 1)];
        let bill = calculate_bill(&items, None, DEFAULT_TAX_RATE);

        assert_eq!(bill.subtotal, dec("30.97"));
        assert_eq!(bill.discount_amount, Decimal::ZERO);
        assert_eq!(bill.tax, dec("2.56")); // 30.97 * 0.0825 = 2.555025
        assert_eq!(bill.total, dec("33.53"));
    }

    #[test]
    fn test_reference_scenario_with_ten_percent_discount() {
        let items = vec![line("1", "Burger", 12_99, 2), line("4", "Fries", 4_99, 1)];
        let bill = calculate_bill(
            &items,
            Some(&Discount::Percentage(dec("10"))),
            DEFAULT_TAX_RATE,
        );

        assert_eq!(bill.discount_amount, dec("3.10")); // 3.097 rounds half-up
        assert_eq!(bill.taxable_base(), dec("27.87"));
        assert_eq!(bill.tax, dec("2.30")); // 27.87 * 0.0825 = 2.299275
        assert_eq!(bill.total, dec("30.17"));
    }

    #[test]
    fn test_full_discount_leaves_zero_total() {
        let items = vec![line("6", "Iced Tea", 2_99, 1)];
        let bill = calculate_bill(
            &items,
            Some(&Discount::FixedAmount(dec("10.00"))),
            DEFAULT_TAX_RATE,
        );
        assert_eq!(bill.discount_amount, dec("2.99"));
        assert_eq!(bill.tax, Decimal::ZERO);
        assert_eq!(bill.total, Decimal::ZERO);
    }

    #[test]
    fn test_accumulation_has_no_float_drift() {
        // 100 lines at $0.01: binary floats would drift, Decimal must not
        let items: Vec<OrderItem> = (0..100)
            .map(|i| line(&format!("p{}", i), "Penny Item", 1, 1))
            .collect();
        assert_eq!(subtotal(&items), dec("1.00"));
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(round_money(dec("0.005")), dec("0.01"));
        assert_eq!(round_money(dec("0.004")), dec("0.00"));
        assert_eq!(round_money(dec("2.555025")), dec("2.56"));
    }
}
