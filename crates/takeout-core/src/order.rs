//! # Order
//!
//! Line items and the append-only order they are collected into.
//!
//! ## Invariants
//! - Every line item has quantity >= 1
//! - Lines keep the order they were selected in
//! - Repeat selections of the same item are separate lines (never merged)
//! - Nothing is ever removed or edited once appended

use serde::Serialize;

use crate::menu::MenuEntry;
use crate::money::Money;
use crate::validation::QuantityInput;

/// One accepted selection.
///
/// Uses the snapshot pattern: name and price are copied from the menu at the
/// moment of selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    name: String,
    unit_price: Money,
    quantity: u32,
}

impl LineItem {
    /// Snapshots a menu entry with the parsed quantity answer.
    pub fn from_entry(entry: &MenuEntry, quantity: QuantityInput) -> Self {
        LineItem {
            name: entry.display_name.clone(),
            unit_price: entry.price,
            quantity: quantity.quantity(),
        }
    }

    /// Display name, `"<category> - <item>"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Everything the customer has ordered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Order {
    lines: Vec<LineItem>,
}

impl Order {
    pub fn new() -> Self {
        Order::default()
    }

    /// Appends a line at the end.
    pub fn push(&mut self, line: LineItem) {
        self.lines.push(line);
    }

    /// Lines in selection order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line totals. Exact to the cent.
    pub fn total(&self) -> Money {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::DefaultReason;
    use proptest::prelude::*;

    fn entry(name: &str, cents: i64) -> MenuEntry {
        let (category, item) = name.split_once(" - ").unwrap();
        MenuEntry {
            index: 1,
            category: category.to_string(),
            item: item.to_string(),
            display_name: name.to_string(),
            price: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_line_item_snapshot() {
        let line = LineItem::from_entry(&entry("Burrito - Chicken", 449), QuantityInput::Entered(2));
        assert_eq!(line.name(), "Burrito - Chicken");
        assert_eq!(line.unit_price().cents(), 449);
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.line_total().cents(), 898);
    }

    #[test]
    fn test_defaulted_quantity_is_one() {
        let line = LineItem::from_entry(
            &entry("Burrito - Chicken", 449),
            QuantityInput::Defaulted(DefaultReason::NotANumber),
        );
        assert_eq!(line.quantity(), 1);
        assert_eq!(line.line_total().cents(), 449);
    }

    #[test]
    fn test_repeat_selections_are_not_merged() {
        let chicken = entry("Burrito - Chicken", 449);
        let mut order = Order::new();
        order.push(LineItem::from_entry(&chicken, QuantityInput::Entered(1)));
        order.push(LineItem::from_entry(&entry("Pizza - Cheese", 899), QuantityInput::Entered(1)));
        order.push(LineItem::from_entry(&chicken, QuantityInput::Entered(3)));

        assert_eq!(order.len(), 3);
        assert_eq!(order.lines()[0].name(), "Burrito - Chicken");
        assert_eq!(order.lines()[1].name(), "Pizza - Cheese");
        assert_eq!(order.lines()[2].quantity(), 3);
        assert_eq!(order.total_quantity(), 5);
        assert_eq!(order.total().cents(), 449 + 899 + 449 * 3);
    }

    #[test]
    fn test_empty_order_total_is_zero() {
        let order = Order::new();
        assert!(order.is_empty());
        assert!(order.total().is_zero());
        assert_eq!(order.total().to_string(), "$0.00");
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_price_times_quantity(
            picks in prop::collection::vec((0i64..100_000, 1u32..=u32::MAX), 0..20)
        ) {
            let mut order = Order::new();
            let mut expected = 0i64;
            for (cents, qty) in &picks {
                order.push(LineItem::from_entry(
                    &entry("Cat - Item", *cents),
                    QuantityInput::Entered(*qty),
                ));
                expected += cents * i64::from(*qty);
            }
            prop_assert_eq!(order.len(), picks.len());
            prop_assert_eq!(order.total().cents(), expected);
        }
    }
}
