//! # Receipt & Menu Layout
//!
//! Pure text rendering for the two tables the customer sees.
//!
//! ## Menu Board
//! ```text
//! --------------------------------------------------
//! Item # | Item name                        | Price
//! -------|----------------------------------|-------
//! 1      | Burrito - Chicken                | $4.49
//! ```
//!
//! ## Receipt
//! ```text
//! ----------------------------------------------------
//! Item name                       | Price  | Quantity
//! --------------------------------|--------|----------
//! Burrito - Chicken               | $4.49  | 2
//! ----------------------------------------------------
//! Total price: $8.98
//! ----------------------------------------------------
//! ```
//!
//! Column widths are fixed. A name longer than its column is printed in full
//! and pushes the rest of that row to the right.

use std::fmt;

use serde::Serialize;

use crate::menu::{MenuEntry, MenuIndex};
use crate::money::Money;
use crate::order::Order;

const MENU_INDEX_WIDTH: usize = 7;
const NAME_WIDTH: usize = 32;
const PRICE_WIDTH: usize = 7;

const MENU_RULE: &str = "--------------------------------------------------";
const MENU_HEADING: &str = "Item # | Item name                        | Price";
const MENU_SEPARATOR: &str = "-------|----------------------------------|-------";

const RECEIPT_RULE: &str = "----------------------------------------------------";
const RECEIPT_HEADING: &str = "Item name                       | Price  | Quantity";
const RECEIPT_SEPARATOR: &str = "--------------------------------|--------|----------";

// =============================================================================
// Menu Board
// =============================================================================

/// One menu row: `<index> | <category> - <item> | $<price>`.
pub fn menu_line(entry: &MenuEntry) -> String {
    format!(
        "{:<iw$}| {:<nw$} | {}",
        entry.index,
        entry.display_name,
        entry.price,
        iw = MENU_INDEX_WIDTH,
        nw = NAME_WIDTH,
    )
}

/// The full menu board, heading included.
pub fn menu_lines(menu: &MenuIndex) -> Vec<String> {
    let mut lines = vec![
        MENU_RULE.to_string(),
        MENU_HEADING.to_string(),
        MENU_SEPARATOR.to_string(),
    ];
    lines.extend(menu.iter().map(menu_line));
    lines
}

// =============================================================================
// Receipt
// =============================================================================

/// One printed receipt row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub name: String,
    #[serde(rename = "unit_price_cents")]
    pub unit_price: Money,
    pub quantity: u32,
    #[serde(rename = "line_total_cents")]
    pub line_total: Money,
}

/// A finished order ready to print.
///
/// `Display` gives the text layout; `Serialize` gives the JSON one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    #[serde(rename = "total_cents")]
    pub total: Money,
}

impl Receipt {
    /// Builds a receipt from an order and the total computed for it.
    pub fn new(order: &Order, total: Money) -> Self {
        let lines = order
            .lines()
            .iter()
            .map(|line| ReceiptLine {
                name: line.name().to_string(),
                unit_price: line.unit_price(),
                quantity: line.quantity(),
                line_total: line.line_total(),
            })
            .collect();

        Receipt { lines, total }
    }

    /// Heading rows.
    pub fn heading() -> [&'static str; 3] {
        [RECEIPT_RULE, RECEIPT_HEADING, RECEIPT_SEPARATOR]
    }

    /// Footer rows with the total to exactly two decimals.
    pub fn footer(&self) -> [String; 3] {
        [
            RECEIPT_RULE.to_string(),
            format!("Total price: {}", self.total),
            RECEIPT_RULE.to_string(),
        ]
    }

    /// Every row of the text receipt, top to bottom.
    pub fn render_lines(&self) -> Vec<String> {
        let mut out: Vec<String> = Self::heading().iter().map(|s| s.to_string()).collect();
        out.extend(self.lines.iter().map(|line| {
            format!(
                "{:<nw$}| {:<pw$}| {}",
                line.name,
                line.unit_price,
                line.quantity,
                nw = NAME_WIDTH,
                pw = PRICE_WIDTH,
            )
        }));
        out.extend(self.footer());
        out
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
