//! # Menu Index
//!
//! Flattens a [`Catalog`] into the numbered list the customer orders from.
//!
//! ## Numbering
//! ```text
//! Catalog                          MenuIndex
//! ───────                          ─────────
//! Burrito                          1 → "Burrito - Chicken"    $4.49
//!   Chicken  $4.49        ──►      2 → "Burrito - Beef"       $5.49
//!   Beef     $5.49                 3 → "Pizza - Cheese"       $8.99
//! Pizza
//!   Cheese   $8.99
//! ```
//!
//! Numbers start at 1 and follow catalog declaration order. Nothing is
//! sorted, so the same catalog always yields the same numbers.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::money::Money;

/// One orderable line on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// 1-based menu number.
    pub index: usize,
    pub category: String,
    pub item: String,
    /// `"<category> - <item>"`, the name shown on the menu and receipt.
    pub display_name: String,
    pub price: Money,
}

/// The numbered menu built once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuIndex {
    // entries[i].index == i + 1
    entries: Vec<MenuEntry>,
}

impl MenuIndex {
    /// Numbers every catalog item in declaration order.
    pub fn build(catalog: &Catalog) -> Self {
        let entries = catalog
            .categories()
            .iter()
            .flat_map(|category| {
                category
                    .items
                    .iter()
                    .map(move |item| (category.name.as_str(), item))
            })
            .enumerate()
            .map(|(position, (category, item))| MenuEntry {
                index: position + 1,
                category: category.to_string(),
                item: item.name.clone(),
                display_name: format!("{} - {}", category, item.name),
                price: item.price,
            })
            .collect();

        MenuIndex { entries }
    }

    /// Looks up a menu number. `0` and anything past the end are `None`.
    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in menu-number order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a MenuIndex {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
