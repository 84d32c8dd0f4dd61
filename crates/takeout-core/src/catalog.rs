//! # Menu Catalog
//!
//! The nested category → item → price data a restaurant sells.
//!
//! ## Shape
//! ```text
//! Catalog
//! ├── Category "Burrito"
//! │   ├── CatalogItem "Chicken"     $4.49
//! │   └── CatalogItem "Beef"        $5.49
//! └── Category "Pizza"
//!     └── CatalogItem "Cheese"      $8.99
//! ```
//!
//! Declaration order is preserved everywhere: it decides the menu numbers
//! handed out by [`crate::menu::MenuIndex`]. A catalog is validated once,
//! in [`CatalogBuilder::build`], and is immutable afterwards.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_name, validate_price, ValidationResult};

/// A single purchasable item inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub name: String,
    pub price: Money,
}

/// A named group of items, e.g. "Burrito".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<CatalogItem>,
}

/// Immutable, validated menu data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Starts an empty builder.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// True when no category holds any item.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// Collects categories in order and validates them on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: Vec<Category>,
}

impl CatalogBuilder {
    /// Appends a category with its items, in the order given.
    pub fn category<C, I, N>(mut self, name: C, items: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = (N, Money)>,
        N: Into<String>,
    {
        self.categories.push(Category {
            name: name.into(),
            items: items
                .into_iter()
                .map(|(name, price)| CatalogItem {
                    name: name.into(),
                    price,
                })
                .collect(),
        });
        self
    }

    /// Validates every entry and freezes the catalog.
    ///
    /// ## Rules
    /// - category and item names must not be blank
    /// - prices must not be negative
    /// - a category name appears once; an item name appears once per category
    pub fn build(self) -> ValidationResult<Catalog> {
        validate_categories(&self.categories)?;
        Ok(Catalog {
            categories: self.categories,
        })
    }
}

fn validate_categories(categories: &[Category]) -> ValidationResult<()> {
    let mut seen_categories = HashSet::new();

    for category in categories {
        validate_name("category name", &category.name)?;
        if !seen_categories.insert(category.name.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "category".to_string(),
                value: category.name.clone(),
            });
        }

        let mut seen_items = HashSet::new();
        for item in &category.items {
            validate_name("item name", &item.name)?;
            validate_price(item.price)?;
            if !seen_items.insert(item.name.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "item".to_string(),
                    value: format!("{} - {}", category.name, item.name),
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
