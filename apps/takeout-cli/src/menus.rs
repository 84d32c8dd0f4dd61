//! # Compiled-in Menus
//!
//! The catalogs shipped with the binary. Which one is served is picked by
//! `TAKEOUT_MENU` (see [`crate::config`]).
//!
//! Prices are in cents. Table order is menu-number order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use takeout_core::validation::ValidationResult;
use takeout_core::{Catalog, Money};

type MenuTable = &'static [(&'static str, &'static [(&'static str, i64)])];

/// The regular take-out menu.
const MEALS: MenuTable = &[
    (
        "Burrito",
        &[("Chicken", 449), ("Beef", 549), ("Vegetarian", 399)],
    ),
    (
        "Rice Bowl",
        &[("Teriyaki Chicken", 999), ("Sweet and Sour Pork", 899)],
    ),
    (
        "Sushi",
        &[("California Roll", 749), ("Spicy Tuna Roll", 849)],
    ),
    (
        "Noodles",
        &[("Pad Thai", 699), ("Lo Mein", 799), ("Mee Goreng", 899)],
    ),
    (
        "Pizza",
        &[("Cheese", 899), ("Pepperoni", 1099), ("Vegetarian", 999)],
    ),
    ("Burger", &[("Chicken", 749), ("Beef", 849)]),
];

/// The dessert counter.
const DESSERTS: MenuTable = &[
    (
        "Cake",
        &[
            ("Kuih Lapis", 349),
            ("Strawberry Cheesecake", 649),
            ("Chocolate Crepe Cake", 699),
        ],
    ),
    ("Pie", &[("Apple", 499), ("Lemon Meringue", 549)]),
    (
        "Ice-cream",
        &[
            ("2-Scoop Vanilla Cone", 349),
            ("Banana Split", 849),
            ("Chocolate Sundae", 699),
        ],
    ),
];

/// Which compiled-in menu to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    #[default]
    Meals,
    Desserts,
}

impl MenuChoice {
    fn table(self) -> MenuTable {
        match self {
            MenuChoice::Meals => MEALS,
            MenuChoice::Desserts => DESSERTS,
        }
    }

    /// Builds and validates the catalog for this menu.
    pub fn catalog(self) -> ValidationResult<Catalog> {
        self.table()
            .iter()
            .fold(Catalog::builder(), |builder, (category, items)| {
                builder.category(
                    *category,
                    items
                        .iter()
                        .map(|(name, cents)| (*name, Money::from_cents(*cents))),
                )
            })
            .build()
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meals" => Ok(MenuChoice::Meals),
            "desserts" => Ok(MenuChoice::Desserts),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Meals => f.write_str("meals"),
            MenuChoice::Desserts => f.write_str("desserts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use takeout_core::MenuIndex;

    #[test]
    fn test_compiled_menus_are_valid() {
        assert_eq!(MenuChoice::Meals.catalog().unwrap().item_count(), 15);
        assert_eq!(MenuChoice::Desserts.catalog().unwrap().item_count(), 8);
    }

    #[test]
    fn test_meals_numbering() {
        let menu = MenuIndex::build(&MenuChoice::Meals.catalog().unwrap());
        assert_eq!(menu.get(1).unwrap().display_name, "Burrito - Chicken");
        assert_eq!(menu.get(4).unwrap().display_name, "Rice Bowl - Teriyaki Chicken");
        assert_eq!(menu.get(15).unwrap().display_name, "Burger - Beef");
        assert_eq!(menu.get(15).unwrap().price.to_string(), "$8.49");
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("meals".parse::<MenuChoice>(), Ok(MenuChoice::Meals));
        assert_eq!(" Desserts ".parse::<MenuChoice>(), Ok(MenuChoice::Desserts));
        assert_eq!("drinks".parse::<MenuChoice>(), Err("drinks".to_string()));
        assert_eq!(MenuChoice::default().to_string(), "meals");
    }
}
