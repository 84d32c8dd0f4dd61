//! # takeout-core: Pure Ordering Logic for Takeout
//!
//! This crate is the **heart** of Takeout. It holds the menu, the ordering
//! state machine and the receipt renderer, with zero direct I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Takeout Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    takeout-cli (binary)                         │   │
//! │  │    config ──► tracing ──► StdConsole ──► receipt on stdout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Console trait                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ takeout-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌─────────┐          │   │
//! │  │   │ catalog │─►│  menu   │─►│ session  │─►│ receipt │          │   │
//! │  │   │ Catalog │  │MenuIndex│  │OrderSess.│  │ Receipt │          │   │
//! │  │   └─────────┘  └─────────┘  └────┬─────┘  └─────────┘          │   │
//! │  │                                  │                              │   │
//! │  │                  ┌───────────────┼──────────────┐               │   │
//! │  │                  ▼               ▼              ▼               │   │
//! │  │             validation         order          money             │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO FILES • NO NETWORK • DETERMINISTIC              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The nested category → item → price menu data
//! - [`menu`] - Numbered view of the catalog the customer picks from
//! - [`validation`] - Parsing rules for selections, quantities, and "keep ordering?"
//! - [`order`] - Line items and the append-only order
//! - [`session`] - The interactive ordering state machine
//! - [`console`] - The line-oriented I/O boundary the session drives
//! - [`receipt`] - Text and JSON rendering of the finished order
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use takeout_core::{Catalog, MenuIndex, Money, OrderSession, ScriptedConsole};
//!
//! let catalog = Catalog::builder()
//!     .category("Burrito", [("Chicken", Money::from_cents(449))])
//!     .build()
//!     .unwrap();
//! let menu = MenuIndex::build(&catalog);
//!
//! let console = ScriptedConsole::new(["1", "2", "n"]);
//! let completed = OrderSession::new(&menu, console, "Test Kitchen")
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(completed.total.cents(), 898);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod console;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod receipt;
pub mod session;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use takeout_core::Money` instead of
// `use takeout_core::money::Money`

pub use catalog::{Catalog, CatalogBuilder, Category, CatalogItem};
pub use console::{Console, ScriptedConsole};
pub use error::{CoreError, CoreResult, SelectionError, SessionError, ValidationError};
pub use menu::{MenuEntry, MenuIndex};
pub use money::Money;
pub use order::{LineItem, Order};
pub use receipt::Receipt;
pub use session::{CompletedOrder, OrderSession, SessionState};
pub use validation::{DefaultReason, QuantityInput};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity used when the customer's answer is not a usable number.
pub const DEFAULT_QUANTITY: u32 = 1;

