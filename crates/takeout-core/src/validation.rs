//! # Validation Module
//!
//! Input rules for Takeout: catalog data checks and the parsing of every
//! answer the customer types.
//!
//! ## What Each Prompt Accepts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prompt                    Accepted            Otherwise                │
//! │  ──────                    ────────            ─────────                │
//! │                                                                         │
//! │  "Type menu number:"       digits on the menu  SelectionError (shown)   │
//! │                                                                         │
//! │  "What quantity of ...?"   digits, at least 1  quantity 1 (silent)      │
//! │                                                                         │
//! │  "Keep ordering? (N)"      "n" / "N" stops     anything else continues  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Surrounding whitespace is ignored in every answer.
//!
//! ## Usage
//! ```rust
//! use takeout_core::validation::{parse_quantity, wants_to_stop, DefaultReason, QuantityInput};
//!
//! assert_eq!(parse_quantity("3"), QuantityInput::Entered(3));
//! assert_eq!(parse_quantity("lots"), QuantityInput::Defaulted(DefaultReason::NotANumber));
//! assert_eq!(parse_quantity("lots").quantity(), 1);
//! assert!(wants_to_stop("N"));
//! ```

use serde::Serialize;

use crate::error::{SelectionError, ValidationError};
use crate::menu::{MenuEntry, MenuIndex};
use crate::money::Money;
use crate::DEFAULT_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a category or item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use takeout_core::money::Money;
/// use takeout_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(449)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Menu Selection
// =============================================================================

fn is_all_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Resolves what the customer typed at "Type menu number:".
///
/// ## Flow
/// ```text
/// raw input ──trim──► all ASCII digits? ──no──► NotANumber
///                          │
///                         yes
///                          ▼
///                    on the menu? ──no──► NotAnOption (0, N+1, 99999999999…)
///                          │
///                         yes
///                          ▼
///                      &MenuEntry
/// ```
pub fn parse_selection<'m>(raw: &str, menu: &'m MenuIndex) -> Result<&'m MenuEntry, SelectionError> {
    let input = raw.trim();

    if !is_all_digits(input) {
        return Err(SelectionError::NotANumber {
            input: input.to_string(),
        });
    }

    // Digits that overflow usize can't be on the menu either
    input
        .parse::<usize>()
        .ok()
        .and_then(|index| menu.get(index))
        .ok_or_else(|| SelectionError::NotAnOption {
            input: input.to_string(),
        })
}

// =============================================================================
// Quantity
// =============================================================================

/// Why a quantity answer fell back to [`DEFAULT_QUANTITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultReason {
    /// Empty, signed, decimal, or otherwise not plain digits.
    NotANumber,
    /// Digits that evaluate to zero.
    Zero,
    /// Digits too long to fit a `u32`.
    Overflow,
}

/// Outcome of the quantity prompt. Never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityInput {
    /// The customer typed a usable quantity.
    Entered(u32),
    /// The answer was unusable; the line is ordered once.
    Defaulted(DefaultReason),
}

impl QuantityInput {
    /// The quantity that goes on the line item. Always >= 1.
    pub fn quantity(&self) -> u32 {
        match self {
            QuantityInput::Entered(qty) => *qty,
            QuantityInput::Defaulted(_) => DEFAULT_QUANTITY,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, QuantityInput::Defaulted(_))
    }
}

/// Parses the quantity answer, falling back to 1 instead of failing.
///
/// ## Rules
/// - plain digits from 1 up to `u32::MAX` → `Entered`
/// - `"0"` → `Defaulted(Zero)`
/// - digits past `u32::MAX` → `Defaulted(Overflow)`
/// - anything else (`""`, `"-2"`, `"2.5"`, `"two"`) → `Defaulted(NotANumber)`
pub fn parse_quantity(raw: &str) -> QuantityInput {
    let input = raw.trim();

    if !is_all_digits(input) {
        return QuantityInput::Defaulted(DefaultReason::NotANumber);
    }

    match input.parse::<u32>() {
        Ok(0) => QuantityInput::Defaulted(DefaultReason::Zero),
        Ok(qty) => QuantityInput::Entered(qty),
        // only overflow can fail once every byte is a digit
        Err(_) => QuantityInput::Defaulted(DefaultReason::Overflow),
    }
}

// =============================================================================
// Keep Ordering?
// =============================================================================

/// True only for `n` / `N`. Empty input and everything else keeps ordering.
pub fn wants_to_stop(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("n")
}

// =============================================================================
// Unit Tests
// =============================================================================
