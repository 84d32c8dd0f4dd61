//! # Error Types
//!
//! Domain-specific error types for takeout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  takeout-core errors (this file)                                       │
//! │  ├── CoreError        - Umbrella for everything below                  │
//! │  ├── ValidationError  - Catalog construction failures                  │
//! │  ├── SelectionError   - Rejected menu numbers (shown, never fatal)     │
//! │  └── SessionError     - The console itself failed                      │
//! │                                                                         │
//! │  takeout-cli errors (separate crate)                                   │
//! │  └── ConfigError      - Bad environment configuration                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in the message
//! 3. Malformed customer input is a `SelectionError` the session prints and
//!    absorbs; only `SessionError` can end a session early

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for callers that do not care which layer failed.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog data was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The ordering session could not continue.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog validation errors.
///
/// Raised once, while the catalog is built, never during a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Duplicate value (e.g., the same item twice in one category).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Selection Error
// =============================================================================

/// A menu number the customer typed that cannot be ordered.
///
/// ## User Workflow
/// ```text
/// Type menu number: pizza
///      │
///      ▼
/// NotANumber { input: "pizza" }
///      │
///      ▼
/// "pizza was not a menu option."  →  keep ordering?
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Input was not made of digits.
    #[error("{input} was not a menu option.")]
    NotANumber { input: String },

    /// Input was a number with no menu entry behind it.
    #[error("Sorry, that number isn't an option.")]
    NotAnOption { input: String },
}

impl SelectionError {
    /// The raw text the customer typed.
    pub fn input(&self) -> &str {
        match self {
            SelectionError::NotANumber { input } | SelectionError::NotAnOption { input } => input,
        }
    }
}

// =============================================================================
// Session Error
// =============================================================================

/// Failures that stop an ordering session.
///
/// Customer typos never end up here. Only the underlying console can fail.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
