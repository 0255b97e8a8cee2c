//! # Error Types
//!
//! Domain-specific error types for hearth-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hearth-core errors (this file)                                        │
//! │  ├── CoreError        - Cart and catalog rule violations               │
//! │  └── ValidationError  - Catalog / config input failures                │
//! │                                                                         │
//! │  hearth-terminal errors (in app)                                       │
//! │  └── AppError         - Config, I/O and core failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → message on screen      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failing operation leaves the cart exactly as it found it, so the
//! caller is free to re-prompt and try again.

use thiserror::Error;

use crate::types::FoodId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A non-positive quantity was passed to `Cart::add`.
    #[error("Quantity must be greater than 0, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// The food is not on the menu, or has no line in the cart.
    ///
    /// ## When This Occurs
    /// - `Catalog::lookup` with an id the menu does not carry
    /// - `Cart::update_qty` for a food that was never added (or was removed)
    #[error("Item not found: {0}")]
    ItemNotFound(FoodId),

    /// Accumulated quantity for a line no longer fits in an `i64`.
    #[error("Quantity for item {food_id} is too large")]
    QuantityOverflow { food_id: FoodId },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while building a catalog or loading configuration, before any
/// cart exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two menu entries with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
