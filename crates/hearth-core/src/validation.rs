//! # Validation Module
//!
//! Input validation for menu entries, outlets and quantities.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Terminal prompt                                               │
//! │  └── Whole numbers only, min/max bounds per question                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Config loading                                                │
//! │  └── Price strings parsed into Money                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                   │
//! │  └── Business rules: positive ids, non-blank names, no negative prices  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hearth_core::validation::{validate_food_name, validate_quantity};
//!
//! validate_food_name("Peppy Paneer").unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 100;
const MAX_CATEGORY_LEN: usize = 50;
const MAX_OUTLET_ID_LEN: usize = 50;
const MAX_CURRENCY_SYMBOL_LEN: usize = 4;

// =============================================================================
// Text Validators
// =============================================================================

fn require(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a food name: not blank, at most 100 characters.
pub fn validate_food_name(name: &str) -> ValidationResult<()> {
    require("name", name, MAX_NAME_LEN)
}

/// Validates a food category: not blank, at most 50 characters.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    require("category", category, MAX_CATEGORY_LEN)
}

/// Validates an outlet.
///
/// ## Rules
/// - brand and name must not be blank
/// - id must be 1-50 letters, digits, hyphens or underscores
///
/// ```rust
/// use hearth_core::types::Outlet;
///
/// assert!(Outlet::new("Pizza Hut", "Pizza Hut - MG Road", "PH-MG-001").is_ok());
/// assert!(Outlet::new("Pizza Hut", "Pizza Hut - MG Road", "PH/MG").is_err());
/// ```
pub fn validate_outlet(brand: &str, name: &str, id: &str) -> ValidationResult<()> {
    require("outlet brand", brand, MAX_NAME_LEN)?;
    require("outlet name", name, MAX_NAME_LEN)?;
    require("outlet id", id, MAX_OUTLET_ID_LEN)?;

    if !id
        .trim()
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "outlet id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates the currency symbol shown in receipt headers (e.g. "₹", "Rs").
pub fn validate_currency_symbol(symbol: &str) -> ValidationResult<()> {
    require("currency symbol", symbol, MAX_CURRENCY_SYMBOL_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a food id. Ids start at 1 so the counter never shows item 0.
pub fn validate_food_id(id: u32) -> ValidationResult<()> {
    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "food id".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// ```rust
/// use hearth_core::money::Money;
/// use hearth_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_minor(19900)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_minor(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity added to the cart.
///
/// ```text
/// Customer enters quantity: 0
///      │
///      ▼
/// validate_quantity(0) ──► InvalidQuantity { quantity: 0 }
///      │
///      ▼
/// Cart untouched, caller re-prompts
/// ```
pub fn validate_quantity(qty: i64) -> CoreResult<()> {
    if qty <= 0 {
        return Err(CoreError::InvalidQuantity { quantity: qty });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_food_name() {
        assert!(validate_food_name("Coke (500ml)").is_ok());
        assert!(validate_food_name("").is_err());
        assert!(validate_food_name("  ").is_err());
        assert!(validate_food_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Beverage").is_ok());
        assert_eq!(
            validate_category(""),
            Err(ValidationError::Required {
                field: "category".to_string()
            })
        );
    }

    #[test]
    fn test_validate_food_id() {
        assert!(validate_food_id(1).is_ok());
        assert!(validate_food_id(0).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert_eq!(
            validate_quantity(0),
            Err(CoreError::InvalidQuantity { quantity: 0 })
        );
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_currency_symbol() {
        assert!(validate_currency_symbol("₹").is_ok());
        assert!(validate_currency_symbol("Rs").is_ok());
        assert!(validate_currency_symbol("").is_err());
        assert!(validate_currency_symbol("RUPEE").is_err());
    }
}
