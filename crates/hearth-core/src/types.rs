//! # Domain Types
//!
//! Value types shared by the catalog, the cart and the receipts.
//!
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │     FoodId      │   │      Food       │   │     Outlet      │
//! │  ─────────────  │   │  ─────────────  │   │  ─────────────  │
//! │  u32, > 0       │◄──│  id             │   │  brand          │
//! │                 │   │  name           │   │  name           │
//! │                 │   │  category       │   │  id ("PH-MG-1") │
//! │                 │   │  price (Money)  │   │                 │
//! └─────────────────┘   └─────────────────┘   └─────────────────┘
//! ```
//!
//! `Food` is immutable once built: its fields are private and only readable
//! through accessors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Food Id
// =============================================================================

/// Identifier of a food on the menu.
///
/// Ids are what the customer types at the counter, so they stay small
/// integers rather than UUIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoodId(u32);

impl FoodId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        FoodId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for FoodId {
    fn from(id: u32) -> Self {
        FoodId(id)
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so ids line up in receipt columns
        f.pad(&self.0.to_string())
    }
}

// =============================================================================
// Food
// =============================================================================

/// A dish or drink that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Food {
    id: FoodId,
    name: String,
    category: String,
    price: Money,
}

impl Food {
    /// Creates a food after checking its fields.
    ///
    /// ## Rules
    /// - id must be positive
    /// - name and category must not be blank (they are trimmed)
    /// - price must not be negative (zero is a free item)
    ///
    /// ```rust
    /// use hearth_core::{Food, Money};
    ///
    /// let food = Food::new(1, "Margherita", "Pizza", Money::from_major_minor(199, 0)).unwrap();
    /// assert_eq!(food.name(), "Margherita");
    ///
    /// assert!(Food::new(0, "Ghost", "Pizza", Money::zero()).is_err());
    /// ```
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();

        validation::validate_food_id(id)?;
        validation::validate_food_name(&name)?;
        validation::validate_category(&category)?;
        validation::validate_price(price)?;

        Ok(Food {
            id: FoodId(id),
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            price,
        })
    }

    #[inline]
    pub fn id(&self) -> FoodId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Outlet
// =============================================================================

/// The restaurant branch a catalog belongs to. Printed on menus and invoices.
///
/// Built only through [`Outlet::new`], so every outlet in circulation has
/// passed [`validation::validate_outlet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outlet {
    brand: String,
    name: String,
    id: String,
}

impl Outlet {
    /// Validates and trims the three fields.
    pub fn new(
        brand: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let brand = brand.into();
        let name = name.into();
        let id = id.into();
        validation::validate_outlet(&brand, &name, &id)?;

        Ok(Outlet {
            brand: brand.trim().to_string(),
            name: name.trim().to_string(),
            id: id.trim().to_string(),
        })
    }

    /// Chain name, used in the menu title and the thank-you line.
    #[inline]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Branch name, e.g. "Pizza Hut - MG Road".
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Branch code, e.g. "PH-MG-001".
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_trims_text_fields() {
        let food = Food::new(5, "  Garlic Bread ", " Sides", Money::from_minor(14900)).unwrap();
        assert_eq!(food.id(), FoodId::new(5));
        assert_eq!(food.name(), "Garlic Bread");
        assert_eq!(food.category(), "Sides");
        assert_eq!(food.price().minor(), 14900);
    }

    #[test]
    fn test_food_rejects_invalid_fields() {
        let price = Money::from_minor(100);
        assert!(Food::new(0, "Brownie", "Dessert", price).is_err());
        assert!(Food::new(8, "   ", "Dessert", price).is_err());
        assert!(Food::new(8, "Brownie", "", price).is_err());
        assert!(Food::new(8, "Brownie", "Dessert", Money::from_minor(-1)).is_err());
    }

    #[test]
    fn test_free_food_is_allowed() {
        assert!(Food::new(9, "Water", "Beverage", Money::zero()).is_ok());
    }

    #[test]
    fn test_food_id_display_pads() {
        assert_eq!(format!("{:<5}|", FoodId::new(12)), "12   |");
    }

    #[test]
    fn test_outlet_requires_name_and_id() {
        assert!(Outlet::new("Pizza Hut", "Pizza Hut - MG Road", "PH-MG-001").is_ok());
        assert!(Outlet::new("Pizza Hut", "", "PH-MG-001").is_err());
        assert!(Outlet::new("Pizza Hut", "MG Road", "PH MG 001").is_err());
    }

    #[test]
    fn test_outlet_trims_fields() {
        let outlet = Outlet::new(" Pizza Hut ", " Pizza Hut - MG Road", "PH-MG-001 ").unwrap();
        assert_eq!(outlet.brand(), "Pizza Hut");
        assert_eq!(outlet.name(), "Pizza Hut - MG Road");
        assert_eq!(outlet.id(), "PH-MG-001");
    }
}
