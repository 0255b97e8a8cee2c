//! # Catalog
//!
//! The menu of one outlet: every food that can be ordered, keyed by id.
//!
//! Built once at startup and never changed afterwards. Foods are stored in a
//! `BTreeMap`, so listing them in id order needs no extra sort.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Food, FoodId, Outlet};

/// An immutable menu.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    outlet: Outlet,
    foods: BTreeMap<FoodId, Food>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate food ids.
    ///
    /// ```rust
    /// use hearth_core::{Catalog, Food, Money, Outlet};
    ///
    /// let outlet = Outlet::new("Pizza Hut", "Pizza Hut - MG Road", "PH-MG-001").unwrap();
    /// let foods = vec![
    ///     Food::new(5, "Garlic Bread", "Sides", Money::from_major_minor(149, 0)).unwrap(),
    ///     Food::new(1, "Margherita", "Pizza", Money::from_major_minor(199, 0)).unwrap(),
    /// ];
    ///
    /// let catalog = Catalog::new(outlet, foods).unwrap();
    /// let ids: Vec<u32> = catalog.list_foods().iter().map(|f| f.id().get()).collect();
    /// assert_eq!(ids, vec![1, 5]);
    /// ```
    pub fn new(outlet: Outlet, foods: impl IntoIterator<Item = Food>) -> CoreResult<Self> {
        let mut by_id = BTreeMap::new();
        for food in foods {
            let id = food.id();
            if by_id.insert(id, food).is_some() {
                return Err(ValidationError::Duplicate {
                    field: "food id".to_string(),
                    value: id.to_string(),
                }
                .into());
            }
        }

        Ok(Catalog {
            outlet,
            foods: by_id,
        })
    }

    /// The outlet this menu belongs to.
    pub fn outlet(&self) -> &Outlet {
        &self.outlet
    }

    /// Looks up a food. Absence is not an error here.
    pub fn get_food(&self, id: FoodId) -> Option<&Food> {
        self.foods.get(&id)
    }

    /// Looks up a food, reporting absence as [`CoreError::ItemNotFound`].
    pub fn lookup(&self, id: FoodId) -> CoreResult<&Food> {
        self.get_food(id).ok_or(CoreError::ItemNotFound(id))
    }

    /// All foods in id order.
    pub fn list_foods(&self) -> Vec<&Food> {
        self.foods.values().collect()
    }

    pub fn contains(&self, id: FoodId) -> bool {
        self.foods.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
