//! # Cart
//!
//! The customer's current selection: one line per food, each with a quantity.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Counter Action           Cart Method              Line Change          │
//! │  ──────────────           ───────────              ───────────          │
//! │                                                                         │
//! │  Add Item ───────────────► add(food, qty) ───────► qty += n / new line  │
//! │                                                                         │
//! │  Update Quantity ────────► update_qty(id, n) ────► qty = n / removed    │
//! │                                                                         │
//! │  Remove Item ────────────► remove(id) ───────────► line dropped         │
//! │                                                                         │
//! │  Place Order ────────────► clear() ──────────────► empty                │
//! │                                                                         │
//! │  View Cart ──────────────► items(), total_bill() ► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A cart belongs to one session and is never shared, so it carries no lock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Food, FoodId};
use crate::validation;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Design Notes
/// The line holds its own copy of the [`Food`] taken when it was first
/// added, so the cart keeps rendering the same name and price it showed the
/// customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    food: Food,
    quantity: i64,
}

impl CartItem {
    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Always > 0.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.food.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Quantity Change
// =============================================================================

/// What `update_qty` did to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now has the new quantity.
    Updated,
    /// A quantity of zero or less removed the line.
    Removed,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by food id (adding the same food increases quantity)
/// - Every line's key is its food's id
/// - Every quantity is > 0 (updating to 0 or less removes the line)
/// - Every line total, the total bill and the total quantity fit in an `i64`,
///   so reading them never overflows
/// - A failed call leaves the cart unchanged
#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    items: BTreeMap<FoodId, CartItem>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `qty` of a food, or increases its quantity if already present.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidQuantity`] when `qty <= 0`
    /// - [`CoreError::QuantityOverflow`] when the new quantity, the line total
    ///   or the cart total would no longer fit in an `i64`
    ///
    /// ```rust
    /// use hearth_core::{Cart, Food, Money};
    ///
    /// let pizza = Food::new(1, "Margherita", "Pizza", Money::from_major_minor(199, 0)).unwrap();
    /// let mut cart = Cart::new();
    ///
    /// cart.add(&pizza, 2).unwrap();
    /// cart.add(&pizza, 3).unwrap();
    /// assert_eq!(cart.get(pizza.id()).unwrap().quantity(), 5);
    ///
    /// assert!(cart.add(&pizza, 0).is_err());
    /// assert_eq!(cart.get(pizza.id()).unwrap().quantity(), 5);
    /// ```
    pub fn add(&mut self, food: &Food, qty: i64) -> CoreResult<()> {
        validation::validate_quantity(qty)?;

        let food_id = food.id();
        let overflow = || CoreError::QuantityOverflow { food_id };

        if let Some(item) = self.items.get(&food_id) {
            let new_qty = item.quantity.checked_add(qty).ok_or_else(overflow)?;
            self.ensure_totals_fit(food_id, item.food.price(), new_qty)?;
            if let Some(item) = self.items.get_mut(&food_id) {
                item.quantity = new_qty;
            }
            return Ok(());
        }

        self.ensure_totals_fit(food_id, food.price(), qty)?;
        self.items.insert(
            food_id,
            CartItem {
                food: food.clone(),
                quantity: qty,
            },
        );
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - Line missing: [`CoreError::ItemNotFound`], nothing changes
    /// - `qty <= 0`: the line is removed
    /// - Totals would overflow: [`CoreError::QuantityOverflow`], nothing changes
    /// - Otherwise: the quantity is replaced
    pub fn update_qty(&mut self, food_id: FoodId, qty: i64) -> CoreResult<QuantityChange> {
        if !self.items.contains_key(&food_id) {
            return Err(CoreError::ItemNotFound(food_id));
        }

        if qty <= 0 {
            self.items.remove(&food_id);
            return Ok(QuantityChange::Removed);
        }

        if let Some(price) = self.items.get(&food_id).map(|item| item.food.price()) {
            self.ensure_totals_fit(food_id, price, qty)?;
        }
        if let Some(item) = self.items.get_mut(&food_id) {
            item.quantity = qty;
        }
        Ok(QuantityChange::Updated)
    }

    /// Fails with [`CoreError::QuantityOverflow`] unless the line for
    /// `food_id`, set to `qty` at `price`, keeps its line total, the cart
    /// total and the total quantity within `i64`.
    fn ensure_totals_fit(&self, food_id: FoodId, price: Money, qty: i64) -> CoreResult<()> {
        let line_total = price
            .checked_multiply_quantity(qty)
            .ok_or(CoreError::QuantityOverflow { food_id })?;

        self.items
            .values()
            .filter(|item| item.food.id() != food_id)
            .try_fold((line_total, qty), |(bill, quantity), item| {
                Some((
                    bill.checked_add(item.line_total())?,
                    quantity.checked_add(item.quantity)?,
                ))
            })
            .map(|_| ())
            .ok_or(CoreError::QuantityOverflow { food_id })
    }

    /// Removes a line. Removing a food that is not in the cart does nothing.
    pub fn remove(&mut self, food_id: FoodId) -> Option<CartItem> {
        self.items.remove(&food_id)
    }

    /// Clears all lines; called once an order has been placed.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Sum of every line total, recomputed on each call.
    pub fn total_bill(&self) -> Money {
        self.items.values().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in food id order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    pub fn get(&self, food_id: FoodId) -> Option<&CartItem> {
        self.items.get(&food_id)
    }

    /// Number of distinct foods in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.values().map(|i| i.quantity).sum()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_bill: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_bill: cart.total_bill(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_food(id: u32, price_minor: i64) -> Food {
        Food::new(id, format!("Food {}", id), "Pizza", Money::from_minor(price_minor)).unwrap()
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let food = test_food(1, 19900);

        cart.add(&food, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_bill().minor(), 39800);
    }

    #[test]
    fn test_cart_add_same_food_increases_quantity() {
        let mut cart = Cart::new();
        let food = test_food(1, 19900);

        cart.add(&food, 2).unwrap();
        cart.add(&food, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get(food.id()).unwrap().quantity(), 5);
    }

    #[test]
    fn test_cart_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let food = test_food(1, 19900);

        assert_eq!(
            cart.add(&food, 0),
            Err(CoreError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(
            cart.add(&food, -4),
            Err(CoreError::InvalidQuantity { quantity: -4 })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_add_overflow_leaves_line_untouched() {
        let mut cart = Cart::new();
        let food = test_food(1, 1);

        cart.add(&food, i64::MAX).unwrap();
        assert_eq!(
            cart.add(&food, 1),
            Err(CoreError::QuantityOverflow { food_id: food.id() })
        );
        assert_eq!(cart.get(food.id()).unwrap().quantity(), i64::MAX);
    }

    #[test]
    fn test_cart_add_rejects_line_total_overflow() {
        let mut cart = Cart::new();
        let food = test_food(1, 19900);

        assert_eq!(
            cart.add(&food, 1_000_000_000_000_000),
            Err(CoreError::QuantityOverflow { food_id: food.id() })
        );
        assert!(cart.is_empty());
        assert!(cart.total_bill().is_zero());

        cart.add(&food, 2).unwrap();
        assert_eq!(
            cart.add(&food, i64::MAX / 19900),
            Err(CoreError::QuantityOverflow { food_id: food.id() })
        );
        assert_eq!(cart.get(food.id()).unwrap().quantity(), 2);
        assert_eq!(cart.total_bill().minor(), 39800);
    }

    #[test]
    fn test_cart_add_rejects_cart_total_overflow() {
        let mut cart = Cart::new();
        let a = test_food(1, 100);
        let b = test_food(2, 100);
        let half = i64::MAX / 100 / 2 + 1;

        cart.add(&a, half).unwrap();
        assert_eq!(
            cart.add(&b, half),
            Err(CoreError::QuantityOverflow { food_id: b.id() })
        );
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_bill(), Money::from_minor(half * 100));
    }

    #[test]
    fn test_cart_add_rejects_total_quantity_overflow() {
        let mut cart = Cart::new();
        let water = test_food(1, 0);
        let napkins = test_food(2, 0);

        cart.add(&water, i64::MAX).unwrap();
        assert_eq!(
            cart.add(&napkins, 1),
            Err(CoreError::QuantityOverflow { food_id: napkins.id() })
        );
        assert_eq!(cart.total_quantity(), i64::MAX);
        assert!(cart.total_bill().is_zero());
    }

    #[test]
    fn test_update_qty_rejects_overflow() {
        let mut cart = Cart::new();
        let food = test_food(3, 36900);
        cart.add(&food, 1).unwrap();

        assert_eq!(
            cart.update_qty(food.id(), i64::MAX),
            Err(CoreError::QuantityOverflow { food_id: food.id() })
        );
        assert_eq!(cart.get(food.id()).unwrap().quantity(), 1);
        assert_eq!(cart.total_bill().minor(), 36900);
    }

    #[test]
    fn test_cart_serializes_lines_with_their_food() {
        let mut cart = Cart::new();
        cart.add(&test_food(2, 34900), 3).unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        let line = &json["items"]["2"];
        assert_eq!(line["quantity"], 3);
        assert_eq!(line["food"]["id"], 2);
        assert_eq!(line["food"]["price"], 34900);
    }

    #[test]
    fn test_update_qty_replaces_quantity() {
        let mut cart = Cart::new();
        let food = test_food(2, 34900);
        cart.add(&food, 1).unwrap();

        assert_eq!(cart.update_qty(food.id(), 4), Ok(QuantityChange::Updated));
        assert_eq!(cart.get(food.id()).unwrap().quantity(), 4);
        assert_eq!(cart.total_bill().minor(), 139600);
    }

    #[test]
    fn test_update_qty_zero_or_negative_removes() {
        let mut cart = Cart::new();
        let a = test_food(1, 100);
        let b = test_food(2, 100);
        cart.add(&a, 1).unwrap();
        cart.add(&b, 1).unwrap();

        assert_eq!(cart.update_qty(a.id(), 0), Ok(QuantityChange::Removed));
        assert_eq!(cart.update_qty(b.id(), -1), Ok(QuantityChange::Removed));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_qty_missing_line() {
        let mut cart = Cart::new();
        let food = test_food(1, 100);
        cart.add(&food, 2).unwrap();

        assert_eq!(
            cart.update_qty(FoodId::new(7), 3),
            Err(CoreError::ItemNotFound(FoodId::new(7)))
        );
        assert_eq!(
            cart.update_qty(FoodId::new(7), 0),
            Err(CoreError::ItemNotFound(FoodId::new(7)))
        );
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get(food.id()).unwrap().quantity(), 2);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        let food = test_food(5, 14900);
        cart.add(&food, 1).unwrap();

        let removed = cart.remove(food.id()).unwrap();
        assert_eq!(removed.quantity(), 1);
        assert!(cart.is_empty());

        assert!(cart.remove(FoodId::new(99)).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_items_sorted_by_id() {
        let mut cart = Cart::new();
        cart.add(&test_food(8, 100), 1).unwrap();
        cart.add(&test_food(2, 100), 1).unwrap();
        cart.add(&test_food(5, 100), 1).unwrap();

        let ids: Vec<u32> = cart.items().map(|i| i.food().id().get()).collect();
        assert_eq!(ids, vec![2, 5, 8]);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(&test_food(1, 19900), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total_bill().is_zero());
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add(&test_food(1, 19900), 2).unwrap();
        cart.add(&test_food(5, 14900), 1).unwrap();

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_bill, Money::from_minor(54700));
    }
}
