//! # Invoice
//!
//! A frozen copy of the cart taken when the customer confirms the order.
//!
//! ```text
//! Cart (mutable) ──► Invoice::issue(&catalog, &cart) ──► Invoice (frozen)
//!      │                                                     │
//!      ▼                                                     ▼
//! cart.clear() (caller decides)                  printed, logged as JSON
//! ```
//!
//! Issuing an invoice never touches the cart.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::cart::{Cart, CartItem};
use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::{FoodId, Outlet};

/// A receipt line. Same data as a cart line, copied out of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLine {
    pub food_id: FoodId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&CartItem> for InvoiceLine {
    fn from(item: &CartItem) -> Self {
        InvoiceLine {
            food_id: item.food().id(),
            name: item.food().name().to_string(),
            quantity: item.quantity(),
            unit_price: item.food().price(),
            line_total: item.line_total(),
        }
    }
}

/// The final receipt for a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    /// Order number (UUID v4).
    pub order_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub outlet: Outlet,
    /// Lines in food id order.
    pub lines: Vec<InvoiceLine>,
    pub total: Money,
}

impl Invoice {
    /// Issues an invoice for the current cart with a fresh order number.
    pub fn issue(catalog: &Catalog, cart: &Cart) -> Self {
        Self::with_details(catalog.outlet().clone(), cart, Uuid::new_v4(), Utc::now())
    }

    /// Issues an invoice with a given order number and time.
    pub fn with_details(
        outlet: Outlet,
        cart: &Cart,
        order_id: Uuid,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Invoice {
            order_id,
            issued_at,
            outlet,
            lines: cart.items().map(InvoiceLine::from).collect(),
            total: cart.total_bill(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
