//! # hearth-core: Ordering Logic for the Hearth Counter
//!
//! Menu, cart and billing for a food outlet, as plain data and pure
//! functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hearth Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 hearth-terminal (apps/terminal)                 │   │
//! │  │    prompts ──► commands ──► prints receipts, logs orders        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hearth-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │ catalog  │  │   cart   │  │ invoice  │  │   render     │   │   │
//! │  │   │  Food    │  │ CartItem │  │ lines    │  │ menu / cart  │   │   │
//! │  │   │  Outlet  │  │ totals   │  │ total    │  │ / receipt    │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STDIN/STDOUT • NO FILES • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Food, FoodId, Outlet
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The immutable menu
//! - [`cart`] - The per-session cart
//! - [`invoice`] - Frozen receipt data for a placed order
//! - [`render`] - Fixed-width text for menus, carts and invoices
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use hearth_core::{Cart, Catalog, Food, FoodId, Money, Outlet};
//!
//! let outlet = Outlet::new("Pizza Hut", "Pizza Hut - MG Road", "PH-MG-001").unwrap();
//! let catalog = Catalog::new(
//!     outlet,
//!     vec![
//!         Food::new(1, "Margherita", "Pizza", "199.00".parse().unwrap()).unwrap(),
//!         Food::new(5, "Garlic Bread", "Sides", "149.00".parse().unwrap()).unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(catalog.lookup(FoodId::new(1)).unwrap(), 2).unwrap();
//! cart.add(catalog.lookup(FoodId::new(5)).unwrap(), 1).unwrap();
//! assert_eq!(cart.total_bill(), Money::from_major_minor(547, 0));
//!
//! cart.remove(FoodId::new(5));
//! assert_eq!(cart.total_bill().to_string(), "398.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod render;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals, QuantityChange};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{Invoice, InvoiceLine};
pub use money::Money;
pub use render::Renderer;
pub use types::{Food, FoodId, Outlet};
