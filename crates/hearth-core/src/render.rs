//! # Receipt Rendering
//!
//! Turns a catalog, a cart or an invoice into the fixed-width text shown at
//! the counter. Rendering only reads its input and returns a `String`;
//! printing is the caller's job.
//!
//! ## Layout (60 columns)
//! ```text
//! ============================================================
//! CART
//! ============================================================
//! ID    Item                           Qty  Price (₹)  Total (₹)
//! ------------------------------------------------------------
//! 1     Margherita                       2     199.00     398.00
//! 5     Garlic Bread                     1     149.00     149.00
//! ------------------------------------------------------------
//!                                    TOTAL BILL (₹)     547.00
//! ============================================================
//! ```

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::invoice::Invoice;

/// Width of every rule line.
pub const RECEIPT_WIDTH: usize = 60;

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Renders menus, carts and invoices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    currency_symbol: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RECEIPT_WIDTH).collect()
}

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

impl Renderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Renderer {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Column header with the currency, e.g. "Price (₹)".
    fn money_header(&self, label: &str) -> String {
        format!("{} ({})", label, self.currency_symbol)
    }

    /// The menu, one row per food in id order.
    pub fn menu(&self, catalog: &Catalog) -> String {
        let outlet = catalog.outlet();
        let mut out = String::new();

        push_line(&mut out, rule('='));
        push_line(
            &mut out,
            format!("{} Menu | Outlet: {} (ID: {})", outlet.brand(), outlet.name(), outlet.id()),
        );
        push_line(&mut out, rule('='));
        push_line(
            &mut out,
            format!(
                "{:<5} {:<28} {:<15} {:>10}",
                "ID",
                "Item",
                "Category",
                self.money_header("Price")
            ),
        );
        push_line(&mut out, rule('-'));
        for food in catalog.list_foods() {
            push_line(
                &mut out,
                format!(
                    "{:<5} {:<28} {:<15} {:>10}",
                    food.id(),
                    food.name(),
                    food.category(),
                    food.price()
                ),
            );
        }
        push_line(&mut out, rule('='));
        out
    }

    /// The cart with a total-bill footer, or a short notice when empty.
    pub fn cart(&self, cart: &Cart) -> String {
        let mut out = String::new();

        push_line(&mut out, rule('='));
        push_line(&mut out, "CART");
        push_line(&mut out, rule('='));

        if cart.is_empty() {
            push_line(&mut out, "Your cart is empty.");
            push_line(&mut out, rule('='));
            return out;
        }

        push_line(
            &mut out,
            format!(
                "{:<5} {:<28} {:>5} {:>10} {:>10}",
                "ID",
                "Item",
                "Qty",
                self.money_header("Price"),
                self.money_header("Total")
            ),
        );
        push_line(&mut out, rule('-'));
        for item in cart.items() {
            push_line(
                &mut out,
                format!(
                    "{:<5} {:<28} {:>5} {:>10} {:>10}",
                    item.food().id(),
                    item.food().name(),
                    item.quantity(),
                    item.food().price(),
                    item.line_total()
                ),
            );
        }
        push_line(&mut out, rule('-'));
        push_line(
            &mut out,
            format!(
                "{:>49} {:>10}",
                self.money_header("TOTAL BILL"),
                cart.total_bill()
            ),
        );
        push_line(&mut out, rule('='));
        out
    }

    /// The order confirmation receipt.
    pub fn invoice(&self, invoice: &Invoice) -> String {
        let mut out = String::new();

        push_line(&mut out, rule('#'));
        push_line(&mut out, "ORDER CONFIRMATION / INVOICE");
        push_line(&mut out, rule('#'));
        push_line(
            &mut out,
            format!("Outlet: {} (ID: {})", invoice.outlet.name(), invoice.outlet.id()),
        );
        push_line(&mut out, format!("Order: {}", invoice.order_id));
        push_line(
            &mut out,
            format!("Date: {}", invoice.issued_at.format("%Y-%m-%d %H:%M UTC")),
        );
        push_line(&mut out, rule('-'));
        push_line(
            &mut out,
            format!(
                "{:<30} {:>5} {:>10} {:>12}",
                "Item",
                "Qty",
                self.money_header("Unit"),
                self.money_header("Line")
            ),
        );
        push_line(&mut out, rule('-'));
        for line in &invoice.lines {
            push_line(
                &mut out,
                format!(
                    "{:<30} {:>5} {:>10} {:>12}",
                    line.name, line.quantity, line.unit_price, line.line_total
                ),
            );
        }
        push_line(&mut out, rule('-'));
        push_line(
            &mut out,
            format!(
                "{:>47} {:>12}",
                self.money_header("TOTAL AMOUNT"),
                invoice.total
            ),
        );
        push_line(&mut out, rule('#'));
        push_line(
            &mut out,
            format!("Thank you for ordering from {}.", invoice.outlet.brand()),
        );
        out
    }
}
